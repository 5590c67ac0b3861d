use pattern_recipe::console::RecordingConsole;
use pattern_recipe::pizza::{
    order_pizza, MargheritaPizzaFactory, PepperoniPizzaFactory, Pizza, PizzaFactory,
    PizzaKind, Stage,
};

/// Every kind yields exactly four lines naming the kind and the stage, in lifecycle order.
#[test]
fn test_order_pizza_runs_all_stages_in_order() {
    for kind in PizzaKind::ALL {
        let mut console = RecordingConsole::new();
        order_pizza(kind.factory().as_ref(), &mut console);

        let expected: Vec<String> = Stage::ALL
            .iter()
            .map(|stage| format!("{} {}", stage.verb(), kind.display_name()))
            .collect();
        assert_eq!(console.lines(), expected.as_slice(), "kind: {kind}");
    }
}

#[test]
fn test_factories_are_bound_to_one_variant() {
    let margherita = MargheritaPizzaFactory;
    let pepperoni = PepperoniPizzaFactory;

    assert_eq!(margherita.kind(), PizzaKind::Margherita);
    assert_eq!(margherita.create_pizza().name(), "Margherita Pizza");
    assert_eq!(pepperoni.kind(), PizzaKind::Pepperoni);
    assert_eq!(pepperoni.create_pizza().name(), "Pepperoni Pizza");

    // A new pizza on each request, always of the same variant
    assert_eq!(margherita.create_pizza().name(), margherita.create_pizza().name());
}

#[test]
fn test_driver_accepts_any_factory() {
    let factories: Vec<Box<dyn PizzaFactory>> =
        vec![Box::new(PepperoniPizzaFactory), Box::new(MargheritaPizzaFactory)];

    let mut console = RecordingConsole::new();
    for factory in &factories {
        order_pizza(factory.as_ref(), &mut console);
    }

    let lines = console.lines();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Preparing Pepperoni Pizza");
    assert_eq!(lines[7], "Boxing Margherita Pizza");
}

/// The `Ordering ...` header and the stage lines name the same pizza.
#[test]
fn test_pizza_name_follows_its_kind() {
    for kind in PizzaKind::ALL {
        let factory = kind.factory();
        let pizza = factory.create_pizza();

        assert_eq!(factory.kind(), kind);
        assert_eq!(pizza.kind(), kind);
        assert_eq!(pizza.name(), kind.to_string());
    }
}
