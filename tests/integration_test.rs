use pattern_recipe::console::RecordingConsole;
use pattern_recipe::demo;

/// Full end-to-end run of all three demonstrations.
#[test]
fn test_full_demo_output() {
    let mut console = RecordingConsole::new();
    demo::run(&mut console).expect("demo failed");

    let expected = [
        "Ordering Margherita Pizza...",
        "Preparing Margherita Pizza",
        "Baking Margherita Pizza",
        "Cutting Margherita Pizza",
        "Boxing Margherita Pizza",
        "Ordering Pepperoni Pizza...",
        "Preparing Pepperoni Pizza",
        "Baking Pepperoni Pizza",
        "Cutting Pepperoni Pizza",
        "Boxing Pepperoni Pizza",
        "Processing payment via PayPal...",
        "Paid $100 via PayPal",
        "Processing payment via Stripe...",
        "Paid $150 via Stripe",
        "Books in the library:",
        "The Great Gatsby",
        "To Kill a Mockingbird",
        "1984",
        "Pride and Prejudice",
    ];
    assert_eq!(console.lines(), expected);
}

#[test]
fn test_demos_are_independent() {
    let mut console = RecordingConsole::new();
    demo::library_demo(&mut console).unwrap();
    assert_eq!(console.lines().len(), 1 + demo::LIBRARY_TITLES.len());

    console.clear();
    demo::payment_demo(&mut console).unwrap();
    assert_eq!(console.lines().len(), 4);

    console.clear();
    demo::pizza_demo(&mut console);
    assert_eq!(console.lines().len(), 10);
}
