//! # Pizza Products
//!
//! The [`Pizza`] trait is the abstract product of the factory pattern. Concrete
//! pizzas only say which [`PizzaKind`] they are; the name and the four lifecycle stages are
//! **Provided Methods** built on top of [`Pizza::run_stage`], so every variant
//! reports its stages with the same wording.

use super::factory::PizzaKind;
use crate::console::Console;
use std::fmt::{self, Display};
use tracing::debug;

/// One step of the fixed pizza lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Prepare,
    Bake,
    Cut,
    Box,
}

impl Stage {
    /// Every stage, in the order [`order_pizza`](crate::pizza::order_pizza) runs them.
    pub const ALL: [Stage; 4] = [Stage::Prepare, Stage::Bake, Stage::Cut, Stage::Box];

    /// The progressive verb used in status lines (e.g. `"Baking"`).
    pub fn verb(self) -> &'static str {
        match self {
            Stage::Prepare => "Preparing",
            Stage::Bake => "Baking",
            Stage::Cut => "Cutting",
            Stage::Box => "Boxing",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Prepare => "prepare",
            Stage::Bake => "bake",
            Stage::Cut => "cut",
            Stage::Box => "box",
        };
        f.write_str(name)
    }
}

/// A product that can be driven through the pizza lifecycle.
///
/// # Provided Methods
/// Implementors only supply [`Pizza::kind`]. The name and the stage methods
/// ([`prepare`](Pizza::prepare), [`bake`](Pizza::bake), [`cut`](Pizza::cut),
/// [`box_up`](Pizza::box_up)) each write a single status line such as
/// `Cutting Margherita Pizza`.
pub trait Pizza {
    /// The variant this pizza belongs to.
    fn kind(&self) -> PizzaKind;

    /// Human-readable name, e.g. `"Margherita Pizza"`.
    fn name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Runs a single stage and reports it on the console.
    fn run_stage(&self, stage: Stage, console: &mut dyn Console) {
        debug!(pizza = self.name(), %stage, "Stage");
        console.write_line(&format!("{} {}", stage.verb(), self.name()));
    }

    fn prepare(&self, console: &mut dyn Console) {
        self.run_stage(Stage::Prepare, console);
    }

    fn bake(&self, console: &mut dyn Console) {
        self.run_stage(Stage::Bake, console);
    }

    fn cut(&self, console: &mut dyn Console) {
        self.run_stage(Stage::Cut, console);
    }

    /// The boxing stage (`box` is a reserved word).
    fn box_up(&self, console: &mut dyn Console) {
        self.run_stage(Stage::Box, console);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MargheritaPizza;

impl Pizza for MargheritaPizza {
    fn kind(&self) -> PizzaKind {
        PizzaKind::Margherita
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PepperoniPizza;

impl Pizza for PepperoniPizza {
    fn kind(&self) -> PizzaKind {
        PizzaKind::Pepperoni
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;

    #[test]
    fn each_stage_writes_one_line() {
        let mut console = RecordingConsole::new();
        let pizza = PepperoniPizza;

        pizza.cut(&mut console);
        pizza.box_up(&mut console);

        assert_eq!(console.lines(), ["Cutting Pepperoni Pizza", "Boxing Pepperoni Pizza"]);
    }

    #[test]
    fn stages_are_listed_in_lifecycle_order() {
        let verbs: Vec<_> = Stage::ALL.iter().map(|s| s.verb()).collect();
        assert_eq!(verbs, ["Preparing", "Baking", "Cutting", "Boxing"]);
    }
}
