//! # Pizza Factories
//!
//! A [`PizzaFactory`] is the creator half of the factory pattern: it hands out a
//! fresh [`Pizza`] of one fixed variant each time it is asked. Callers such as
//! [`order_pizza`](crate::pizza::order_pizza) only see `&dyn PizzaFactory` and
//! never name the concrete product type.

use super::product::{MargheritaPizza, PepperoniPizza, Pizza};
use std::fmt::{self, Display};

/// The closed set of pizza variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaKind {
    Margherita,
    Pepperoni,
}

impl PizzaKind {
    pub const ALL: [PizzaKind; 2] = [PizzaKind::Margherita, PizzaKind::Pepperoni];

    /// The name every [`Pizza`] of this kind reports.
    pub fn display_name(self) -> &'static str {
        match self {
            PizzaKind::Margherita => "Margherita Pizza",
            PizzaKind::Pepperoni => "Pepperoni Pizza",
        }
    }

    /// Returns the factory bound to this variant.
    pub fn factory(self) -> Box<dyn PizzaFactory> {
        match self {
            PizzaKind::Margherita => Box::new(MargheritaPizzaFactory),
            PizzaKind::Pepperoni => Box::new(PepperoniPizzaFactory),
        }
    }
}

impl Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Creator of exactly one pizza variant.
pub trait PizzaFactory {
    /// Builds a new pizza. Construction cannot fail.
    fn create_pizza(&self) -> Box<dyn Pizza>;

    /// The variant this factory is bound to.
    fn kind(&self) -> PizzaKind;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MargheritaPizzaFactory;

impl PizzaFactory for MargheritaPizzaFactory {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(MargheritaPizza)
    }

    fn kind(&self) -> PizzaKind {
        PizzaKind::Margherita
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PepperoniPizzaFactory;

impl PizzaFactory for PepperoniPizzaFactory {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(PepperoniPizza)
    }

    fn kind(&self) -> PizzaKind {
        PizzaKind::Pepperoni
    }
}
