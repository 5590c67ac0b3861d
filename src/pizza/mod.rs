//! # Factory Pattern: Pizzas
//!
//! [`order_pizza`] accepts any [`PizzaFactory`], asks it for one pizza and runs the
//! fixed lifecycle `prepare → bake → cut → box` against it. The driver never learns
//! which concrete pizza it received.
//!
//! ```rust
//! use pattern_recipe::console::RecordingConsole;
//! use pattern_recipe::pizza::{order_pizza, MargheritaPizzaFactory};
//!
//! let mut console = RecordingConsole::new();
//! order_pizza(&MargheritaPizzaFactory, &mut console);
//!
//! assert_eq!(console.lines(), [
//!     "Preparing Margherita Pizza",
//!     "Baking Margherita Pizza",
//!     "Cutting Margherita Pizza",
//!     "Boxing Margherita Pizza",
//! ]);
//! ```

pub mod factory;
pub mod product;

pub use factory::*;
pub use product::*;

use crate::console::Console;
use tracing::{info, instrument};

/// Creates one pizza through `factory` and drives it through every [`Stage`].
#[instrument(skip_all, fields(kind = %factory.kind()))]
pub fn order_pizza(factory: &dyn PizzaFactory, console: &mut dyn Console) {
    let pizza = factory.create_pizza();

    pizza.prepare(console);
    pizza.bake(console);
    pizza.cut(console);
    pizza.box_up(console);

    info!(pizza = pizza.name(), "Order complete");
}
