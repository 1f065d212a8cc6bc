pub mod checked;
mod calculation;
mod error;
mod operators;

pub use calculation::{Calculation, Outcome};
pub use error::MathError;
pub use operators::Op;
