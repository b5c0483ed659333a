#![allow(nonstandard_style)]

pub mod error_handling;
pub mod evaluating;
pub mod formatting;
pub mod parsing;
pub mod rewriting;
pub mod scanning;
pub mod session;
pub mod validating;

pub use error_handling::{CalcError, Result};
pub use evaluating::{calculate, Evaluator};
pub use session::{Language, Session};
pub use validating::Validator;
