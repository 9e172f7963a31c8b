//! Equation Solver
//!
//! Loads equations of the form `name = operand # operand ...` and resolves a
//! variable by folding its operands with a binary operator, following
//! references to other variables and rejecting cycles and undefined names.
pub mod cli;
pub mod config;
pub mod engine;
pub mod equations;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod solver;

pub use engine::{BinaryOp, CycleGuard, Operator, Resolver, Solution, UnresolvedSource};
pub use equations::{EquationLine, EquationStore, Operand};
pub use error::{Error, Result};
pub use solver::Solver;
