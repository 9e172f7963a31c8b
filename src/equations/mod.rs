pub mod parser;
pub mod store;

pub use parser::{parse_line, EquationLine, Operand};
pub use store::EquationStore;
