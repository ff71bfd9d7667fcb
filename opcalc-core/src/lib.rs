mod calc_error;
mod invocation;
mod operand_parser;
mod operators;

pub use calc_error::CalcError;
pub use invocation::Invocation;
pub use operand_parser::parse_operand;
pub use operators::{lookup, ArithmeticOp, OperationEntry, OPERATOR_TABLE};
