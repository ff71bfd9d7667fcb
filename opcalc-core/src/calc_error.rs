use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    /// The symbol isn't in the operator table. Holds the symbol as typed,
    /// which is empty if no operator character was given at all.
    #[error("Operator {0} not available")]
    UnsupportedOperator(String),

    #[error("Division by zero is undefined")]
    DivisionByZero,
}
