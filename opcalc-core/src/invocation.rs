use std::fmt::Display;

use tracing::debug;

use crate::{calc_error::CalcError, operand_parser::parse_operand, operators::lookup};

/// A single `<int> <op> <int>` request.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub left_side: i32,
    /// Only the first character of the operator argument matters, so
    /// `//` means the same thing as `/`. This is `None` if the operator
    /// argument was empty.
    pub operator: Option<char>,
    pub right_side: i32,
}

impl Invocation {
    pub fn parse<T: AsRef<str>>(left_side: T, operator: T, right_side: T) -> Self {
        Invocation {
            left_side: parse_operand(left_side),
            operator: operator.as_ref().chars().next(),
            right_side: parse_operand(right_side),
        }
    }

    /// Parses the first three positional values, ignoring any extras.
    /// Returns `None` if there are fewer than three.
    pub fn from_args<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        match args {
            [left_side, operator, right_side, ..] => Some(Invocation::parse(
                left_side.as_ref(),
                operator.as_ref(),
                right_side.as_ref(),
            )),
            _ => None,
        }
    }

    pub fn operator_name(&self) -> String {
        self.operator.map(String::from).unwrap_or_default()
    }

    pub fn evaluate(&self) -> Result<i32, CalcError> {
        let op = self
            .operator
            .and_then(lookup)
            .ok_or_else(|| CalcError::UnsupportedOperator(self.operator_name()))?;
        let result = op.evaluate(self.left_side, self.right_side)?;
        debug!(invocation = %self, result, "evaluated");
        Ok(result)
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left_side,
            self.operator_name(),
            self.right_side
        )
    }
}
