use tracing::{debug, trace};

use crate::calc_error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A single row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationEntry {
    pub symbol: char,
    pub op: ArithmeticOp,
}

/// Every operator we know about. Each symbol must appear at most once.
pub const OPERATOR_TABLE: [OperationEntry; 4] = [
    OperationEntry {
        symbol: '+',
        op: ArithmeticOp::Add,
    },
    OperationEntry {
        symbol: '-',
        op: ArithmeticOp::Subtract,
    },
    OperationEntry {
        symbol: '*',
        op: ArithmeticOp::Multiply,
    },
    OperationEntry {
        symbol: '/',
        op: ArithmeticOp::Divide,
    },
];

/// Finds the operation for the given symbol by scanning the table.
///
/// Returns `None` if the symbol isn't supported; it's up to the caller
/// to report that to the user.
pub fn lookup(symbol: char) -> Option<ArithmeticOp> {
    let found = OPERATOR_TABLE
        .iter()
        .find(|entry| entry.symbol == symbol)
        .map(|entry| entry.op);
    match found {
        Some(op) => trace!(%symbol, ?op, "operator found"),
        None => debug!(%symbol, "operator not in table"),
    }
    found
}

impl ArithmeticOp {
    pub fn symbol(&self) -> char {
        match self {
            ArithmeticOp::Add => '+',
            ArithmeticOp::Subtract => '-',
            ArithmeticOp::Multiply => '*',
            ArithmeticOp::Divide => '/',
        }
    }

    /// Applies the operation with the same wrapping behavior as a native
    /// 32-bit `int`. Division truncates toward zero.
    pub fn evaluate(&self, left_side: i32, right_side: i32) -> Result<i32, CalcError> {
        let result = match self {
            ArithmeticOp::Add => left_side.wrapping_add(right_side),
            ArithmeticOp::Subtract => left_side.wrapping_sub(right_side),
            ArithmeticOp::Multiply => left_side.wrapping_mul(right_side),
            ArithmeticOp::Divide => {
                // Integer division by zero has no defined result, so we
                // report it instead of letting the process abort.
                if right_side == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                left_side.wrapping_div(right_side)
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{lookup, ArithmeticOp, OPERATOR_TABLE};
    use crate::calc_error::CalcError;

    #[test]
    fn table_symbols_are_unique() {
        let symbols: HashSet<char> = OPERATOR_TABLE.iter().map(|entry| entry.symbol).collect();
        assert_eq!(symbols.len(), OPERATOR_TABLE.len());
    }

    #[test]
    fn table_symbols_match_ops() {
        for entry in OPERATOR_TABLE {
            assert_eq!(entry.op.symbol(), entry.symbol);
            assert_eq!(lookup(entry.symbol), Some(entry.op));
        }
    }

    #[test]
    fn lookup_rejects_unknown_symbols() {
        for symbol in ['%', '^', 'x', '\0', ' '] {
            assert_eq!(lookup(symbol), None, "looking up {:?}", symbol);
        }
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(ArithmeticOp::Divide.evaluate(7, 2), Ok(3));
        assert_eq!(ArithmeticOp::Divide.evaluate(-7, 2), Ok(-3));
        assert_eq!(ArithmeticOp::Divide.evaluate(7, -2), Ok(-3));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            ArithmeticOp::Divide.evaluate(10, 0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(ArithmeticOp::Add.evaluate(i32::MAX, 1), Ok(i32::MIN));
        assert_eq!(ArithmeticOp::Subtract.evaluate(i32::MIN, 1), Ok(i32::MAX));
        assert_eq!(ArithmeticOp::Multiply.evaluate(i32::MAX, 2), Ok(-2));
        assert_eq!(ArithmeticOp::Divide.evaluate(i32::MIN, -1), Ok(i32::MIN));
    }
}
