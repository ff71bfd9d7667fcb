use opcalc_core::CalcError;
use thiserror::Error;

/// Errors that end an evaluation. These are what get displayed to the user.
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("[ERRO] Usage: opcalc <int> <op> <int> - To div operator use '//'")]
    Usage,

    #[error("{0}")]
    Calc(#[from] CalcError),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage | CliError::Calc(_) => 1,
        }
    }
}
