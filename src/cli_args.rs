use clap::{ArgAction, Parser};

/// Evaluates `<int> <op> <int>`, where <op> is one of + - * /
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct CliArgs {
    /// Left operand, operator and right operand.
    #[arg(
        value_name = "INT OP INT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub values: Vec<String>,

    /// Enter interactive mode after evaluating any arguments.
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (-d, -dd, -ddd).
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl CliArgs {
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }
}
