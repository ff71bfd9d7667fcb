use std::io::{stdin, IsTerminal, Stderr, Stdout, Write};
use std::sync::mpsc::{channel, Receiver};

use crate::cli_args::CliArgs;
use crate::cli_error::{CliError, CliResult};
use crate::stdio_printer::StdioPrinter;
use opcalc_core::Invocation;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, warn};

/// Where interactive lines come from. History only lives for the
/// session; nothing is written to disk.
pub trait LineSource {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError>;
}

impl LineSource for DefaultEditor {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        DefaultEditor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, line: &str) -> Result<(), ReadlineError> {
        DefaultEditor::add_history_entry(self, line).map(|_| ())
    }
}

pub struct StdioCalculator<O: Write, E: Write> {
    args: CliArgs,
    printer: StdioPrinter<O, E>,
    /// When stdin isn't a terminal, the first failed line ends the session.
    stdin_is_terminal: bool,
}

impl StdioCalculator<Stdout, Stderr> {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator {
            args,
            printer: StdioPrinter::new(),
            stdin_is_terminal: stdin().is_terminal(),
        }
    }
}

impl<O: Write, E: Write> StdioCalculator<O, E> {
    pub fn with_printer(
        args: CliArgs,
        printer: StdioPrinter<O, E>,
        stdin_is_terminal: bool,
    ) -> Self {
        StdioCalculator {
            args,
            printer,
            stdin_is_terminal,
        }
    }

    pub fn into_printer(self) -> StdioPrinter<O, E> {
        self.printer
    }

    /// Evaluates `<int> <op> <int>` from the first three values, printing
    /// the parsed input before dispatching and the result afterwards.
    fn evaluate_values<T: AsRef<str>>(&mut self, values: &[T]) -> CliResult<i32> {
        let invocation = Invocation::from_args(values).ok_or(CliError::Usage)?;
        self.printer.println(format!("[INFO] Input: {}", invocation));
        let result = invocation.evaluate()?;
        self.printer.println(format!("[INFO] Result: {}", result));
        Ok(result)
    }

    fn evaluate_line(&mut self, line: &str) -> CliResult<i32> {
        let values = line.split_whitespace().collect::<Vec<_>>();
        self.evaluate_values(&values)
    }

    fn show_error(&mut self, err: &CliError) {
        debug!(?err, "evaluation failed");
        self.printer.error(err.to_string());
    }

    pub fn run(&mut self) -> i32 {
        if self.args.interactive {
            return self.run_interactive();
        }
        let values = self.args.values.clone();
        match self.evaluate_values(&values) {
            Ok(_) => 0,
            Err(err) => {
                self.show_error(&err);
                err.exit_code()
            }
        }
    }

    fn run_interactive(&mut self) -> i32 {
        let Ok(mut rl) = DefaultEditor::new() else {
            self.printer.error("Initializing DefaultEditor failed!");
            return 1;
        };

        let (tx, rx) = channel();

        if let Err(err) = ctrlc::set_handler(move || {
            tx.send(()).ok();
        }) {
            self.printer
                .error(format!("Error setting Ctrl-C handler ({}).", err));
            return 1;
        }

        match self.run_session(&mut rl, &rx) {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    /// Errors are only fatal when input isn't coming from a person.
    fn handle_result(&mut self, result: CliResult<i32>) -> Result<(), i32> {
        if let Err(err) = result {
            self.show_error(&err);
            if !self.stdin_is_terminal {
                return Err(err.exit_code());
            }
        }
        Ok(())
    }

    fn run_session<L: LineSource>(
        &mut self,
        rl: &mut L,
        interrupts: &Receiver<()>,
    ) -> Result<(), i32> {
        if self.args.has_values() {
            let values = self.args.values.clone();
            let result = self.evaluate_values(&values);
            self.handle_result(result)?;
        }

        self.printer.println(format!(
            "Welcome to opcalc v{}. Enter <int> <op> <int>.",
            env!("CARGO_PKG_VERSION")
        ));
        self.printer.println("Press CTRL-C to exit.");

        loop {
            match rl.readline("] ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        warn!(?err, "failed to add history entry");
                    }
                    let result = self.evaluate_line(&line);
                    self.handle_result(result)?;
                }
                Err(ReadlineError::Interrupted) => {
                    self.printer.eprintln("CTRL-C pressed, exiting.");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    self.printer.error(format!("Error: {:?}", err));
                    return Err(1);
                }
            }

            if interrupts.try_recv().is_ok() {
                self.printer.eprintln("CTRL-C pressed, exiting.");
                break;
            }
        }

        Ok(())
    }
}
