//! Best-effort formatting of written files by an external program.

use std::{fmt, path::Path, process::Command};

/// Error from running a formatter.
#[derive(Debug)]
pub struct FormatError {
    pub message: String,
    pub output: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.output.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
        }
    }
}

impl std::error::Error for FormatError {}

/// An external formatter invoked as `program [args...] <file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: String,
    args: Vec<String>,
}

impl Formatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse a whitespace separated command line such as `"gofmt -w"`.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        let program = words.next()?;
        Some(words.fold(Self::new(program), |formatter, word| formatter.arg(word)))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Format `path` in place.
    pub fn run(&self, path: &Path) -> Result<(), FormatError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| FormatError {
                message: format!("failed to run {}: {}", self.program, e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            Err(FormatError {
                message: format!("{} exited with {}", self.command_line(), output.status),
                output: format!("{}{}", stderr, stdout).trim().to_string(),
            })
        }
    }
}
