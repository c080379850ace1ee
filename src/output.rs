//! GitHub Actions output emission
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Outside of
//! Actions the value is written to stdout so the tool can be used locally.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Delimiter for multiline values
const DELIMITER: &str = "MAGENTO_MATRIX_EOF";

/// Appends `name=value` to the output file, or prints the value to stdout
/// when no output file is configured.
pub fn set_output(name: &str, value: &str, github_output: Option<&Path>) -> io::Result<()> {
    match github_output {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            write_output(&mut file, name, value)
        }
        None => writeln!(io::stdout().lock(), "{value}"),
    }
}

/// Writes one output entry in the GitHub Actions output file format
pub fn write_output<W: Write>(writer: &mut W, name: &str, value: &str) -> io::Result<()> {
    if !value.contains('\n') {
        return writeln!(writer, "{name}={value}");
    }

    if value.lines().any(|line| line == DELIMITER) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output value for {name} contains the delimiter {DELIMITER}"),
        ));
    }

    writeln!(writer, "{name}<<{DELIMITER}")?;
    writeln!(writer, "{value}")?;
    writeln!(writer, "{DELIMITER}")
}

/// Formats an `::error::` workflow command that marks the step as failed
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
