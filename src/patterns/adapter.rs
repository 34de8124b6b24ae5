//! Adapter: reuse an error logger that expects split number/text fields with
//! an error object that only carries a combined `number:text` string.

use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, anyhow};

const NOT_FOUND: &str = "404:Not Found";

#[derive(Debug, Clone)]
pub struct ErrorObject {
    error: String,
}

impl ErrorObject {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorObject {
            error: error.into(),
        }
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

/// Writes the combined error string to a console buffer.
pub struct LogToConsole<'a> {
    error: &'a ErrorObject,
}

impl<'a> LogToConsole<'a> {
    pub fn new(error: &'a ErrorObject) -> Self {
        LogToConsole { error }
    }

    pub fn write(&self, console: &mut Vec<String>) {
        console.push(self.error.error().to_string());
    }
}

/// Interface the CSV logger needs from an error.
pub trait NumberedError {
    fn error_number(&self) -> &str;
    fn error_text(&self) -> &str;
}

pub struct LogToCsv<'a, E: NumberedError> {
    error: &'a E,
}

impl<'a, E: NumberedError> LogToCsv<'a, E> {
    pub fn new(error: &'a E) -> Self {
        LogToCsv { error }
    }

    /// Appends one `number:text` record.
    pub fn write(&self, csv: &mut Vec<String>) {
        csv.push(format!(
            "{}:{}",
            self.error.error_number(),
            self.error.error_text()
        ));
    }
}

/// Splits an `ErrorObject` into the fields `LogToCsv` expects.
#[derive(Debug, Clone)]
pub struct LogToCsvAdapter {
    inner: ErrorObject,
    number: String,
    text: String,
}

impl LogToCsvAdapter {
    pub fn new(inner: ErrorObject) -> Result<Self> {
        let (number, text) = inner
            .error()
            .split_once(':')
            .ok_or_else(|| anyhow!("error '{}' has no number:text separator", inner.error()))?;
        Ok(LogToCsvAdapter {
            number: number.to_string(),
            text: text.to_string(),
            inner,
        })
    }

    pub fn inner(&self) -> &ErrorObject {
        &self.inner
    }
}

impl NumberedError for LogToCsvAdapter {
    fn error_number(&self) -> &str {
        &self.number
    }

    fn error_text(&self) -> &str {
        &self.text
    }
}

fn demonstrate() -> Result<Observed> {
    let mut console = Vec::new();
    let error = ErrorObject::new(NOT_FOUND);
    LogToConsole::new(&error).write(&mut console);

    let mut csv = Vec::new();
    let adapted = LogToCsvAdapter::new(ErrorObject::new(NOT_FOUND))?;
    LogToCsv::new(&adapted).write(&mut csv);

    Ok(Observed::pairs([
        ("console", console.join("\n")),
        ("csv", csv.join("\n")),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "adapter",
        PatternFamily::Structural,
        "Adapt a combined error string to a logger that needs number and text",
        Observed::pairs([("console", NOT_FOUND), ("csv", NOT_FOUND)]),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_splits_number_and_text() {
        let adapted = LogToCsvAdapter::new(ErrorObject::new("500:Server Error")).unwrap();
        assert_eq!(adapted.error_number(), "500");
        assert_eq!(adapted.error_text(), "Server Error");
        assert_eq!(adapted.inner().error(), "500:Server Error");
    }

    #[test]
    fn adapter_rejects_unseparated_error() {
        let err = LogToCsvAdapter::new(ErrorObject::new("teapot")).unwrap_err();
        assert!(err.to_string().contains("teapot"));
    }
}
