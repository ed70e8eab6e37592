//! Accumulated errors and notices for the login screen.
//!
//! `LoginErrors` is an ordered collection of error codes, each carrying
//! one or more human-readable messages and a severity. Severity is a
//! binary partition: `Message` entries render in the informational panel
//! above the form, everything else renders in the error panel.

/// How an entry renders: informational notice or error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error,
    Message,
}

impl Severity {
    /// Map the severity tag attached to a code. Only the literal
    /// `"message"` is informational; any other tag (or none) is an error.
    pub fn from_data(data: Option<&str>) -> Self {
        match data {
            Some("message") => Severity::Message,
            _ => Severity::Error,
        }
    }
}

#[derive(Clone, Debug)]
struct ErrorEntry {
    code: String,
    severity: Severity,
    messages: Vec<String>,
}

/// Ordered mapping from error code to messages. Insertion order is
/// preserved; adding a message under an existing code appends to that
/// code's list without moving it.
#[derive(Clone, Debug, Default)]
pub struct LoginErrors {
    entries: Vec<ErrorEntry>,
}

impl LoginErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error-severity message under `code`.
    pub fn add(&mut self, code: &str, message: &str) {
        self.add_with_severity(code, message, Severity::Error);
    }

    /// Add a message under `code` with an explicit severity. The first
    /// insertion fixes the code's severity; later messages join it.
    pub fn add_with_severity(&mut self, code: &str, message: &str, severity: Severity) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.messages.push(message.to_string());
            return;
        }
        self.entries.push(ErrorEntry {
            code: code.to_string(),
            severity,
            messages: vec![message.to_string()],
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| !e.messages.is_empty())
    }

    /// The first inserted code, if any.
    pub fn first_code(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| !e.messages.is_empty())
            .map(|e| e.code.as_str())
    }

    /// All codes in insertion order. Codes without messages are skipped.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.messages.is_empty())
            .map(|e| e.code.as_str())
    }

    pub fn severity(&self, code: &str) -> Option<Severity> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.severity)
    }

    pub fn messages(&self, code: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.messages.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate `(code, severity, messages)` in insertion order, skipping
    /// codes without messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Severity, &[String])> {
        self.entries
            .iter()
            .filter(|e| !e.messages.is_empty())
            .map(|e| (e.code.as_str(), e.severity, e.messages.as_slice()))
    }
}
