//! Captured message records

use crate::severity::Severity;

/// A single captured log entry
///
/// Built once at ingestion time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    severity: Severity,
    /// Milliseconds since the Unix epoch
    timestamp: i64,
    content: String,
}

impl Message {
    /// Create a message stamped with the current wall-clock time
    ///
    /// Multiple content parts are joined with a single space.
    pub fn new<I, T>(severity: Severity, parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::with_timestamp(severity, chrono::Utc::now().timestamp_millis(), parts)
    }

    /// Create a message with an explicit timestamp in milliseconds
    pub fn with_timestamp<I, T>(severity: Severity, timestamp: i64, parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            severity,
            timestamp,
            content: join_parts(parts),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn join_parts<I, T>(parts: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut content = String::new();
    for (idx, part) in parts.into_iter().enumerate() {
        if idx > 0 {
            content.push(' ');
        }
        content.push_str(part.as_ref());
    }
    content
}
