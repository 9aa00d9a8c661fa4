//! Invalidation value objects: ids, statuses and the result of waiting on one.

use std::fmt;

/// Id the CDN assigns to a submitted invalidation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidationId(String);

impl InvalidationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress of an invalidation as reported by the CDN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidationStatus {
    Pending,
    InProgress,
    Completed,
    /// Any other status, kept verbatim
    Failed(String),
}

impl InvalidationStatus {
    /// Parse the status string returned by the CDN API.
    ///
    /// Anything unrecognized is a failure carrying the raw text.
    pub fn from_api(status: &str) -> Self {
        match status {
            "Completed" => Self::Completed,
            "InProgress" => Self::InProgress,
            "Pending" => Self::Pending,
            other => Self::Failed(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Failed(raw) => raw,
        }
    }
}

impl fmt::Display for InvalidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How waiting on an invalidation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The CDN reported `Completed`
    Completed,
    /// The CDN reported a status other than pending or completed
    Failed(InvalidationStatus),
    /// The timeout elapsed; the invalidation may still be in progress
    TimedOut,
    /// The status check itself failed
    CheckFailed(String),
}

impl WaitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed(_) => "failed",
            Self::TimedOut => "timeout",
            Self::CheckFailed(_) => "check_failed",
        }
    }
}

impl fmt::Display for WaitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Failed(status) => write!(f, "failed with status: {}", status),
            Self::TimedOut => write!(f, "timed out (may still be in progress)"),
            Self::CheckFailed(msg) => write!(f, "status check failed: {}", msg),
        }
    }
}
