use serde::{Deserialize, Serialize};

/// One failed candidate inside a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptFailure {
    /// Base address of the instance that was tried.
    pub instance: String,
    /// Human readable reason (already formatted from the underlying error).
    pub reason: String,
}

/// Unified error type for all video source operations.
///
/// Per-instance variants carry an `instance` field naming the backend base
/// address that produced them.
///
/// # Candidate Failures
///
/// The following variants describe a single backend misbehaving and make the
/// fallback chain advance to the next instance:
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, reset...
/// - [`Timeout`](Self::Timeout): the per-attempt timeout elapsed
/// - [`HttpStatus`](Self::HttpStatus): non-success status code
/// - [`InvalidBody`](Self::InvalidBody): success status but the body is not JSON
///
/// They are never surfaced on their own: once every instance failed the caller
/// receives [`AllBackendsUnavailable`](Self::AllBackendsUnavailable).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FetchError {
    /// A network-level error occurred while talking to one instance.
    NetworkError {
        /// Instance that produced the error.
        instance: String,
        /// Error details.
        detail: String,
    },

    /// The request to one instance timed out.
    Timeout {
        /// Instance that produced the error.
        instance: String,
        /// Error details.
        detail: String,
    },

    /// The instance answered with a non-success HTTP status.
    HttpStatus {
        /// Instance that produced the error.
        instance: String,
        /// HTTP status code.
        status: u16,
    },

    /// The instance answered with a success status but the body is not valid JSON.
    InvalidBody {
        /// Instance that produced the error.
        instance: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Every candidate instance failed (or the candidate list is empty).
    AllBackendsUnavailable {
        /// Failures in the order the instances were tried.
        attempts: Vec<AttemptFailure>,
    },

    /// A JSON document was fetched but does not have the expected shape.
    ///
    /// Raised after the fallback chain already returned, so no further
    /// instance is tried.
    ParseError {
        /// Which logical request the document belongs to (e.g. `trending`).
        context: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter or configuration value is invalid.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl FetchError {
    /// Whether this error describes a single instance failing.
    ///
    /// Those errors are absorbed by the fallback chain; everything else stops it.
    #[must_use]
    pub fn is_candidate_failure(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
                | Self::InvalidBody { .. }
        )
    }

    /// Whether the failure is routine for public instances (used to pick the log level).
    ///
    /// `true` logs at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { instance, detail } => {
                write!(f, "[{instance}] Network error: {detail}")
            }
            Self::Timeout { instance, detail } => {
                write!(f, "[{instance}] Request timeout: {detail}")
            }
            Self::HttpStatus { instance, status } => {
                write!(f, "[{instance}] HTTP {status}")
            }
            Self::InvalidBody { instance, detail } => {
                write!(f, "[{instance}] Invalid JSON body: {detail}")
            }
            Self::AllBackendsUnavailable { attempts } => {
                if attempts.is_empty() {
                    write!(f, "All backends unavailable (no instances configured)")
                } else {
                    write!(
                        f,
                        "All backends unavailable ({} instances tried)",
                        attempts.len()
                    )
                }
            }
            Self::ParseError { context, detail } => {
                write!(f, "[{context}] Parse error: {detail}")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Convenience type alias for `Result<T, FetchError>`.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = FetchError::NetworkError {
            instance: "https://a.example".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[https://a.example] Network error: connection refused"
        );
    }

    #[test]
    fn display_http_status() {
        let e = FetchError::HttpStatus {
            instance: "https://b.example".to_string(),
            status: 502,
        };
        assert_eq!(e.to_string(), "[https://b.example] HTTP 502");
    }

    #[test]
    fn display_exhaustion_counts_attempts() {
        let e = FetchError::AllBackendsUnavailable {
            attempts: vec![
                AttemptFailure {
                    instance: "a".into(),
                    reason: "HTTP 500".into(),
                },
                AttemptFailure {
                    instance: "b".into(),
                    reason: "timeout".into(),
                },
            ],
        };
        assert_eq!(e.to_string(), "All backends unavailable (2 instances tried)");
    }

    #[test]
    fn display_exhaustion_without_instances() {
        let e = FetchError::AllBackendsUnavailable { attempts: vec![] };
        assert_eq!(
            e.to_string(),
            "All backends unavailable (no instances configured)"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = FetchError::ParseError {
            context: "search".to_string(),
            detail: "missing field".to_string(),
        };
        assert_eq!(e.to_string(), "[search] Parse error: missing field");
    }

    #[test]
    fn candidate_failures_advance_the_chain() {
        assert!(
            FetchError::Timeout {
                instance: "a".into(),
                detail: "x".into()
            }
            .is_candidate_failure()
        );
        assert!(
            FetchError::InvalidBody {
                instance: "a".into(),
                detail: "x".into()
            }
            .is_candidate_failure()
        );
        assert!(
            !FetchError::ParseError {
                context: "trending".into(),
                detail: "x".into()
            }
            .is_candidate_failure()
        );
        assert!(!FetchError::AllBackendsUnavailable { attempts: vec![] }.is_candidate_failure());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = FetchError::HttpStatus {
            instance: "a".into(),
            status: 404,
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "HttpStatus");
        assert_eq!(json["status"], 404);
    }
}
