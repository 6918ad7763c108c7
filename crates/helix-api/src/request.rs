//! Wire format for classification requests.
//!
//! A request is a JSON object with a single array-of-strings field:
//!
//! ```json
//! {"rows": ["ATCG", "TTGA", "GTAC", "AAAT"]}
//! ```
//!
//! Parsing failures are client faults; no store interaction happens before a
//! request parses.

use serde::{Deserialize, Serialize};

/// A classification request: the raw rows of a sequence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Ordered rows of the table, top to bottom.
    pub rows: Vec<String>,
}

/// Faults in the request body itself, before any validation of the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The body was empty or whitespace.
    #[error("empty request body")]
    Empty,

    /// The body was not a well-formed request object.
    #[error("could not parse request: {0}")]
    Parse(String),
}

/// Parses a raw request body.
///
/// # Errors
///
/// [`RequestError::Empty`] for a blank body, [`RequestError::Parse`] for
/// anything that is not the expected JSON object.
pub fn parse_request(body: &str) -> Result<ClassifyRequest, RequestError> {
    if body.trim().is_empty() {
        return Err(RequestError::Empty);
    }

    serde_json::from_str(body).map_err(|e| RequestError::Parse(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
