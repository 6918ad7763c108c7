//! Transport outcome mapping.
//!
//! The core produces a tri-state result (validation failure / flagged /
//! ordinary); this module maps it onto the status codes the external
//! transport expects. The mapping mirrors the collaborating gateway's
//! contract:
//!
//! | Outcome                               | Status |
//! |---------------------------------------|--------|
//! | empty body / malformed / invalid grid | 400    |
//! | classified flagged                    | 403    |
//! | classified ordinary                   | 200    |
//! | backing store unavailable             | 500    |

use tracing::error;

use helix_store::VerdictStore;

use crate::request::parse_request;
use crate::service::{ClassificationService, ClassifyError};

/// A transport-agnostic response: status code plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Status code in HTTP convention.
    pub status: u16,
    /// Response body; empty for the plain accepted/denied outcomes.
    pub body: String,
}

impl ApiResponse {
    fn ok() -> Self {
        Self {
            status: 200,
            body: String::new(),
        }
    }

    fn forbidden() -> Self {
        Self {
            status: 403,
            body: String::new(),
        }
    }

    fn bad_request(message: String) -> Self {
        Self {
            status: 400,
            body: message,
        }
    }

    fn server_error(message: String) -> Self {
        Self {
            status: 500,
            body: message,
        }
    }
}

/// Handles one classification request body end to end.
///
/// Client faults (parse and validation failures) become 400 with the fault
/// text; a flagged table is denied with 403; an ordinary one accepted with
/// 200. A store failure during lookup is the only server-side failure and
/// maps to 500.
pub fn handle_classify<S: VerdictStore>(
    body: &str,
    service: &ClassificationService<S>,
) -> ApiResponse {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request(e.to_string()),
    };

    match service.classify(request.rows) {
        Ok(result) if result.verdict.is_flagged() => ApiResponse::forbidden(),
        Ok(_) => ApiResponse::ok(),
        Err(ClassifyError::Invalid(e)) => ApiResponse::bad_request(e.to_string()),
        Err(ClassifyError::Store(e)) => {
            error!(error = %e, "classification aborted: store unavailable");
            ApiResponse::server_error(format!("failed to classify sequence table: {e}"))
        }
    }
}

/// Handles a statistics request: aggregate verdict counts as a JSON body.
pub fn handle_stats<S: VerdictStore>(service: &ClassificationService<S>) -> ApiResponse {
    let stats = match service.stats() {
        Ok(stats) => stats,
        Err(e) => {
            error!(error = %e, "failed to retrieve stats");
            return ApiResponse::server_error(format!("failed to retrieve stats: {e}"));
        }
    };

    match serde_json::to_string(&stats) {
        Ok(body) => ApiResponse { status: 200, body },
        Err(e) => ApiResponse::server_error(format!("failed to serialize stats: {e}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use helix_store::memory::InMemoryVerdictStore;

    fn service() -> ClassificationService<InMemoryVerdictStore> {
        ClassificationService::new(InMemoryVerdictStore::new())
    }

    const FLAGGED_BODY: &str = r#"{"rows": ["ATCGAAA", "TTGATGA", "GTACCCG", "AAATAAG", "AATTGGG", "AAACCCG", "GTTAAAA"]}"#;
    const ORDINARY_BODY: &str =
        r#"{"rows": ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]}"#;

    #[test]
    fn flagged_table_is_denied() {
        let service = service();
        let response = handle_classify(FLAGGED_BODY, &service);
        assert_eq!(response.status, 403);
        assert!(response.body.is_empty());
    }

    #[test]
    fn ordinary_table_is_accepted() {
        let service = service();
        let response = handle_classify(ORDINARY_BODY, &service);
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }

    #[test]
    fn empty_body_is_client_error() {
        let service = service();
        let response = handle_classify("", &service);
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "empty request body");
        // Nothing reached the store.
        assert!(service.store().is_empty());
    }

    #[test]
    fn malformed_json_is_client_error_without_store_interaction() {
        let service = service();
        let response = handle_classify("This is clearly not a sequence table", &service);
        assert_eq!(response.status, 400);
        assert!(response.body.starts_with("could not parse request"));
        assert!(service.store().is_empty());
        assert_eq!(service.scans_performed(), 0);
    }

    #[test]
    fn invalid_bases_are_client_error() {
        let service = service();
        let body = r#"{"rows": ["ATGCXA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"]}"#;
        let response = handle_classify(body, &service);
        assert_eq!(response.status, 400);
        assert!(response.body.contains("invalid base"));
    }

    #[test]
    fn non_square_table_is_client_error() {
        let service = service();
        let body = r#"{"rows": ["XXXX", "YYY", "ZZ"]}"#;
        let response = handle_classify(body, &service);
        assert_eq!(response.status, 400);
        assert!(response.body.contains("not square"));
    }

    #[test]
    fn repeat_requests_reuse_stored_verdict() {
        let service = service();
        assert_eq!(handle_classify(FLAGGED_BODY, &service).status, 403);
        assert_eq!(handle_classify(FLAGGED_BODY, &service).status, 403);
        assert_eq!(service.scans_performed(), 1);
    }

    #[test]
    fn stats_reports_counts_as_json() {
        let service = service();
        handle_classify(FLAGGED_BODY, &service);
        handle_classify(ORDINARY_BODY, &service);

        let response = handle_stats(&service);
        assert_eq!(response.status, 200);

        let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["count_flagged"], 1);
        assert_eq!(json["count_ordinary"], 1);
        assert_eq!(json["ratio"], 0.5);
    }

    #[test]
    fn stats_on_fresh_store() {
        let service = service();
        let response = handle_stats(&service);
        assert_eq!(response.status, 200);

        let json: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["count_flagged"], 0);
        assert_eq!(json["ratio"], 0.0);
    }
}
