//! Helix API -- the thin boundary around the classification core.
//!
//! Three layers, outermost first:
//!
//! 1. [`handler`] -- maps request bodies and classification outcomes to
//!    transport status codes (the collaborator contract; HTTP itself is out
//!    of scope).
//! 2. [`service`] -- the end-to-end classification sequence: validate ->
//!    fingerprint -> lookup -> scan -> persist, with an injected
//!    [`VerdictStore`](helix_store::VerdictStore).
//! 3. [`request`] -- the single-field JSON wire format.

pub mod handler;
pub mod request;
pub mod service;

pub use handler::{handle_classify, handle_stats, ApiResponse};
pub use request::{parse_request, ClassifyRequest, RequestError};
pub use service::{Classification, ClassificationService, ClassifyError, VerdictSource};
