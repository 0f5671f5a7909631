//! Reconciliation between what the backend sends and what callers get.
//!
//! - [`envelope`]: pagination envelope unwrapping and record decoding
//! - [`fallback`]: 404/500 → empty collection on list endpoints
//! - [`legacy_batch`]: backward-compatible production batch projection
//! - [`field_names`]: localized input field names → canonical names
//! - [`lenient`]: numeric columns that arrive as strings

pub mod envelope;
pub mod fallback;
pub mod field_names;
pub mod legacy_batch;
pub mod lenient;

pub use envelope::{decode_record, decode_records, unwrap_envelope};
pub use fallback::{absorb_list_failure, classify_list_failure, FailureClass};
pub use field_names::canonicalize_fields;
pub use legacy_batch::project_legacy_batch;
