//! Report Module - Data leaving the scoring pipeline.
//!
//! - `DiagnosticPayload` - Marker-delimited JSON exchanged as free text
//! - `ResearchRecord` - One flattened row for the research log

mod payload;
mod research_record;

pub use payload::{DiagnosticPayload, JSON_END, JSON_START, UNKNOWN_PERSONALITY};
pub use research_record::{
    Consent, ResearchRecord, NOT_APPLICABLE, TIMESTAMP_FORMAT, UNKNOWN_SELF_REPORT,
};
