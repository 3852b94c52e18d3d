//! Cyber NJ - TCM constitution questionnaire pipeline
//!
//! Scores the 67-item constitution questionnaire, selects the dominant
//! constitution, and maps the scores onto a personality label and the five
//! elements. Consenting submissions can be written to a research log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
