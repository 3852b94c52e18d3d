//! Research Log Adapters
//!
//! Implementations of the ResearchLog port.
//!
//! - **CsvResearchLog** - Appends rows to a CSV file on disk
//! - **InMemoryResearchLog** - Keeps records in memory (testing/development)

mod csv_research_log;
mod in_memory_research_log;

pub use csv_research_log::CsvResearchLog;
pub use in_memory_research_log::InMemoryResearchLog;
