//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod fetch;
mod generate;
mod output;

pub use check::CheckReport;
pub use fetch::FetchReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, SectionSummary, WrittenFile};
pub use output::{Output, Report, Stream, TerminalOutput};
