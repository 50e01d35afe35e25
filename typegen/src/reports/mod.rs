//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod templates;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, WrittenResult};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};
pub use templates::{TemplateEntry, TemplatesReport};
