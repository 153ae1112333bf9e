/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: file content, output formatting, output destinations, and a
/// place to send progress messages.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod tgf_reader;

pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use tgf_reader::TgfReader;
