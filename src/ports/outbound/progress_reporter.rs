/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr for the CLI) so they never mix
/// with query output on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);

    /// Reports a failed run as one error message, causes included
    fn report_failure(&self, error: &anyhow::Error) {
        let mut message = format!("\n❌ An error occurred:\n\n{}\n", error);
        for cause in error.chain().skip(1) {
            message.push_str(&format!("\nCaused by: {}\n", cause));
        }
        self.report_error(&message);
    }
}
