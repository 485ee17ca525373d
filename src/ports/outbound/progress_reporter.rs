/// ProgressReporter port for user-facing status messages
///
/// Messages go to a side channel (stderr for the CLI) and never into the
/// edited document.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a warning; the operation carries on
    fn report_warning(&self, message: &str);

    /// Reports completion of the operation
    fn report_completion(&self, message: &str);
}
