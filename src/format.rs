use std::fmt;

/// Formats a progress fraction as a whole percentage, e.g. `0.5` as `50%`.
///
/// The value is not clamped, so `1.5` shows as `150%`.
#[derive(Debug, Clone, Copy)]
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// The body of a failure report: an optional error followed by a message.
///
/// ```
/// use linebar::FailureReport;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let report = FailureReport { error: Some(&err), message: "copy aborted" };
/// assert_eq!(report.to_string(), "Error: disk full. copy aborted");
/// ```
#[derive(Clone, Copy)]
pub struct FailureReport<'a> {
    pub error: Option<&'a dyn fmt::Display>,
    pub message: &'a str,
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = self.error {
            write!(f, "Error: {}. ", error)?;
        }
        f.write_str(self.message)
    }
}

impl fmt::Debug for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureReport")
            .field("error", &self.error.map(|e| e.to_string()))
            .field("message", &self.message)
            .finish()
    }
}
