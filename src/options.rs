use std::time::Duration;

/// Configuration for debug-report assembly.
///
/// Both toggles default to off, in which case [`build_report`][crate::build_report]
/// produces no artifact at all. They are independent: logging does not imply
/// a reply and vice versa.
///
/// # Example
///
/// ```rust
/// use prettytree::ReportOptions;
///
/// let mut options = ReportOptions::default();
/// options.console_log = true;
/// options.rich_reply = true;
/// ```
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Emit the title and pretty text through the injected logger.
    /// Default: false.
    pub console_log: bool,

    /// Build a reply for the channel: a structured multi-part bundle when
    /// the channel supports it, a single plain-text message otherwise.
    /// Default: false.
    pub rich_reply: bool,

    /// How long [`run_session`][crate::run_session] waits for the next
    /// input value before reporting a cancellation.
    /// Default: 60 seconds.
    pub input_timeout: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            console_log: false,
            rich_reply: false,
            input_timeout: Duration::from_secs(60),
        }
    }
}
