use std::time::Duration;

use crate::error::{PrettyTreeError, Result};
use crate::formatter::format_value;
use crate::model::Value;
use crate::options::ReportOptions;
use crate::plain::{to_json_string, to_plain_tree};

/// Notice sent when no input arrives within the session deadline.
pub const TIMEOUT_NOTICE: &str = "Timed out, the operation was cancelled.";

/// Notice sent when report assembly fails unexpectedly.
pub const INTERNAL_ERROR_NOTICE: &str = "An internal error occurred while handling the request.";

/// Logging sink injected by the host.
pub trait Logger {
    /// Records an informational message.
    fn info(&self, text: &str);
    /// Records an error message.
    fn error(&self, text: &str);
}

/// A [`Logger`] backed by the `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, text: &str) {
        tracing::info!("{text}");
    }

    fn error(&self, text: &str) {
        tracing::error!("{text}");
    }
}

/// One labeled block of a structured reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPart {
    /// Human-readable label for the block.
    pub label: String,
    /// The block's text content.
    pub content: String,
}

/// An outgoing reply: either a multi-part structured bundle or a single
/// plain-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Labeled parts, in presentation order.
    Structured(Vec<ReplyPart>),
    /// A single text message.
    Plain(String),
}

/// Outgoing message transport injected by the host.
pub trait ReplyChannel {
    /// Whether the channel can deliver multi-part structured replies.
    fn supports_structured_reply(&self) -> bool;

    /// The raw source payload behind the value being inspected, if the
    /// transport exposes one. Appended to structured replies as a final
    /// part.
    fn raw_source(&self) -> Option<String> {
        None
    }

    /// Delivers a reply.
    fn send(&mut self, reply: Reply) -> Result<()>;

    /// Releases the channel. Called exactly once per session, on every
    /// exit path.
    fn close(&mut self);
}

/// Source of follow-up input values, with a deadline.
pub trait InputWaiter {
    /// Waits for the next value. Implementations return
    /// [`PrettyTreeError::WaitTimeout`] once `timeout` elapses.
    fn await_next(&mut self, timeout: Duration) -> Result<Value>;
}

/// Assembles a debug report for `value` under the given toggles.
///
/// The pretty text is always computed. With `console_log` set it is handed
/// to the logger as `\n{title}\n{pretty}`. With `rich_reply` set the result
/// is a structured bundle when the channel supports one (pretty text and
/// deep-serialized JSON, each labeled from `title`, plus the channel's raw
/// source when exposed), or a single plain message of title and pretty
/// text otherwise. With `rich_reply` unset, `Ok(None)`: nothing to send.
pub fn build_report(
    value: &Value,
    title: &str,
    options: &ReportOptions,
    logger: &dyn Logger,
    channel: &dyn ReplyChannel,
) -> Result<Option<Reply>> {
    let pretty = format_value(value);

    if options.console_log {
        logger.info(&format!("\n{title}\n{pretty}"));
    }

    if !options.rich_reply {
        return Ok(None);
    }

    if !channel.supports_structured_reply() {
        return Ok(Some(Reply::Plain(format!("{title}\n{pretty}"))));
    }

    let json = to_json_string(&to_plain_tree(value))?;
    let mut parts = vec![
        ReplyPart {
            label: format!("{title} -> Prettier String"),
            content: pretty,
        },
        ReplyPart {
            label: format!("{title} -> JSON String"),
            content: json,
        },
    ];
    if let Some(raw) = channel.raw_source() {
        parts.push(ReplyPart {
            label: "raw source -> JSON String".to_string(),
            content: raw,
        });
    }
    Ok(Some(Reply::Structured(parts)))
}

/// Waits for the next input value and reports on it.
///
/// A timeout surfaces to the channel as [`TIMEOUT_NOTICE`]; any other
/// failure is logged with context and surfaces as
/// [`INTERNAL_ERROR_NOTICE`]. The channel is closed on every exit path.
pub fn run_session(
    waiter: &mut dyn InputWaiter,
    channel: &mut dyn ReplyChannel,
    logger: &dyn Logger,
    options: &ReportOptions,
    title: &str,
) {
    let outcome = match waiter.await_next(options.input_timeout) {
        Ok(value) => build_report(&value, title, options, logger, &*channel)
            .and_then(|reply| match reply {
                Some(reply) => channel.send(reply),
                None => Ok(()),
            }),
        Err(err) => Err(err),
    };

    match outcome {
        Ok(()) => {}
        Err(PrettyTreeError::WaitTimeout { .. }) => {
            if let Err(err) = channel.send(Reply::Plain(TIMEOUT_NOTICE.to_string())) {
                logger.error(&format!("failed to send timeout notice: {err}"));
            }
        }
        Err(err) => {
            logger.error(&format!("debug session failed: {err}"));
            if let Err(err) = channel.send(Reply::Plain(INTERNAL_ERROR_NOTICE.to_string())) {
                logger.error(&format!("failed to send error notice: {err}"));
            }
        }
    }

    channel.close();
}
