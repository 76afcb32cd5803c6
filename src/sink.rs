// ══════════════════════════════════════════════════════════════════════════════
// SINK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The optional external destination for composed log strings. The console
// holds at most one sink; having none is a normal configuration.

use crate::level::Level;

/// Receives one composed line per forwarded console call.
pub trait Sink {
	fn info(&self, line: &str);

	fn success(&self, line: &str);

	fn warn(&self, line: &str);

	fn error(&self, line: &str);

	/// Route a line to the method matching `level`.
	///
	/// TEMPLATE shares the success channel. LOG is never forwarded.
	fn forward(&self, level: Level, line: &str) {
		match level {
			Level::Log => {}
			Level::Info => self.info(line),
			Level::Success | Level::Template => self.success(line),
			Level::Warn => self.warn(line),
			Level::Error => self.error(line),
		}
	}
}

/// Forwards to the `log` facade, so whichever backend the application
/// installed receives the lines.
///
/// The facade has no success level; success lines go out at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

pub const LOG_TARGET: &str = "consoler";

impl Sink for LogSink {
	fn info(&self, line: &str) {
		log::info!(target: LOG_TARGET, "{}", line);
	}

	fn success(&self, line: &str) {
		log::info!(target: LOG_TARGET, "{}", line);
	}

	fn warn(&self, line: &str) {
		log::warn!(target: LOG_TARGET, "{}", line);
	}

	fn error(&self, line: &str) {
		log::error!(target: LOG_TARGET, "{}", line);
	}
}
