// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The severity table. Levels are totally ordered; a call is emitted when its
// level is at or above the configured threshold.

use std::fmt;
use std::str::FromStr;
use colored::*;
use crate::constants::ORANGE;
use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	Log = 0,
	Info = 1,
	Success = 2,
	Template = 3,
	Warn = 4,
	Error = 5,
}

impl Level {
	pub const ALL: [Level; 6] = [
		Level::Log,
		Level::Info,
		Level::Success,
		Level::Template,
		Level::Warn,
		Level::Error,
	];

	/// Threshold used when the settings provider cannot supply one.
	pub const DEFAULT_THRESHOLD: Level = Level::Warn;

	pub fn name(self) -> &'static str {
		match self {
			Level::Log => "LOG",
			Level::Info => "INFO",
			Level::Success => "SUCCESS",
			Level::Template => "TEMPLATE",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
		}
	}

	/// The level name in its tag color.
	pub fn tag(self) -> ColoredString {
		let name = self.name();
		match self {
			Level::Log => name.cyan(),
			Level::Info => name.blue(),
			Level::Success => name.green(),
			Level::Template => name.magenta(),
			Level::Warn => name.truecolor(ORANGE.0, ORANGE.1, ORANGE.2),
			Level::Error => name.red(),
		}
	}

	/// Whether this level is echoed directly to the output stream.
	pub fn writes_stream(self) -> bool {
		matches!(self, Level::Log | Level::Warn)
	}

	/// Whether this level is forwarded to the external sink.
	pub fn forwards_to_sink(self) -> bool {
		!matches!(self, Level::Log)
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Level {
	type Err = SettingsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let wanted = s.trim();
		Level::ALL
			.into_iter()
			.find(|level| level.name().eq_ignore_ascii_case(wanted))
			.ok_or_else(|| SettingsError::InvalidLevel(s.to_string()))
	}
}
