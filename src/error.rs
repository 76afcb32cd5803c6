// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Error types surfaced by the console. Settings errors never reach callers of
// the emit methods (the threshold falls back to WARN), but they are returned
// by `Level::from_str` and by `Settings` providers.

use thiserror::Error;

/// Failure to read a value from a settings provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
	/// The setting is not configured
	#[error("Setting not configured: {0}")]
	Missing(&'static str),

	/// The configured level name is not one of the six known levels
	#[error("Unknown log level: {0}")]
	InvalidLevel(String),
}

/// Errors returned by `Console` operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
	/// A message value could not be turned into text
	#[error("Message could not be converted to text")]
	Coercion(#[from] std::fmt::Error),

	/// Writing to the output stream failed
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}
