// ══════════════════════════════════════════════════════════════════════════════
// SETTINGS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Configuration the console polls on every call: the level threshold, the
// debug flag that silences the sink, and the prefix put in front of caller
// positions. Providers are injected; nothing here is process-global.

use std::sync::Arc;
use crate::error::SettingsError;
use crate::level::Level;

pub const LEVEL_VAR: &str = "CONSOLE_LOG_LEVEL";
pub const DEBUG_VAR: &str = "DEBUG";
pub const PATH_PREFIX_VAR: &str = "CONSOLE_PATH_PREFIX";

/// Source of console configuration.
///
/// `log_level` and `debug` are read on every emit call, so a provider backed
/// by mutable state makes changes visible on the next call. `path_prefix` is
/// read once when the console is built.
pub trait Settings {
	fn log_level(&self) -> Result<Level, SettingsError>;

	fn debug(&self) -> bool;

	fn path_prefix(&self) -> String;

	/// Threshold with the WARN fallback applied.
	fn threshold(&self) -> Level {
		self.log_level().unwrap_or(Level::DEFAULT_THRESHOLD)
	}
}

impl<S: Settings + ?Sized> Settings for &S {
	fn log_level(&self) -> Result<Level, SettingsError> { (**self).log_level() }
	fn debug(&self) -> bool { (**self).debug() }
	fn path_prefix(&self) -> String { (**self).path_prefix() }
}

impl<S: Settings + ?Sized> Settings for Box<S> {
	fn log_level(&self) -> Result<Level, SettingsError> { (**self).log_level() }
	fn debug(&self) -> bool { (**self).debug() }
	fn path_prefix(&self) -> String { (**self).path_prefix() }
}

impl<S: Settings + ?Sized> Settings for Arc<S> {
	fn log_level(&self) -> Result<Level, SettingsError> { (**self).log_level() }
	fn debug(&self) -> bool { (**self).debug() }
	fn path_prefix(&self) -> String { (**self).path_prefix() }
}

// ══════════════════════════════════════════════════════════════════════════════
// ENVIRONMENT PROVIDER
// ══════════════════════════════════════════════════════════════════════════════

/// Reads `CONSOLE_LOG_LEVEL`, `DEBUG` and `CONSOLE_PATH_PREFIX` from the
/// process environment each time a value is asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl Settings for EnvSettings {
	fn log_level(&self) -> Result<Level, SettingsError> {
		parse_level(std::env::var(LEVEL_VAR).ok(), LEVEL_VAR)
	}

	fn debug(&self) -> bool {
		std::env::var(DEBUG_VAR).map(|v| parse_flag(&v)).unwrap_or(false)
	}

	fn path_prefix(&self) -> String {
		std::env::var(PATH_PREFIX_VAR).unwrap_or_default()
	}
}

fn parse_level(raw: Option<String>, name: &'static str) -> Result<Level, SettingsError> {
	raw.ok_or(SettingsError::Missing(name))?.parse()
}

fn parse_flag(raw: &str) -> bool {
	matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

// ══════════════════════════════════════════════════════════════════════════════
// STATIC PROVIDER
// ══════════════════════════════════════════════════════════════════════════════

/// Fixed settings, for embedding a console with known configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSettings {
	pub level: Level,
	pub debug: bool,
	pub path_prefix: String,
}

impl Default for StaticSettings {
	fn default() -> Self {
		StaticSettings {
			level: Level::DEFAULT_THRESHOLD,
			debug: false,
			path_prefix: String::new(),
		}
	}
}

impl StaticSettings {
	pub fn new(level: Level) -> Self {
		StaticSettings { level, ..Default::default() }
	}

	pub fn with_debug(mut self, debug: bool) -> Self {
		self.debug = debug;
		self
	}

	pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.path_prefix = prefix.into();
		self
	}
}

impl Settings for StaticSettings {
	fn log_level(&self) -> Result<Level, SettingsError> {
		Ok(self.level)
	}

	fn debug(&self) -> bool {
		self.debug
	}

	fn path_prefix(&self) -> String {
		self.path_prefix.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Broken;

	impl Settings for Broken {
		fn log_level(&self) -> Result<Level, SettingsError> {
			Err(SettingsError::Missing(LEVEL_VAR))
		}
		fn debug(&self) -> bool { false }
		fn path_prefix(&self) -> String { String::new() }
	}

	#[test]
	fn test_threshold_falls_back_to_warn() {
		assert_eq!(Broken.threshold(), Level::Warn);
	}

	#[test]
	fn test_parse_level() {
		assert_eq!(parse_level(Some("info".into()), LEVEL_VAR), Ok(Level::Info));
		assert_eq!(parse_level(None, LEVEL_VAR), Err(SettingsError::Missing(LEVEL_VAR)));
		assert!(matches!(parse_level(Some("chatty".into()), LEVEL_VAR), Err(SettingsError::InvalidLevel(_))));
	}

	#[test]
	fn test_parse_flag() {
		for raw in ["1", "true", "TRUE", " yes ", "on"] {
			assert!(parse_flag(raw), "{raw} should be set");
		}
		for raw in ["", "0", "false", "off", "nope"] {
			assert!(!parse_flag(raw), "{raw} should be unset");
		}
	}

	/// Sets an environment variable for the life of the guard, then restores it.
	struct EnvVar {
		name: &'static str,
		previous: Option<String>,
	}

	impl EnvVar {
		fn set(name: &'static str, value: &str) -> Self {
			let previous = std::env::var(name).ok();
			// Only test_env_settings_reads_environment touches these variables.
			unsafe { std::env::set_var(name, value) };
			EnvVar { name, previous }
		}
	}

	impl Drop for EnvVar {
		fn drop(&mut self) {
			match &self.previous {
				Some(value) => unsafe { std::env::set_var(self.name, value) },
				None => unsafe { std::env::remove_var(self.name) },
			}
		}
	}

	#[test]
	fn test_env_settings_reads_environment() {
		{
			let _level = EnvVar::set(LEVEL_VAR, "success");
			let _debug = EnvVar::set(DEBUG_VAR, "true");
			let _prefix = EnvVar::set(PATH_PREFIX_VAR, "api:");
			assert_eq!(EnvSettings.threshold(), Level::Success);
			assert!(EnvSettings.debug());
			assert_eq!(EnvSettings.path_prefix(), "api:");
		}
		{
			let _level = EnvVar::set(LEVEL_VAR, "shouting");
			let _debug = EnvVar::set(DEBUG_VAR, "0");
			assert_eq!(EnvSettings.threshold(), Level::Warn);
			assert!(!EnvSettings.debug());
		}
	}

	#[test]
	fn test_static_settings_builder() {
		let settings = StaticSettings::new(Level::Log).with_debug(true).with_path_prefix("app");
		assert_eq!(settings.threshold(), Level::Log);
		assert!(settings.debug());
		assert_eq!(settings.path_prefix(), "app");
	}

	#[test]
	fn test_static_settings_default() {
		let settings = StaticSettings::default();
		assert_eq!(settings.level, Level::Warn);
		assert!(!settings.debug);
		assert!(settings.path_prefix.is_empty());
	}

	#[test]
	fn test_shared_provider() {
		let shared = Arc::new(StaticSettings::new(Level::Error));
		assert_eq!(shared.threshold(), Level::Error);
		let boxed: Box<dyn Settings> = Box::new(StaticSettings::new(Level::Info));
		assert_eq!(boxed.threshold(), Level::Info);
	}
}
