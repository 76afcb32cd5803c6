// ══════════════════════════════════════════════════════════════════════════════
// POSITION MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Resolves the `file:line` annotation shown next to each log line. The
// location comes from `#[track_caller]` on the console methods; paths under
// the current working directory are shown relative to it.

use std::panic::Location;
use std::path::{Path, MAIN_SEPARATOR};
use crate::constants::POSITION_PLACEHOLDER;

/// Formats `{prefix}{file}:{line}` for the given call site, or the
/// placeholder when no location is available.
pub fn resolve(location: Option<&Location<'_>>, prefix: &str) -> String {
	let Some(location) = location else {
		return POSITION_PLACEHOLDER.to_string();
	};
	let cwd = std::env::current_dir().ok();
	format_position(location.file(), location.line(), prefix, cwd.as_deref())
}

fn format_position(file: &str, line: u32, prefix: &str, base: Option<&Path>) -> String {
	let relative = base
		.filter(|base| !base.as_os_str().is_empty())
		.and_then(|base| Path::new(file).strip_prefix(base).ok());
	match relative {
		Some(rest) => format!("{}{}{}:{}", prefix, MAIN_SEPARATOR, rest.display(), line),
		None => format!("{}{}:{}", prefix, file, line),
	}
}
