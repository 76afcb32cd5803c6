// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                CONSOLER                                      ║
// ║                  Leveled Console Output & Progress Line                      ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A small facade for talking to the terminal from long-running jobs: colored,
// timestamped log lines that say where they came from, and a progress line
// that redraws in place.
//
// 📦 HOW IT WORKS
// ---------------
//   console.warn("disk nearly full", Some(&usage))
//
// prints
//
//   9:41:07 - WARN - src/jobs/sync.rs:88
//   > disk nearly full 92%
//
// and forwards "9:41:07 - WARN - src/jobs/sync.rs:88 - disk nearly full - 92%"
// to the sink, if one is attached.
//
//   Level     Stream   Sink
//   LOG       yes      -
//   INFO      -        info
//   SUCCESS   -        success
//   TEMPLATE  -        success
//   WARN      yes      warn
//   ERROR     -        error
//
// Calls below the configured threshold do nothing at all. The debug flag
// silences the sink without touching the stream.
//
//   console.progress("syncing", 47.0)
//
// draws ` [█████████           ] ⠙ 47.0000% syncing` (filled cells are blue
// background) and returns the cursor to the start of the line.
//
// ⚙️ CONFIGURATION
// ----------------
// Injected through `Settings`. `EnvSettings` reads CONSOLE_LOG_LEVEL, DEBUG
// and CONSOLE_PATH_PREFIX from the environment on every call.
//
// ══════════════════════════════════════════════════════════════════════════════

mod constants;
mod decode;
mod error;
mod level;
mod logger;
mod position;
mod progress;
mod settings;
mod sink;

pub use constants::SPINNER_FRAMES;
pub use decode::{decode, Message, Value, NULL_TOKEN};
pub use error::{ConsoleError, SettingsError};
pub use level::Level;
pub use logger::Console;
pub use progress::bar_widths;
pub use settings::{EnvSettings, Settings, StaticSettings, DEBUG_VAR, LEVEL_VAR, PATH_PREFIX_VAR};
pub use sink::{LogSink, Sink, LOG_TARGET};
