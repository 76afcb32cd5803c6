// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used by the console and the progress line.
// - SPINNER_FRAMES: braille spinner, one frame per progress call
// - BAR_STEP: percent covered by one bar cell (20 cells for 0..=100)
// - MAX_BAR_CELLS: upper bound on either run of cells
// - POSITION_PLACEHOLDER: shown when the caller location is unknown
// - ORANGE: truecolor used for the WARN tag

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const BAR_STEP: f64 = 5.0;

pub const MAX_BAR_CELLS: usize = u16::MAX as usize;

pub const POSITION_PLACEHOLDER: &str = "¯\\_(ツ)_/¯";

pub const TIMESTAMP_FORMAT: &str = "%-H:%M:%S";

pub const ORANGE: (u8, u8, u8) = (255, 165, 0);
