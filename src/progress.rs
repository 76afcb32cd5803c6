// ══════════════════════════════════════════════════════════════════════════════
// PROGRESS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Single-line progress indicator: a 20-cell bar, a spinner that advances one
// frame per call, the percentage and a message. The line ends in a carriage
// return so the next call draws over it.

use std::fmt::{self, Write as _};
use std::io::Write;
use colored::*;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use crate::constants::{BAR_STEP, MAX_BAR_CELLS, SPINNER_FRAMES};
use crate::error::ConsoleError;
use crate::logger::Console;

/// Filled cells and trailing spaces for `percent`.
///
/// Values outside 0..=100 are not clamped; a negative count renders as zero
/// cells. Non-finite counts render as zero and each run stops at
/// `MAX_BAR_CELLS`.
pub fn bar_widths(percent: f64) -> (usize, usize) {
	let blocks = (percent / BAR_STEP).floor();
	let spaces = ((100.0 - percent) / BAR_STEP).ceil();
	(cells(blocks), cells(spaces))
}

fn cells(count: f64) -> usize {
	if !count.is_finite() {
		return 0;
	}
	count.clamp(0.0, MAX_BAR_CELLS as f64) as usize
}

impl<W: Write> Console<W> {
	/// Redraws the progress line. Not subject to level filtering.
	///
	/// The caller is responsible for moving past the line (a newline or a
	/// `buffer` call) once progress is done.
	pub fn progress(&mut self, message: impl fmt::Display, percent: f64) -> Result<(), ConsoleError> {
		self.advance_spinner();

		let mut text = String::new();
		write!(text, "{}", message)?;

		self.writer.write_all(b"\r")?;
		queue!(self.writer, Clear(ClearType::UntilNewLine))?;
		self.writer.flush()?;

		let (blocks, spaces) = bar_widths(percent);
		let filled = " ".on_blue().to_string().repeat(blocks);
		write!(
			self.writer,
			" [{}{}] {} {:.4}% {}\r",
			filled,
			" ".repeat(spaces),
			SPINNER_FRAMES[self.spinner_index].magenta(),
			percent,
			text.blue(),
		)?;
		self.writer.flush()?;
		self.writing_progress = true;
		Ok(())
	}

	fn advance_spinner(&mut self) {
		if self.spinner_index == SPINNER_FRAMES.len() - 1 {
			self.spinner_index = 0;
		} else {
			self.spinner_index += 1;
		}
	}
}
