// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The console facade: colored, timestamped, leveled output with the caller's
// source position. LOG and WARN are echoed to the output stream; every level
// except LOG is forwarded to the optional sink unless the debug flag is set.
// The progress line lives in `progress.rs` on the same type.

use std::fmt::{self, Write as _};
use std::io::{self, Stdout, Write};
use std::panic::Location;
use chrono::Local;
use colored::*;
use crossterm::{cursor, execute};
use crate::constants::TIMESTAMP_FORMAT;
use crate::decode::{decode, Message};
use crate::error::ConsoleError;
use crate::level::Level;
use crate::position;
use crate::settings::Settings;
use crate::sink::Sink;

/// Leveled console output bound to a single stream.
pub struct Console<W: Write = Stdout> {
	pub(crate) writer: W,
	settings: Box<dyn Settings>,
	sink: Option<Box<dyn Sink>>,
	path_prefix: String,
	pub(crate) writing_progress: bool,
	pub(crate) spinner_index: usize,
}

impl Console<Stdout> {
	/// Creates a console writing to the process's standard output.
	pub fn new(settings: impl Settings + 'static) -> Self {
		Console::with_writer(io::stdout(), settings)
	}
}

impl<W: Write> Console<W> {
	/// Creates a console bound to `writer`. The path prefix is read from
	/// `settings` once, here; level and debug flag are read on every call.
	pub fn with_writer(writer: W, settings: impl Settings + 'static) -> Self {
		let path_prefix = settings.path_prefix();
		Console {
			writer,
			settings: Box::new(settings),
			sink: None,
			path_prefix,
			writing_progress: false,
			spinner_index: 0,
		}
	}

	/// Attaches the external sink.
	pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
		self.sink = Some(Box::new(sink));
		self
	}

	pub fn set_sink(&mut self, sink: Option<Box<dyn Sink>>) {
		self.sink = sink;
	}

	pub fn has_sink(&self) -> bool {
		self.sink.is_some()
	}

	pub fn path_prefix(&self) -> &str {
		&self.path_prefix
	}

	/// True once a progress line has been drawn. Never cleared.
	pub fn writing_progress(&self) -> bool {
		self.writing_progress
	}

	pub fn spinner_index(&self) -> usize {
		self.spinner_index
	}

	pub fn writer(&self) -> &W {
		&self.writer
	}

	pub fn writer_mut(&mut self) -> &mut W {
		&mut self.writer
	}

	pub fn into_inner(self) -> W {
		self.writer
	}

	// ══════════════════════════════════════════════════════════════════════════
	// LEVELED OUTPUT
	// ══════════════════════════════════════════════════════════════════════════

	#[track_caller]
	pub fn log<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Log, Some(Location::caller()), message, extra)
	}

	#[track_caller]
	pub fn info<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Info, Some(Location::caller()), message, extra)
	}

	#[track_caller]
	pub fn success<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Success, Some(Location::caller()), message, extra)
	}

	#[track_caller]
	pub fn template<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Template, Some(Location::caller()), message, extra)
	}

	#[track_caller]
	pub fn warn<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Warn, Some(Location::caller()), message, extra)
	}

	#[track_caller]
	pub fn error<'m>(&mut self, message: impl Into<Message<'m>>, extra: Option<&dyn fmt::Display>) -> Result<(), ConsoleError> {
		self.emit(Level::Error, Some(Location::caller()), message, extra)
	}

	/// Emits `message` at `level` as if called from `location`.
	///
	/// Calls below the configured threshold return `Ok(())` without touching
	/// the stream or the sink. A `None` location prints the placeholder.
	pub fn emit<'m>(
		&mut self,
		level: Level,
		location: Option<&Location<'_>>,
		message: impl Into<Message<'m>>,
		extra: Option<&dyn fmt::Display>,
	) -> Result<(), ConsoleError> {
		if level < self.settings.threshold() {
			return Ok(());
		}

		let position = position::resolve(location, &self.path_prefix);
		let prefix = format!("{} - {} - {}", timestamp(), level.tag(), position);
		let value = message.into().coerce()?;
		let extra = render_extra(extra)?;

		if level.writes_stream() {
			let text = decode(value.clone()).unwrap_or_default();
			writeln!(self.writer, "{}\n> {} {}", prefix, text, extra)?;
			self.writer.flush()?;
		}

		if level.forwards_to_sink() && !self.settings.debug() {
			if let Some(sink) = &self.sink {
				let raw = value.map(|v| v.to_string()).unwrap_or_default();
				sink.forward(level, &format!("{} - {} - {}", prefix, raw, extra));
			}
		}
		Ok(())
	}

	// ══════════════════════════════════════════════════════════════════════════
	// RAW OUTPUT
	// ══════════════════════════════════════════════════════════════════════════

	/// Writes `text` as-is and flushes. No filtering, no formatting.
	pub fn buffer(&mut self, text: &str) -> Result<(), ConsoleError> {
		self.writer.write_all(text.as_bytes())?;
		self.writer.flush()?;
		Ok(())
	}

	pub fn hide_cursor(&mut self) -> Result<(), ConsoleError> {
		execute!(self.writer, cursor::Hide)?;
		Ok(())
	}

	pub fn show_cursor(&mut self) -> Result<(), ConsoleError> {
		execute!(self.writer, cursor::Show)?;
		Ok(())
	}
}

fn timestamp() -> ColoredString {
	Local::now().format(TIMESTAMP_FORMAT).to_string().magenta()
}

fn render_extra(extra: Option<&dyn fmt::Display>) -> Result<String, fmt::Error> {
	let mut text = String::new();
	if let Some(extra) = extra {
		write!(text, "{}", extra)?;
	}
	Ok(text)
}
