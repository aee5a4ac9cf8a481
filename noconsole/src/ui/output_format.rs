//! Helpers for writing themed messages to any `Write` sink.
//!
//! Colour is applied only when the caller says the sink supports it, so the
//! same code path serves terminals, pipes and captured test buffers.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Returns `text` wrapped in the colour configured for `entry`, or unchanged when
/// colour is disabled or the entry has no colour.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

/// Writes a single themed line.
pub fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, entry, theme_map, enable_colors))
}

pub fn print_info_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Error, theme_map, enable_colors)
}
