// crates/notevault-cli/src/output.rs - Session Output Helpers
//
// All user-facing text goes through these so the markers and colours stay
// consistent. `console` drops the colours when stdout is not a terminal.

use console::style;
use std::fmt::Display;
use std::io::{self, Write};

pub fn success(out: &mut dyn Write, msg: impl Display) -> io::Result<()> {
    writeln!(out, "✅ {}", style(msg).green())
}

pub fn warning(out: &mut dyn Write, msg: impl Display) -> io::Result<()> {
    writeln!(out, "⚠️  {}", style(msg).yellow())
}

pub fn failure(out: &mut dyn Write, msg: impl Display) -> io::Result<()> {
    writeln!(out, "❌ {}", style(msg).red())
}

pub fn prompt(out: &mut dyn Write) -> io::Result<()> {
    write!(out, "{} ", style(">").bold())?;
    out.flush()
}
