// crates/notevault-cli/src/repl.rs - Interactive Command Loop
//
// Reads one line at a time, splits it on whitespace and runs the matching
// command to completion before reading the next line.
//
// STATES:
//   RUNNING ──quit/exit──▶ TERMINATED (farewell printed)
//   RUNNING ──end of input──▶ TERMINATED (no farewell)
//
// Nothing else ends the session: unknown commands, missing arguments and
// failing operations are all reported and the prompt comes back.
//
// Commands are described by a static table (names, argument, help text) so
// the help screen and the argument checks come from the same place.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use crate::commands;
use crate::context::Context;
use crate::output;

pub const WELCOME: &str = "-- Welcome to Obsidian in the terminal. --";
pub const HINT: &str = "Type 'help' for the list of commands or 'quit' to exit.";
pub const FAREWELL: &str = "Goodbye!";

/// Operation a command line resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Quit,
    Help,
    Open,
    New,
    Write,
    Delete,
    List,
    Search,
    Vault,
    SetVault,
    Push,
}

/// Table entry describing one command
#[derive(Debug)]
pub struct CommandSpec {
    /// Every name the command answers to; the first is canonical
    pub names: &'static [&'static str],
    /// Placeholder for the required argument, if the command takes one
    pub arg: Option<&'static str>,
    /// Placeholder shown in the help screen
    pub help_arg: &'static str,
    pub summary: &'static str,
    pub kind: CommandKind,
}

impl CommandSpec {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }

    pub fn arity(&self) -> usize {
        usize::from(self.arg.is_some())
    }

    pub fn usage(&self) -> String {
        match self.arg {
            Some(arg) => format!("Usage: {} <{}>", self.name(), arg),
            None => format!("Usage: {}", self.name()),
        }
    }

    fn help_label(&self) -> String {
        let names = self.names.join(" or ");
        if self.help_arg.is_empty() {
            names
        } else {
            format!("{names} <{}>", self.help_arg)
        }
    }
}

/// Every command the session understands, in help-screen order
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        names: &["open"],
        arg: None,
        help_arg: "",
        summary: "Launch Obsidian",
        kind: CommandKind::Open,
    },
    CommandSpec {
        names: &["new"],
        arg: Some("note_name"),
        help_arg: "name",
        summary: "Create a new note (refuses if it already exists)",
        kind: CommandKind::New,
    },
    CommandSpec {
        names: &["write"],
        arg: Some("note_name"),
        help_arg: "name",
        summary: "Edit an existing note",
        kind: CommandKind::Write,
    },
    CommandSpec {
        names: &["delete"],
        arg: Some("note_name"),
        help_arg: "name",
        summary: "Delete an existing note",
        kind: CommandKind::Delete,
    },
    CommandSpec {
        names: &["list"],
        arg: None,
        help_arg: "",
        summary: "Show every note",
        kind: CommandKind::List,
    },
    CommandSpec {
        names: &["search"],
        arg: Some("keyword"),
        help_arg: "keyword",
        summary: "Find notes whose name contains the keyword",
        kind: CommandKind::Search,
    },
    CommandSpec {
        names: &["vault"],
        arg: None,
        help_arg: "",
        summary: "Show the current vault location",
        kind: CommandKind::Vault,
    },
    CommandSpec {
        names: &["setvault"],
        arg: Some("vault_path"),
        help_arg: "path",
        summary: "Change and save the vault location",
        kind: CommandKind::SetVault,
    },
    CommandSpec {
        names: &["push"],
        arg: None,
        help_arg: "",
        summary: "Publish changes to the git remote",
        kind: CommandKind::Push,
    },
    CommandSpec {
        names: &["help"],
        arg: None,
        help_arg: "",
        summary: "Show this help",
        kind: CommandKind::Help,
    },
    CommandSpec {
        names: &["quit", "exit"],
        arg: None,
        help_arg: "",
        summary: "Leave the CLI",
        kind: CommandKind::Quit,
    },
];

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|spec| spec.names.iter().any(|n| *n == name))
}

/// Result of reading one input line
#[derive(Debug, PartialEq, Eq)]
pub enum Parsed<'a> {
    /// Blank line
    Empty,
    Unknown(&'a str),
    /// Known command with its required argument missing
    MissingArgument(&'static CommandSpec),
    /// Ready to run; extra tokens past the required argument are dropped
    Invoke {
        kind: CommandKind,
        arg: Option<&'a str>,
    },
}

impl PartialEq for CommandSpec {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for CommandSpec {}

pub fn parse_line(line: &str) -> Parsed<'_> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Parsed::Empty;
    };
    let Some(spec) = lookup(name) else {
        return Parsed::Unknown(name);
    };

    let arg = tokens.next();
    if spec.arity() > 0 && arg.is_none() {
        return Parsed::MissingArgument(spec);
    }

    Parsed::Invoke {
        kind: spec.kind,
        arg: if spec.arity() > 0 { arg } else { None },
    }
}

/// Whether the loop keeps going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle one input line
///
/// Operation failures are printed here and never end the session; only a
/// failure to write to `out` is returned.
pub fn step(ctx: &mut Context, line: &str, out: &mut dyn Write) -> io::Result<Flow> {
    match parse_line(line) {
        Parsed::Empty => Ok(Flow::Continue),
        Parsed::Unknown(name) => {
            writeln!(out, "Unknown command: {name}")?;
            Ok(Flow::Continue)
        }
        Parsed::MissingArgument(spec) => {
            writeln!(out, "{}", spec.usage())?;
            Ok(Flow::Continue)
        }
        Parsed::Invoke { kind, arg } => {
            debug!(?kind, ?arg, "dispatching");
            match dispatch(ctx, kind, arg.unwrap_or_default(), out) {
                Ok(flow) => Ok(flow),
                Err(e) => {
                    output::failure(out, format_args!("Error: {e}"))?;
                    Ok(Flow::Continue)
                }
            }
        }
    }
}

fn dispatch(ctx: &mut Context, kind: CommandKind, arg: &str, out: &mut dyn Write) -> Result<Flow> {
    match kind {
        CommandKind::Quit => {
            writeln!(out, "{FAREWELL}")?;
            return Ok(Flow::Quit);
        }
        CommandKind::Help => commands::help::handle(out)?,
        CommandKind::Open => commands::open::handle(ctx, out)?,
        CommandKind::New => commands::note::create(ctx, arg, out)?,
        CommandKind::Write => commands::note::edit(ctx, arg, out)?,
        CommandKind::Delete => commands::note::delete(ctx, arg, out)?,
        CommandKind::List => commands::list::handle(ctx, out)?,
        CommandKind::Search => commands::search::handle(ctx, arg, out)?,
        CommandKind::Vault => commands::vault::show(ctx, out)?,
        CommandKind::SetVault => commands::vault::set(ctx, arg, out)?,
        CommandKind::Push => commands::push::handle(ctx, out)?,
    }
    Ok(Flow::Continue)
}

/// Run the session until `quit`/`exit` or end of input
///
/// A failed read from `input` counts as end of input.
pub fn run<R: BufRead>(ctx: &mut Context, mut input: R, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{WELCOME}")?;
    writeln!(out, "{HINT}")?;

    let mut buf = Vec::new();
    loop {
        output::prompt(out)?;

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("end of input");
                return Ok(());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to read input, ending session");
                return Ok(());
            }
        }
        let line = String::from_utf8_lossy(&buf);

        if step(ctx, &line, out)? == Flow::Quit {
            return Ok(());
        }
    }
}

/// Lines of the help screen
pub fn help_lines() -> Vec<String> {
    let labels: Vec<String> = COMMANDS.iter().map(CommandSpec::help_label).collect();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    COMMANDS
        .iter()
        .zip(labels)
        .map(|(spec, label)| format!("  {label:<width$} : {}", spec.summary))
        .collect()
}
