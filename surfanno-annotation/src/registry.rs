//! Static command registry
//!
//! The host viewer's menu surface is declared here as a fixed table built
//! once at startup: command identifier, menu label, typed handler. Dispatch
//! is a map lookup; there is no runtime discovery of handlers.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use surfanno_core::{Error, Result, Stroke, Surface};
use surfanno_measure::{Measurement, ScalarFieldKernel};

use crate::session::AnnotationSession;

/// Arguments carried by a command invocation.
#[derive(Debug, Clone)]
pub enum CommandArgs {
    Paint { stroke: Stroke, label: u32 },
    Erase { stroke: Stroke },
    Measure { measurements: Vec<Measurement> },
    RemoveColumn { name: String },
    SelectRow { row: usize },
    None,
}

/// What a command did, for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Vertices changed; the host should redraw the overlay and table.
    Painted(BTreeSet<usize>),
    /// A table was (re)computed; the host should refresh the table view.
    Measured,
    /// A column was removed; the host should refresh the table view.
    ColumnRemoved,
    /// The vertex to highlight for a selected row.
    HighlightVertex(usize),
    /// The session was deselected; overlays and table views go away.
    Deselected,
}

type Handler =
    fn(&mut AnnotationSession, &Surface, &dyn ScalarFieldKernel, CommandArgs) -> Result<CommandEffect>;

/// One registered command.
pub struct CommandEntry {
    pub id: &'static str,
    pub menu: &'static str,
    handler: Handler,
}

/// The command table, built once at startup.
pub struct CommandRegistry {
    entries: BTreeMap<&'static str, CommandEntry>,
}

impl CommandRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The standard annotation command set
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();
        registry.register(CommandEntry {
            id: "paint",
            menu: "Surfaces > Annotation > Paint labels",
            handler: cmd_paint,
        });
        registry.register(CommandEntry {
            id: "erase",
            menu: "Surfaces > Annotation > Erase labels",
            handler: cmd_erase,
        });
        registry.register(CommandEntry {
            id: "measure",
            menu: "Surfaces > Measurement > Measure surface",
            handler: cmd_measure,
        });
        registry.register(CommandEntry {
            id: "remove_column",
            menu: "Surfaces > Measurement > Remove column",
            handler: cmd_remove_column,
        });
        registry.register(CommandEntry {
            id: "select_row",
            menu: "Surfaces > Measurement > Highlight row",
            handler: cmd_select_row,
        });
        registry.register(CommandEntry {
            id: "deselect",
            menu: "Surfaces > Annotation > Deselect surface",
            handler: cmd_deselect,
        });
        registry
    }

    /// Add or replace a command entry
    pub fn register(&mut self, entry: CommandEntry) {
        self.entries.insert(entry.id, entry);
    }

    /// Check if a command id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered entries in id order, for building the host menu
    pub fn entries(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.values()
    }

    /// Dispatch a command by id.
    ///
    /// Fails with [`Error::UnknownCommand`] for an unregistered id and
    /// [`Error::InvalidArguments`] when the argument variant does not match
    /// the command.
    pub fn invoke(
        &self,
        id: &str,
        session: &mut AnnotationSession,
        surface: &Surface,
        kernel: &dyn ScalarFieldKernel,
        args: CommandArgs,
    ) -> Result<CommandEffect> {
        let entry = self.entries.get(id).ok_or_else(|| Error::UnknownCommand {
            id: id.to_string(),
        })?;
        (entry.handler)(session, surface, kernel, args)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_default_commands()
    }
}

fn invalid(command: &str) -> Error {
    Error::InvalidArguments {
        command: command.to_string(),
    }
}

fn cmd_paint(
    session: &mut AnnotationSession,
    surface: &Surface,
    _kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::Paint { stroke, label } => session
            .on_paint(surface, &stroke, label)
            .map(CommandEffect::Painted),
        _ => Err(invalid("paint")),
    }
}

fn cmd_erase(
    session: &mut AnnotationSession,
    surface: &Surface,
    _kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::Erase { stroke } => session
            .on_erase(surface, &stroke)
            .map(CommandEffect::Painted),
        _ => Err(invalid("erase")),
    }
}

fn cmd_measure(
    session: &mut AnnotationSession,
    surface: &Surface,
    kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::Measure { measurements } => {
            session.measure(surface, kernel, &measurements)?;
            Ok(CommandEffect::Measured)
        }
        _ => Err(invalid("measure")),
    }
}

fn cmd_remove_column(
    session: &mut AnnotationSession,
    _surface: &Surface,
    _kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::RemoveColumn { name } => {
            session.remove_column(&name)?;
            Ok(CommandEffect::ColumnRemoved)
        }
        _ => Err(invalid("remove_column")),
    }
}

fn cmd_select_row(
    session: &mut AnnotationSession,
    _surface: &Surface,
    _kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::SelectRow { row } => session
            .on_row_select(row)
            .map(CommandEffect::HighlightVertex),
        _ => Err(invalid("select_row")),
    }
}

fn cmd_deselect(
    session: &mut AnnotationSession,
    _surface: &Surface,
    _kernel: &dyn ScalarFieldKernel,
    args: CommandArgs,
) -> Result<CommandEffect> {
    match args {
        CommandArgs::None => {
            session.deselect();
            Ok(CommandEffect::Deselected)
        }
        _ => Err(invalid("deselect")),
    }
}
