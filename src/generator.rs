//! Generator
//!
//! Emits the `Context0..ContextN-1` stage interfaces together with their `then` and
//! `finally` extension functions. Output is a pure function of the interface count:
//! the same count always yields byte-identical text.

use crate::error::GenerateError;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod signature;
pub mod template;

pub use signature::{generic_list, interface_type};
pub use template::{ThenVariant, FILE_HEADER, NEXT_ACCESSOR};

/// Interface count used when nothing else is configured.
pub const DEFAULT_INTERFACE_COUNT: usize = 16;

/// Renders and writes the stage declarations for a fixed interface count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    interface_count: usize,
}

/// Result of comparing a file on disk with freshly rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    /// 1-based line of the first difference.
    Stale { line: usize },
    Missing,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            interface_count: DEFAULT_INTERFACE_COUNT,
        }
    }
}

impl Generator {
    pub fn new(interface_count: usize) -> Self {
        Self { interface_count }
    }

    /// Build from an untrusted signed count, failing fast on negative values.
    pub fn from_count(interface_count: i64) -> Result<Self, GenerateError> {
        usize::try_from(interface_count)
            .map(Self::new)
            .map_err(|_| GenerateError::InvalidInterfaceCount(interface_count))
    }

    pub fn interface_count(&self) -> usize {
        self.interface_count
    }

    /// Number of `Contextk` sections emitted. A count of zero still yields `Context0`
    /// with its `finally`, so there is always at least one section.
    pub fn section_count(&self) -> usize {
        self.interface_count.max(1)
    }

    /// Render the whole file.
    pub fn render(&self) -> String {
        let mut out = String::from(FILE_HEADER);
        let sections = self.section_count();
        for arity in 0..sections {
            self.render_section(arity, arity + 1 == sections, &mut out);
        }
        out.push('\n');
        out
    }

    fn render_section(&self, arity: usize, is_last: bool, out: &mut String) {
        let generics = generic_list(arity, false);
        let current = interface_type(arity, &generics);

        out.push_str(&template::interface_declaration(arity, &generics));

        if !is_last {
            let next = interface_type(arity + 1, &generic_list(arity + 1, true));
            for variant in ThenVariant::ALL {
                out.push_str(&template::then_block(
                    arity, variant, &generics, &current, &next,
                ));
            }
        }

        out.push_str(&template::finally_block(arity, &generics, &current));
        debug!(arity, is_last, "Emitted {}", current);
    }

    /// Overwrite `path` with the rendered file. The handle is scoped to this call and
    /// released on every exit path; a failed write may leave the file truncated.
    pub fn write_to(&self, path: &Path) -> Result<usize, GenerateError> {
        let rendered = self.render();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
            }
        }

        let file = File::create(path).map_err(|e| GenerateError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(rendered.as_bytes())
            .map_err(|e| GenerateError::io(path, e))?;
        writer.flush().map_err(|e| GenerateError::io(path, e))?;

        info!(
            path = %path.display(),
            bytes = rendered.len(),
            interfaces = self.section_count(),
            "Wrote generated contexts"
        );
        Ok(rendered.len())
    }

    /// Compare `path` against the rendered output without modifying it.
    pub fn check(&self, path: &Path) -> Result<Freshness, GenerateError> {
        let existing = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Freshness::Missing),
            Err(e) => return Err(GenerateError::io(path, e)),
        };

        let rendered = self.render();
        if existing == rendered {
            return Ok(Freshness::UpToDate);
        }
        Ok(Freshness::Stale {
            line: first_difference_line(&existing, &rendered),
        })
    }

    /// Like [`Generator::check`], but turns anything other than `UpToDate` into an error.
    pub fn ensure_fresh(&self, path: &Path) -> Result<(), GenerateError> {
        match self.check(path)? {
            Freshness::UpToDate => Ok(()),
            Freshness::Stale { line } => Err(GenerateError::Stale {
                path: PathBuf::from(path),
                line,
            }),
            Freshness::Missing => Err(GenerateError::Missing(PathBuf::from(path))),
        }
    }
}

fn first_difference_line(a: &str, b: &str) -> usize {
    let mut left = a.split('\n');
    let mut right = b.split('\n');
    let mut line = 1;
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if l == r => line += 1,
            _ => return line,
        }
    }
}
