use std::fmt;

use colored::Colorize;

use crate::filesystem::{Directory, Item, ItemTrait};

/// Indented pre-order listing of a directory and everything below it.
///
/// Each line is prefixed with the marker for its depth: nothing at depth 0,
/// ` |-` at depth 1 and `k` spaces followed by `|_` at any deeper depth `k`.
pub struct TreeDisplay<'a> {
    directory: &'a Directory,
    highlight_directories: bool,
}

impl<'a> TreeDisplay<'a> {
    pub(super) fn new(directory: &'a Directory) -> Self {
        Self {
            directory,
            highlight_directories: false,
        }
    }

    /// Styles directory names for terminals. Off by default.
    pub fn highlight_directories(mut self, highlight: bool) -> Self {
        self.highlight_directories = highlight;
        self
    }

    fn write_directory(
        &self,
        f: &mut fmt::Formatter<'_>,
        directory: &Directory,
        depth: usize,
    ) -> fmt::Result {
        write_marker(f, depth)?;
        if self.highlight_directories {
            writeln!(f, "{}", directory.name().blue().bold())?;
        } else {
            writeln!(f, "{}", directory.name())?;
        }

        for item in directory.items() {
            match item {
                Item::Directory(child) => self.write_directory(f, child, depth + 1)?,
                Item::File(file) => {
                    write_marker(f, depth + 1)?;
                    writeln!(f, "{file}")?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_directory(f, self.directory, 0)
    }
}

fn write_marker(f: &mut impl fmt::Write, depth: usize) -> fmt::Result {
    // Only the first level gets the dash
    match depth {
        0 => Ok(()),
        1 => f.write_str(" |-"),
        _ => write!(f, "{:depth$}|_", ""),
    }
}
