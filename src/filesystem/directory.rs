use derive_more::Display;
use tracing::trace;

use crate::filesystem::{Item, ItemTrait, TreeDisplay};

/// Container node owning an ordered list of children.
///
/// Children are taken by value, so every node has exactly one owner and the
/// structure is always a tree. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{name}")]
pub struct Directory {
    name: String,
    items: Vec<Item>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: impl Into<Item>) {
        let item = item.into();
        trace!("Adding '{}' to directory '{}'", item.name(), self.name);
        self.items.push(item);
    }

    /// Appends a new empty directory and returns a handle to it.
    pub fn add_directory(&mut self, name: impl Into<String>) -> &mut Directory {
        self.add_item(Directory::new(name));
        // The item pushed just above is always a directory
        let Some(Item::Directory(directory)) = self.items.last_mut() else {
            unreachable!("add_item appends to the end of the list")
        };
        directory
    }

    /// Returns the first direct child directory called `name`.
    ///
    /// Files with a matching name are skipped and deeper descendants are not
    /// searched. A miss is an ordinary outcome.
    pub fn navigate_to(&mut self, name: &str) -> Option<&mut Directory> {
        let found = self.items.iter_mut().find_map(|item| match item {
            Item::Directory(directory) if directory.name == name => Some(directory),
            _ => None,
        });
        if found.is_none() {
            trace!("No directory '{}' in '{}'", name, self.name);
        }
        found
    }

    /// Shared-borrow counterpart of [`Directory::navigate_to`].
    pub fn find_directory(&self, name: &str) -> Option<&Directory> {
        self.items.iter().find_map(|item| match item {
            Item::Directory(directory) if directory.name == name => Some(directory),
            _ => None,
        })
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn number_of_items(&self) -> usize {
        self.items.len()
    }

    pub fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay::new(self)
    }
}

impl ItemTrait for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.items.iter().map(ItemTrait::size).sum()
    }
}
