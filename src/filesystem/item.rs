use derive_more::{Display, From};

use crate::filesystem::{Directory, File};

pub trait ItemTrait {
    fn name(&self) -> &str;
    // Declared byte count for files, recursive aggregate for directories
    fn size(&self) -> u64;
}

/// A node of the tree.
///
/// `Display` writes the single-line identity of the node: the file listing
/// line for a file and just the name for a directory. Rendering a whole
/// subtree goes through [`Directory::tree`].
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum Item {
    File(File),
    Directory(Directory),
}

impl ItemTrait for Item {
    fn name(&self) -> &str {
        match self {
            Item::File(file) => file.name(),
            Item::Directory(directory) => directory.name(),
        }
    }

    fn size(&self) -> u64 {
        match self {
            Item::File(file) => file.size(),
            Item::Directory(directory) => directory.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_item_delegates_to_file() {
        let item = Item::from(File::new("info", "txt", 100));

        assert_eq!(item.name(), "info");
        assert_eq!(item.size(), 100);
        assert_eq!(item.to_string(), "info.txt 100");
    }

    #[test]
    fn directory_item_renders_only_its_name() {
        let mut directory = Directory::new("tim");
        directory.add_item(File::new("info", "txt", 100));
        let item = Item::from(directory);

        assert_eq!(item.name(), "tim");
        assert_eq!(item.size(), 100);
        assert_eq!(item.to_string(), "tim");
    }
}
