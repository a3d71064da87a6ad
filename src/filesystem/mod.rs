//! In-memory filesystem tree.
//!
//! Nodes are either files (a size and an extension) or directories that own
//! an ordered list of child nodes. Directory sizes are never stored; they are
//! aggregated from the descendants on every call.

mod demo;
mod directory;
mod file;
mod item;
mod render;

pub use demo::demo_tree;
pub use directory::Directory;
pub use file::File;
pub use item::{Item, ItemTrait};
pub use render::TreeDisplay;
