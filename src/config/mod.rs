mod tree_description;

pub use tree_description::{TreeDescription, TreeDescriptionError};
