use std::fmt;

use crate::filesystem::ItemTrait;

/// Leaf node with a declared size. Rendered as `<name>.<extension> <size>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    extension: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, extension: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            size,
        }
    }

    /// A file without a declared size counts as zero bytes.
    pub fn empty(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::new(name, extension, 0)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {}", self.name(), self.extension(), self.size())
    }
}

impl ItemTrait for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn empty_file_has_zero_size() {
        let file = File::empty("data", "in");

        assert_eq!(file.size(), 0);
        assert_eq!(file.to_string(), "data.in 0");
    }

    #[test]
    fn accessors_return_constructor_values() {
        let file = File::new("program", "exe", 450);

        assert_eq!(file.name(), "program");
        assert_eq!(file.extension(), "exe");
        assert_eq!(file.size(), 450);
    }

    #[rstest]
    #[case(File::new("image1", "png", 20), "image1.png 20")]
    #[case(File::new("archive.tar", "gz", 1024), "archive.tar.gz 1024")]
    #[case(File::new("", "", 7), ". 7")]
    #[case(File::new("читать", "мне", 3), "читать.мне 3")]
    fn display_joins_name_extension_and_size(#[case] file: File, #[case] expected: &str) {
        assert_eq!(file.to_string(), expected);
    }
}
