use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{borrow::Cow, path::PathBuf};
use tracing::{debug, warn};

use crate::filesystem::{Directory, File, Item, ItemTrait};

const DEFAULT_ROOT_NAME: &str = "/";

const ROOT_KEY: &str = "root";
const ITEMS_KEY: &str = "items";
const DIRECTORY_KEY: &str = "directory";
const FILE_KEY: &str = "file";
const EXTENSION_KEY: &str = "extension";
const SIZE_KEY: &str = "size";

fn key(name: &str) -> Yaml<'_> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

// Names like `2024` or `true` load as non-string scalars
fn scalar_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::Value(Scalar::String(text)) => Some(text.to_string()),
        Yaml::Value(Scalar::Integer(number)) => Some(number.to_string()),
        Yaml::Value(Scalar::FloatingPoint(number)) => Some(number.to_string()),
        Yaml::Value(Scalar::Boolean(flag)) => Some(flag.to_string()),
        _ => None,
    }
}

/// A tree built from a YAML description.
///
/// ```yaml
/// root: /
/// items:
///   - directory: bin
///     items:
///       - file: program
///         extension: exe
///         size: 450
///   - file: image1
///     extension: png
///     size: 20
/// ```
#[derive(Debug, Clone)]
pub struct TreeDescription {
    root: Directory,
}

impl TreeDescription {
    pub async fn from_path(path: PathBuf) -> Result<Self, TreeDescriptionError> {
        debug!("Reading tree description: {}", path.display());
        let bytes = compio::fs::read(&path).await.context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Read {} bytes of tree description", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }

    pub fn into_root(self) -> Directory {
        self.root
    }

    fn populate(
        directory: &mut Directory,
        entry: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<(), TreeDescriptionError> {
        let Some(items) = entry.get(&key(ITEMS_KEY)) else {
            return Ok(());
        };
        let items = items
            .as_sequence()
            .ok_or_else(|| TreeDescriptionError::ItemsNotSequence {
                directory: directory.name().to_string(),
            })?;

        for item in items {
            let Some(item_entry) = item.as_mapping() else {
                warn!(
                    "Skipping non-mapping entry in directory '{}': {:?}",
                    directory.name(),
                    item
                );
                continue;
            };
            if let Some(item) = Self::parse_item(item_entry)? {
                directory.add_item(item);
            }
        }
        Ok(())
    }

    fn parse_item(
        entry: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Option<Item>, TreeDescriptionError> {
        let directory_name = entry.get(&key(DIRECTORY_KEY)).and_then(scalar_text);
        let file_name = entry.get(&key(FILE_KEY)).and_then(scalar_text);

        match (directory_name, file_name) {
            (Some(name), None) => {
                let mut directory = Directory::new(name);
                Self::populate(&mut directory, entry)?;
                Ok(Some(directory.into()))
            }
            (None, Some(name)) => Ok(Self::parse_file(&name, entry).map(Item::from)),
            (Some(directory_name), Some(file_name)) => {
                warn!(
                    "Skipping entry naming both directory '{}' and file '{}'",
                    directory_name, file_name
                );
                Ok(None)
            }
            (None, None) => {
                warn!("Skipping entry without a directory or file name: {:?}", entry);
                Ok(None)
            }
        }
    }

    fn parse_file(name: &str, entry: &LinkedHashMap<Yaml, Yaml>) -> Option<File> {
        let Some(extension) = entry.get(&key(EXTENSION_KEY)).and_then(scalar_text) else {
            warn!("Skipping file '{}' without an extension", name);
            return None;
        };

        let size = match entry.get(&key(SIZE_KEY)) {
            None => 0,
            Some(Yaml::Value(Scalar::Integer(size))) => match u64::try_from(*size) {
                Ok(size) => size,
                Err(_) => {
                    warn!("Skipping file '{}' with negative size {}", name, size);
                    return None;
                }
            },
            Some(other) => {
                warn!("Skipping file '{}' with non-integer size {:?}", name, other);
                return None;
            }
        };

        Some(File::new(name, extension, size))
    }
}

impl TryFrom<&str> for TreeDescription {
    type Error = TreeDescriptionError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents
            .first()
            .ok_or(TreeDescriptionError::MalformedDescription)?;

        let top_level = document
            .as_mapping()
            .ok_or(TreeDescriptionError::TopLevelNotMap)?;

        let root_name = match top_level.get(&key(ROOT_KEY)) {
            None => DEFAULT_ROOT_NAME.to_string(),
            Some(name) => scalar_text(name).ok_or(TreeDescriptionError::RootNameNotScalar)?,
        };

        let mut root = Directory::new(root_name);
        Self::populate(&mut root, top_level)?;
        debug!(
            "Built tree '{}' with {} top-level items",
            root.name(),
            root.number_of_items()
        );

        Ok(TreeDescription { root })
    }
}

#[derive(Debug, Snafu)]
pub enum TreeDescriptionError {
    #[snafu(display("Failed to read the tree description: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Tree description is not valid UTF-8: {}", file_path))]
    EncodingError {
        file_path: String,
        source: std::string::FromUtf8Error,
    },
    #[snafu(display("Failed to parse the tree description"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted tree description"))]
    MalformedDescription,
    #[snafu(display("Top level of the tree description should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Root name should be a scalar"))]
    RootNameNotScalar,
    #[snafu(display("Items of directory '{}' should be a sequence", directory))]
    ItemsNotSequence { directory: String },
}
