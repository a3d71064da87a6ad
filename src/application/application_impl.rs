use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::config::TreeDescription;
use crate::config::TreeDescriptionError;
use crate::filesystem::{Directory, ItemTrait, demo_tree};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let root = match &app_config.description {
            Some(path) => TreeDescription::from_path(path.clone())
                .await
                .context(DescriptionSnafu)?
                .into_root(),
            None => {
                info!("No tree description given, using the demo tree");
                demo_tree()
            }
        };

        if app_config.highlight {
            // Decided by --color, colored must not re-check stdout
            colored::control::set_override(true);
        }
        print!("{}", Self::report(&root, &app_config)?);

        Ok(())
    }

    /// Size, direct item count and listing of the target directory.
    fn report(root: &Directory, app_config: &RuntimeConfig) -> Result<String, ApplicationError> {
        let target = Self::resolve_target(root, &app_config.navigate)?;
        info!(
            "Reporting on '{}' ({} items)",
            target.name(),
            target.number_of_items()
        );

        Ok(format!(
            "{}\n{}\n{}",
            target.size(),
            target.number_of_items(),
            target.tree().highlight_directories(app_config.highlight)
        ))
    }

    fn resolve_target<'a>(
        root: &'a Directory,
        names: &[String],
    ) -> Result<&'a Directory, ApplicationError> {
        names.iter().try_fold(root, |current, name| {
            current.find_directory(name).context(DirectoryNotFoundSnafu {
                name,
                parent: current.name(),
            })
        })
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the tree description"))]
    DescriptionError { source: TreeDescriptionError },
    #[snafu(display("No directory '{}' inside '{}'", name, parent))]
    DirectoryNotFoundError { name: String, parent: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_navigating(names: &[&str]) -> RuntimeConfig {
        RuntimeConfig {
            navigate: names.iter().map(|name| name.to_string()).collect(),
            ..RuntimeConfig::default()
        }
    }

    #[test]
    fn report_matches_demo_program_output() {
        let report = Application::report(&demo_tree(), &RuntimeConfig::default()).unwrap();

        assert_eq!(
            report,
            "570\n3\n/\n |-bin\n  |_program.exe 450\n |-home\n  |_tim\n   |_info.txt 100\n   |_data.in 0\n   |_data\n |-image1.png 20\n"
        );
    }

    #[test]
    fn report_descends_into_navigated_directory() {
        let config = config_navigating(&["home", "tim"]);
        let report = Application::report(&demo_tree(), &config).unwrap();

        assert_eq!(
            report,
            "100\n3\ntim\n |-info.txt 100\n |-data.in 0\n |-data\n"
        );
    }

    #[test]
    fn report_fails_on_missing_directory() {
        let config = config_navigating(&["home", "bob"]);
        let result = Application::report(&demo_tree(), &config);

        match result {
            Err(ApplicationError::DirectoryNotFoundError { name, parent }) => {
                assert_eq!(name, "bob");
                assert_eq!(parent, "home");
            }
            other => panic!("Expected DirectoryNotFoundError, got {other:?}"),
        }
    }

    #[test]
    fn report_does_not_navigate_into_files() {
        let config = config_navigating(&["image1"]);
        let result = Application::report(&demo_tree(), &config);

        assert!(matches!(
            result,
            Err(ApplicationError::DirectoryNotFoundError { .. })
        ));
    }

    #[compio::test]
    async fn run_fails_on_missing_description() {
        let config = RuntimeConfig {
            description: Some("nonexistent.yaml".into()),
            ..RuntimeConfig::default()
        };

        let result = Application::run(config).await;
        assert!(matches!(
            result,
            Err(ApplicationError::DescriptionError { .. })
        ));
    }

    #[compio::test]
    async fn run_accepts_description_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            temp_file,
            "root: srv\nitems:\n  - file: index\n    extension: html\n    size: 12\n"
        )
        .expect("Failed to write to temp file");

        let config = RuntimeConfig {
            description: Some(temp_file.path().to_path_buf()),
            ..RuntimeConfig::default()
        };
        assert!(Application::run(config).await.is_ok());
    }
}
