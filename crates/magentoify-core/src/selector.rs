/*!
# Model File Selection

Lists the model files directly beneath the configured models directory,
keeping only the configured extension and dropping the skip list.
*/

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::model_file::ModelFile;
use crate::{MagentoifyConfig, MagentoifyError, Result};

/// Select the model files for a configured project, sorted by path.
///
/// Dotfiles are never selected. An empty directory yields an empty list. A
/// missing directory, or an entry whose metadata cannot be read, is an I/O
/// error.
pub fn select_model_files(config: &MagentoifyConfig) -> Result<Vec<ModelFile>> {
    let models_path = config.models_path();
    let entries = fs::read_dir(&models_path).map_err(|e| MagentoifyError::io(&models_path, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MagentoifyError::io(&models_path, e))?.path();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if file_name.starts_with('.') || !has_extension(&path, &config.extension) {
            continue;
        }

        let metadata = fs::metadata(&path).map_err(|e| MagentoifyError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }

        if config.files_to_skip.contains(&file_name) {
            debug!("Skipping excluded model file {}", path.display());
            continue;
        }

        paths.push(path);
    }

    paths.sort();
    debug!("Selected {} model files under {}", paths.len(), models_path.display());

    Ok(paths.into_iter().map(ModelFile::new).collect())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy() == extension)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project_with(files: &[&str]) -> (tempfile::TempDir, MagentoifyConfig) {
        let dir = tempfile::tempdir().unwrap();
        let models = dir.path().join("app").join("models");
        fs::create_dir_all(&models).unwrap();
        for file in files {
            fs::write(models.join(file), "class Model\nend\n").unwrap();
        }
        let config = MagentoifyConfig::from_project(Some(dir.path())).unwrap();
        (dir, config)
    }

    #[test]
    fn test_selects_sorted_ruby_files() {
        let (_dir, config) = project_with(&["store.rb", "customer_entity.rb", "README.md"]);

        let names: Vec<_> = select_model_files(&config)
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        assert_eq!(names, vec!["customer_entity", "store"]);
    }

    #[test]
    fn test_skips_application_record() {
        let (_dir, config) = project_with(&["application_record.rb", "store.rb"]);

        let files = select_model_files(&config).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "store");
    }

    #[test]
    fn test_ignores_subdirectories() {
        let (dir, config) = project_with(&["store.rb"]);
        fs::create_dir_all(dir.path().join("app/models/concerns.rb")).unwrap();

        assert_eq!(select_model_files(&config).unwrap().len(), 1);
    }

    #[test]
    fn test_skips_dotfiles() {
        let (_dir, config) = project_with(&[".hidden.rb", "store.rb"]);

        let names: Vec<_> = select_model_files(&config)
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();

        assert_eq!(names, vec!["store"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_model_link_is_io_error() {
        let (dir, config) = project_with(&["store.rb"]);
        let link = dir.path().join("app/models/broken.rb");
        std::os::unix::fs::symlink(dir.path().join("missing.rb"), &link).unwrap();

        match select_model_files(&config) {
            Err(MagentoifyError::Io { path, .. }) => assert_eq!(path, link),
            other => panic!("Expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let (_dir, config) = project_with(&[]);
        assert!(select_model_files(&config).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let config = MagentoifyConfig::from_project(Some(PathBuf::from("/nonexistent/project"))).unwrap();
        assert!(matches!(select_model_files(&config), Err(MagentoifyError::Io { .. })));
    }
}
