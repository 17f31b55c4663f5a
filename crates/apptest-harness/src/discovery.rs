//! ---
//! apptest_section: "02-harness"
//! apptest_subsection: "module"
//! apptest_type: "source"
//! apptest_scope: "code"
//! apptest_description: "Application discovery from the applications directory."
//! apptest_version: "v0.1.0"
//! apptest_owner: "tbd"
//! ---
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::application::Application;
use crate::error::{HarnessError, Result};

/// List one [`Application`] per sub-directory of `dir`, sorted by name.
///
/// A non-empty `whitelist` keeps only the applications named in it.
pub fn discover_applications(dir: &Path, whitelist: &[String]) -> Result<Vec<Application>> {
    let discovery_error = |source| HarnessError::Discovery {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(discovery_error)? {
        let entry = entry.map_err(discovery_error)?;
        if !entry.file_type().map_err(discovery_error)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if whitelist.is_empty() || whitelist.iter().any(|allowed| *allowed == name) {
            names.push(name);
        }
    }
    names.sort();
    debug!(dir = %dir.display(), count = names.len(), "discovered applications");
    Ok(names.into_iter().map(Application::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_apps(root: &Path, names: &[&str]) {
        for name in names {
            fs::create_dir_all(root.join(name)).unwrap();
        }
    }

    #[test]
    fn lists_directories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        make_apps(dir.path(), &["hello_world", "example_gpio", "coremark"]);
        fs::write(dir.path().join("README.md"), "not an app").unwrap();

        let apps = discover_applications(dir.path(), &[]).unwrap();
        let names: Vec<_> = apps.iter().map(|app| app.name.as_str()).collect();
        assert_eq!(names, vec!["coremark", "example_gpio", "hello_world"]);
    }

    #[test]
    fn whitelist_restricts_selection() {
        let dir = tempfile::tempdir().unwrap();
        make_apps(dir.path(), &["hello_world", "example_gpio", "coremark"]);

        let whitelist = vec!["hello_world".to_owned(), "not_there".to_owned()];
        let apps = discover_applications(dir.path(), &whitelist).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].name, "hello_world");
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_applications(&dir.path().join("sw/applications"), &[]).unwrap_err();
        assert!(err.to_string().contains("sw/applications"));
    }
}
