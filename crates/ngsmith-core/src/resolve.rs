//! Folder-to-project resolution
//!
//! Maps a target folder inside an Angular workspace onto the two pieces
//! a generator invocation needs: the project that owns the folder and
//! the command path the generator prefixes with that project's source
//! layout. The literal `app` token splits the folder path into the two,
//! matching the layout `ng new` produces (`src/app/...`).

use camino::Utf8Path;
use tracing::debug;

use crate::discovery::Workspace;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::paths::{normalize, paths_equal, trim_separators, unify_separators};

/// Token that splits source root from command path
const APP_TOKEN: &str = "app";

/// Outcome of resolving a target folder against a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Command path below the `app` folder, `/`-separated
    pub path: String,
    /// Owning project, empty for the manifest's default project
    pub project: String,
}

impl ResolvedTarget {
    /// Full schematic target: the command path joined with the artifact name.
    pub fn schematic_target(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.path, name)
        }
    }
}

/// Resolve a folder against a workspace and its manifest.
pub fn resolve_target(
    workspace: &Workspace,
    manifest: &Manifest,
    folder: &Utf8Path,
) -> Result<ResolvedTarget> {
    if !folder.starts_with(&workspace.root) {
        return Err(Error::folder_outside_workspace(
            folder.as_str(),
            workspace.root.as_str(),
        ));
    }

    let source_root = resolve_source_root(workspace.root.as_str(), folder.as_str());
    debug!("Source root for {}: '{}'", folder, source_root);

    let project = resolve_project_name(manifest, &source_root)?;
    let path = build_command_path(folder.as_str());

    Ok(ResolvedTarget { path, project })
}

/// Path between the workspace root and the first `app` occurrence,
/// normalized and separator-trimmed.
///
/// The `app` match is a raw substring search, kept for compatibility
/// with the folder layouts this resolution was built around. An empty
/// workspace root yields an empty string.
pub fn resolve_source_root(workspace_root: &str, folder: &str) -> String {
    if workspace_root.is_empty() {
        return String::new();
    }

    let relative = folder.get(workspace_root.len()..).unwrap_or("");
    let before_app = match relative.find(APP_TOKEN) {
        Some(index) => &relative[..index],
        None => "",
    };

    trim_separators(&normalize(before_app)).to_string()
}

/// Find the project whose declared source root matches.
///
/// Matching is exact after normalization; projects without a
/// `sourceRoot` never match, and the first declared match wins. The
/// default project resolves to an empty name so the `--project` flag
/// can be omitted.
pub fn resolve_project_name(manifest: &Manifest, source_root: &str) -> Result<String> {
    let matched = manifest
        .projects
        .iter()
        .find(|(_, project)| {
            project
                .source_root
                .as_deref()
                .is_some_and(|declared| paths_equal(declared, source_root))
        })
        .map(|(name, _)| name.as_str());

    let name = matched.ok_or_else(|| Error::no_matching_project(source_root))?;
    debug!("Folder belongs to project '{}'", name);

    if manifest.default_project.as_deref() == Some(name) {
        Ok(String::new())
    } else {
        Ok(name.to_string())
    }
}

/// Everything in the folder path after the `app` token, trimmed and
/// unified to `/` separators. No occurrence yields an empty path.
pub fn build_command_path(folder: &str) -> String {
    let after_app = match folder.find(APP_TOKEN) {
        Some(index) => &folder[index + APP_TOKEN.len()..],
        None => "",
    };
    unify_separators(trim_separators(after_app))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Project;
    use camino::Utf8PathBuf;
    use indexmap::IndexMap;

    fn manifest(projects: &[(&str, Option<&str>)], default: Option<&str>) -> Manifest {
        let mut map = IndexMap::new();
        for (name, source_root) in projects {
            map.insert(
                name.to_string(),
                Project {
                    source_root: source_root.map(String::from),
                },
            );
        }
        Manifest {
            projects: map,
            default_project: default.map(String::from),
        }
    }

    fn workspace(root: &str) -> Workspace {
        Workspace {
            manifest_path: Utf8PathBuf::from(root).join("angular.json"),
            root: Utf8PathBuf::from(root),
        }
    }

    // ─── Source root ───

    #[test]
    fn test_source_root_between_root_and_app() {
        assert_eq!(resolve_source_root("/ws", "/ws/src/app/features/login"), "src");
    }

    #[test]
    fn test_source_root_multi_segment() {
        assert_eq!(
            resolve_source_root("/ws", "/ws/packages/web/src/app"),
            "packages/web/src"
        );
    }

    #[test]
    fn test_source_root_empty_workspace_root() {
        assert_eq!(resolve_source_root("", "/ws/src/app"), "");
    }

    #[test]
    fn test_source_root_without_app_token() {
        assert_eq!(resolve_source_root("/ws", "/ws/src/lib"), ".");
    }

    #[test]
    fn test_source_root_app_directly_under_root() {
        assert_eq!(resolve_source_root("/ws", "/ws/app/shared"), "");
    }

    #[test]
    fn test_source_root_backslash_folders() {
        assert_eq!(
            resolve_source_root("C:\\ws", "C:\\ws\\src\\app\\shared"),
            "src"
        );
    }

    #[test]
    fn test_source_root_matches_on_substring_not_segment() {
        // 'application' contains 'app', so the split happens inside it
        assert_eq!(resolve_source_root("/ws", "/ws/src/application/x"), "src");
    }

    // ─── Command path ───

    #[test]
    fn test_command_path_after_app() {
        assert_eq!(build_command_path("/ws/src/app/features/login"), "features/login");
    }

    #[test]
    fn test_command_path_app_folder_itself() {
        assert_eq!(build_command_path("/ws/src/app"), "");
    }

    #[test]
    fn test_command_path_without_app_token() {
        assert_eq!(build_command_path("/ws/src/lib"), "");
    }

    #[test]
    fn test_command_path_unifies_backslashes() {
        assert_eq!(
            build_command_path("C:\\ws\\src\\app\\shared\\ui"),
            "shared/ui"
        );
    }

    // ─── Project name ───

    #[test]
    fn test_project_match_returns_name() {
        let m = manifest(&[("demo", Some("src"))], None);
        assert_eq!(resolve_project_name(&m, "src").unwrap(), "demo");
    }

    #[test]
    fn test_default_project_resolves_to_empty() {
        let m = manifest(&[("demo", Some("src"))], Some("demo"));
        assert_eq!(resolve_project_name(&m, "src").unwrap(), "");
    }

    #[test]
    fn test_no_match_is_an_error() {
        let m = manifest(&[("demo", Some("src"))], None);
        let err = resolve_project_name(&m, "lib").unwrap_err();
        assert!(matches!(err, Error::NoMatchingProject { .. }));
        assert!(err.to_string().contains("No project found"));
    }

    #[test]
    fn test_empty_projects_is_an_error() {
        let m = manifest(&[], None);
        assert!(resolve_project_name(&m, "src").is_err());
    }

    #[test]
    fn test_match_is_separator_insensitive() {
        let m = manifest(&[("web", Some("packages\\web\\src"))], None);
        assert_eq!(resolve_project_name(&m, "packages/web/src").unwrap(), "web");
    }

    #[test]
    fn test_missing_source_root_never_matches() {
        let m = manifest(&[("lib", None), ("demo", Some("src"))], None);
        assert_eq!(resolve_project_name(&m, "src").unwrap(), "demo");
    }

    #[test]
    fn test_first_declared_match_wins() {
        let m = manifest(&[("first", Some("src")), ("second", Some("src"))], None);
        assert_eq!(resolve_project_name(&m, "src").unwrap(), "first");
    }

    // ─── Full resolution ───

    #[test]
    fn test_resolve_target_default_project() {
        let ws = workspace("/ws");
        let m = manifest(&[("demo", Some("src"))], Some("demo"));
        let resolved =
            resolve_target(&ws, &m, Utf8Path::new("/ws/src/app/features/login")).unwrap();
        assert_eq!(resolved.path, "features/login");
        assert_eq!(resolved.project, "");
    }

    #[test]
    fn test_resolve_target_named_project() {
        let ws = workspace("/ws");
        let m = manifest(&[("demo", Some("src"))], None);
        let resolved =
            resolve_target(&ws, &m, Utf8Path::new("/ws/src/app/features/login")).unwrap();
        assert_eq!(resolved.project, "demo");
    }

    #[test]
    fn test_resolve_target_outside_workspace() {
        let ws = workspace("/ws");
        let m = manifest(&[("demo", Some("src"))], None);
        let err = resolve_target(&ws, &m, Utf8Path::new("/elsewhere/src/app")).unwrap_err();
        assert!(matches!(err, Error::FolderOutsideWorkspace { .. }));
    }

    #[test]
    fn test_schematic_target_joins_path_and_name() {
        let resolved = ResolvedTarget {
            path: "features/login".to_string(),
            project: String::new(),
        };
        assert_eq!(resolved.schematic_target("login-form"), "features/login/login-form");
    }

    #[test]
    fn test_schematic_target_with_empty_path() {
        let resolved = ResolvedTarget {
            path: String::new(),
            project: String::new(),
        };
        assert_eq!(resolved.schematic_target("shared"), "shared");
    }
}
