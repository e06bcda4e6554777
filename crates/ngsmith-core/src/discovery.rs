//! Workspace manifest discovery
//!
//! Two strategies locate `angular.json`. The default walks up from the
//! target folder and takes the nearest ancestor manifest. With an
//! explicit root the tree below it is scanned instead, skipping
//! `node_modules` and hidden directories, and the shallowest match wins
//! with depth ties broken lexicographically. Either way the manifest's
//! own directory becomes the workspace root.

use std::sync::LazyLock;

use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILE_NAME};

/// Directory patterns the downward scan never descends into
const SCAN_EXCLUDE: &[&str] = &["**/node_modules", "**/node_modules/**"];

static SCAN_EXCLUSIONS: LazyLock<GlobSet> = LazyLock::new(|| {
    let mut builder = GlobSetBuilder::new();
    for pattern in SCAN_EXCLUDE {
        builder.add(Glob::new(pattern).expect("exclusion pattern is valid"));
    }
    builder.build().expect("exclusion globset builds")
});

/// A located Angular workspace: the manifest file and the directory
/// that anchors every relative path in a generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Path of the `angular.json` file
    pub manifest_path: Utf8PathBuf,
    /// Directory containing the manifest
    pub root: Utf8PathBuf,
}

impl Workspace {
    /// Anchor a workspace at the manifest's directory.
    pub fn from_manifest(manifest_path: Utf8PathBuf) -> Self {
        let root = manifest_path
            .parent()
            .map(Utf8Path::to_path_buf)
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            manifest_path,
            root,
        }
    }

    /// Nearest workspace containing `start`, by ancestor search.
    pub fn locate(start: &Utf8Path) -> Option<Self> {
        find_manifest_above(start).map(Self::from_manifest)
    }

    /// First workspace under `root`: shallowest manifest, then
    /// lexicographic order.
    pub fn scan(root: &Utf8Path) -> Option<Self> {
        find_manifest_within(root).map(Self::from_manifest)
    }

    /// Read and parse this workspace's manifest.
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.manifest_path)
    }
}

/// Find `angular.json` in `start` or the nearest ancestor directory.
pub fn find_manifest_above(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(MANIFEST_FILE_NAME);
        if candidate.is_file() {
            debug!("Workspace manifest found at {}", candidate);
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

/// Find the first `angular.json` below `root`.
///
/// `node_modules` and hidden directories are pruned from the walk.
/// Unreadable entries are skipped rather than aborting the scan.
pub fn find_manifest_within(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut candidates: Vec<(usize, Utf8PathBuf)> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !excluded_from_scan(root, entry));

    for entry in walker.filter_map(|entry| entry.ok()) {
        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE_NAME {
            if let Ok(path) = Utf8PathBuf::from_path_buf(entry.path().to_path_buf()) {
                candidates.push((entry.depth(), path));
            }
        }
    }

    candidates.sort();
    let found = candidates.into_iter().next().map(|(_, path)| path);
    if let Some(path) = &found {
        debug!("Workspace manifest found at {}", path);
    }
    found
}

/// True for directories the scan must not descend into.
fn excluded_from_scan(root: &Utf8Path, entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    if entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
    {
        return true;
    }
    let relative = entry
        .path()
        .strip_prefix(root.as_std_path())
        .unwrap_or(entry.path());
    SCAN_EXCLUSIONS.is_match(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap()
    }

    fn plant_manifest(dir: &Utf8Path) {
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join(MANIFEST_FILE_NAME), "{}").unwrap();
    }

    #[test]
    fn test_find_above_from_nested_folder() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root);
        let nested = root.join("src/app/features");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_manifest_above(&nested).unwrap();
        assert_eq!(found, root.join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_find_above_in_start_itself() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root);

        let found = find_manifest_above(&root).unwrap();
        assert_eq!(found, root.join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_find_within_prefers_shallowest() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root);
        plant_manifest(&root.join("apps/site"));

        let found = find_manifest_within(&root).unwrap();
        assert_eq!(found, root.join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_find_within_breaks_depth_ties_lexicographically() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root.join("beta"));
        plant_manifest(&root.join("alpha"));

        let found = find_manifest_within(&root).unwrap();
        assert_eq!(found, root.join("alpha").join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_find_within_skips_node_modules() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root.join("node_modules/@angular/cli"));
        plant_manifest(&root.join("site"));

        let found = find_manifest_within(&root).unwrap();
        assert_eq!(found, root.join("site").join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_find_within_skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root.join(".cache"));

        assert!(find_manifest_within(&root).is_none());
    }

    #[test]
    fn test_find_within_only_node_modules_is_none() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root.join("node_modules/fixture"));

        assert!(find_manifest_within(&root).is_none());
    }

    #[test]
    fn test_workspace_root_is_manifest_parent() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        plant_manifest(&root);

        let workspace = Workspace::locate(&root).unwrap();
        assert_eq!(workspace.root, root);
        assert_eq!(workspace.manifest_path, root.join(MANIFEST_FILE_NAME));
    }

    #[test]
    fn test_locate_without_manifest_is_none() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        let nested = root.join("plain/folder");
        std::fs::create_dir_all(&nested).unwrap();

        assert!(Workspace::locate(&nested).is_none());
    }
}
