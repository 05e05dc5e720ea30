use crate::config::ScanConfig;
use crate::errors::{GoifaceError, Result};
use globset::{Glob, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// Directory names that never contribute interfaces worth stubbing:
/// `internal`/`vendor` packages cannot be imported from outside, `cmd`
/// holds entry points, `testdata` and `issue` hold fixtures.
pub const RESERVED_DIRS: &[&str] = &["internal", "vendor", "issue", "testdata", "cmd"];

const GO_EXTENSION: &str = "go";
const TEST_FILE_GLOB: &str = "*_test.go";
const ENTRYPOINT_FILE: &str = "main.go";

/// Discover Go source files under `root`.
///
/// - Respects `.gitignore` unless `respect_gitignore` is off
/// - Skips files in reserved directories (see [`RESERVED_DIRS`])
/// - Skips `*_test.go` and `main.go` unless configured otherwise
/// - Returns sorted paths for deterministic output
///
/// A missing or non-directory `root` is an error; unreadable entries
/// inside the walk are logged and skipped so one bad file cannot abort
/// the scan of its siblings.
pub fn discover_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GoifaceError::BadRoot {
            path: root.to_path_buf(),
        });
    }

    // Build exclude globset: configured patterns plus filename conventions
    let mut exclude_builder = GlobSetBuilder::new();
    for pattern in &config.exclude {
        exclude_builder.add(Glob::new(pattern)?);
    }
    if !config.include_tests {
        exclude_builder.add(Glob::new(TEST_FILE_GLOB)?);
    }
    if !config.include_entrypoints {
        exclude_builder.add(Glob::new(ENTRYPOINT_FILE)?);
    }
    let exclude_set = exclude_builder.build()?;

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(config.respect_gitignore)
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();

        // Only consider files
        if !path.is_file() {
            continue;
        }

        // Check extension
        let ext_match = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext == GO_EXTENSION);

        if !ext_match {
            continue;
        }

        // Reserved directories are matched against the path below the scan
        // root, so a project that itself lives under e.g. ~/vendor still
        // scans. Exact component match, not substring: `internally/` is fine.
        let relative = path.strip_prefix(root).unwrap_or(path);
        let reserved = relative.components().any(|c| {
            matches!(c, Component::Normal(name)
                if name.to_str().is_some_and(|n| RESERVED_DIRS.contains(&n)))
        });
        if reserved {
            continue;
        }

        // Apply exclude patterns against the relative path and the filename
        if exclude_set.is_match(relative) || exclude_set.is_match(path) {
            continue;
        }
        if let Some(fname) = path.file_name() {
            if exclude_set.is_match(Path::new(fname)) {
                continue;
            }
        }

        files.push(path.to_path_buf());
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "package x\n").unwrap();
    }

    #[test]
    fn discovers_only_go_sources() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.go"));
        touch(&root.join("b.txt"));
        touch(&root.join("pkg/c.go"));

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "go"));
    }

    #[test]
    fn excludes_reserved_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("keep.go"));
        for reserved in RESERVED_DIRS {
            touch(&root.join(reserved).join("x.go"));
        }

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.go"));
    }

    #[test]
    fn reserved_match_is_exact_component_not_substring() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("internally/ok.go"));

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn excludes_tests_and_entrypoints_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.go"));
        touch(&root.join("a_test.go"));
        touch(&root.join("main.go"));

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.go"));
    }

    #[test]
    fn include_tests_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.go"));
        touch(&root.join("a_test.go"));

        let config = ScanConfig {
            include_tests: true,
            ..ScanConfig::default()
        };
        let files = discover_files(root, &config).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn gitignore_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        // gitignore matching only activates inside a repository
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".gitignore"), "gen.go\n").unwrap();
        touch(&root.join("gen.go"));
        touch(&root.join("a.go"));

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.go"));

        let config = ScanConfig {
            respect_gitignore: false,
            ..ScanConfig::default()
        };
        let files = discover_files(root, &config).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn configured_exclude_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a.go"));
        touch(&root.join("gen/b.go"));

        let config = ScanConfig {
            exclude: vec!["gen/**".to_string()],
            ..ScanConfig::default()
        };
        let files = discover_files(root, &config).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = discover_files(Path::new("/no/such/dir"), &ScanConfig::default());
        assert!(matches!(err, Err(GoifaceError::BadRoot { .. })));
    }

    #[test]
    fn output_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("z.go"));
        touch(&root.join("a.go"));
        touch(&root.join("m.go"));

        let files = discover_files(root, &ScanConfig::default()).unwrap();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
