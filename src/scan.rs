//! Scan orchestration: the public reset-and-rescan entry points.
//!
//! Each entry point runs the walk and extraction to completion before
//! returning, so a caller never observes a partially repopulated catalog.
//! Queries must not be interleaved with an in-progress scan; the `&mut`
//! borrow on the catalog enforces that at compile time.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::{GoifaceError, Result};
use crate::extract;
use crate::gomod;
use crate::walk;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a scan did, for logging and CLI reporting.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub interfaces_found: usize,
}

/// Rebuild the project-local partition from the tree under `root`.
///
/// Resets the project partition (the standard-library partition is left
/// alone), reads `go.mod` for import-path derivation, then walks and
/// extracts every candidate file. Unreadable files are counted as skipped
/// and do not abort the scan.
pub fn scan_project(catalog: &mut Catalog, root: &Path, config: &Config) -> Result<ScanReport> {
    let root = canonical_root(root)?;
    catalog.reset();

    let module_path = gomod::read_module_path(&root);
    if module_path.is_none() {
        tracing::warn!(
            "no usable go.mod under {}; entries will resolve by package name only",
            root.display()
        );
    }

    let files = walk::discover_files(&root, &config.scan)?;
    let mut report = ScanReport::default();

    for file in &files {
        let import_path = module_path
            .as_deref()
            .map(|module| gomod::import_path_for(module, &root, file));
        match extract::extract_file(file, false, import_path.as_deref(), &config.extract, catalog)
        {
            Some(appended) => {
                report.files_scanned += 1;
                report.interfaces_found += appended;
            }
            None => report.files_skipped += 1,
        }
    }

    tracing::debug!(
        "project scan of {}: {} interfaces from {} files ({} skipped)",
        root.display(),
        report.interfaces_found,
        report.files_scanned,
        report.files_skipped
    );
    Ok(report)
}

/// Repopulate the standard-library partition from `goroot_src`
/// (typically `$GOROOT/src`). Clears both partitions first: this runs
/// once per toolchain-root discovery, after which the stdlib partition
/// persists across project rescans.
pub fn scan_stdlib(catalog: &mut Catalog, goroot_src: &Path, config: &Config) -> Result<ScanReport> {
    let root = canonical_root(goroot_src)?;
    catalog.clear();

    let files = walk::discover_files(&root, &config.scan)?;
    let mut report = ScanReport::default();

    for file in &files {
        match extract::extract_file(file, true, None, &config.extract, catalog) {
            Some(appended) => {
                report.files_scanned += 1;
                report.interfaces_found += appended;
            }
            None => report.files_skipped += 1,
        }
    }

    tracing::debug!(
        "stdlib scan of {}: {} interfaces from {} files ({} skipped)",
        root.display(),
        report.interfaces_found,
        report.files_scanned,
        report.files_skipped
    );
    Ok(report)
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize().map_err(|_| GoifaceError::BadRoot {
        path: root.to_path_buf(),
    })
}
