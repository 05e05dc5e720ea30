use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::Result;
use crate::output::{self, OutputFormat};
use crate::scan::{self, ScanReport};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Project root to scan
    pub path: PathBuf,

    /// Standard-library source root (e.g. $GOROOT/src) to index as well
    #[arg(long)]
    pub stdlib_root: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = Config::find_and_load(&args.path)?.unwrap_or_default();
    let mut catalog = Catalog::new();
    let mut report = ScanReport::default();

    // Stdlib first: it clears the whole catalog, then persists across
    // project rescans.
    if let Some(stdlib_root) = &args.stdlib_root {
        merge(&mut report, scan::scan_stdlib(&mut catalog, stdlib_root, &config)?);
    }
    merge(&mut report, scan::scan_project(&mut catalog, &args.path, &config)?);

    let mut stdout = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => output::write_catalog_json(&mut stdout, &catalog, &report)?,
        OutputFormat::Text => output::write_catalog_text(&mut stdout, &catalog, &report)?,
    }
    Ok(())
}

fn merge(total: &mut ScanReport, part: ScanReport) {
    total.files_scanned += part.files_scanned;
    total.files_skipped += part.files_skipped;
    total.interfaces_found += part.interfaces_found;
}
