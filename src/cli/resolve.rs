use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::{GoifaceError, Result};
use crate::resolve;
use crate::scan;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Interface name to resolve
    pub name: String,

    /// Project root to scan
    pub path: PathBuf,

    /// Standard-library source root (e.g. $GOROOT/src) to index as well
    #[arg(long)]
    pub stdlib_root: Option<PathBuf>,
}

pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = Config::find_and_load(&args.path)?.unwrap_or_default();
    let mut catalog = Catalog::new();

    if let Some(stdlib_root) = &args.stdlib_root {
        scan::scan_stdlib(&mut catalog, stdlib_root, &config)?;
    }
    scan::scan_project(&mut catalog, &args.path, &config)?;

    let entry = catalog
        .find_by_name(&args.name)
        .ok_or_else(|| GoifaceError::UnknownInterface {
            name: args.name.clone(),
        })?;

    println!("{}", resolve::resolve(entry));
    Ok(())
}
