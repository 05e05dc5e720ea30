pub mod receiver;
pub mod resolve;
pub mod scan;

use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "goiface",
    version,
    about = "Interface discovery and indexing for Go projects"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a project (and optionally a stdlib root) and list discovered interfaces
    Scan(scan::ScanArgs),
    /// Resolve an interface name to the reference string the stub generator expects
    Resolve(resolve::ResolveArgs),
    /// Infer the receiver variable for a type from an existing method
    Receiver(receiver::ReceiverArgs),
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scan(args) => scan::run(&args),
        Commands::Resolve(args) => resolve::run(&args),
        Commands::Receiver(args) => receiver::run(&args),
    }
}
