use crate::errors::{GoifaceError, Result};
use crate::receiver;
use crate::strip;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReceiverArgs {
    /// Target type name
    pub type_name: String,

    /// Go source file holding the type's existing methods
    pub file: PathBuf,
}

pub fn run(args: &ReceiverArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let stripped = strip::strip(&text);

    match receiver::infer_receiver(&args.type_name, &stripped) {
        Some(clause) => {
            println!("{clause}");
            Ok(())
        }
        None => Err(GoifaceError::NoReceiver {
            type_name: args.type_name.clone(),
        }),
    }
}
