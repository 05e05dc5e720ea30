use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum GoifaceError {
    #[error("Scan root does not exist or is not a directory: {path}")]
    #[diagnostic(code(goiface::bad_root))]
    BadRoot { path: PathBuf },

    #[error("No interface named '{name}' in the catalog")]
    #[diagnostic(code(goiface::unknown_interface))]
    UnknownInterface { name: String },

    #[error("No method with receiver type '{type_name}' found")]
    #[diagnostic(code(goiface::no_receiver))]
    NoReceiver { type_name: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(goiface::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(goiface::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(goiface::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(goiface::glob))]
    Glob(#[from] globset::Error),
}

pub type Result<T> = std::result::Result<T, GoifaceError>;
