//! Interface discovery and indexing for Go projects.
//!
//! The engine walks one or more source roots, lexically extracts interface
//! declarations from comment-stripped Go source, and maintains a
//! two-partition [`catalog::Catalog`] (project-local and standard-library
//! entries). A chosen entry is then resolved to the import-path-qualified
//! reference string an external stub generator expects; see
//! [`resolve::resolve`]. Receiver-variable inference for a target type
//! lives in [`receiver`].
//!
//! This is not a compiler front-end: no AST, no type checking, no import
//! resolution. Matching is regular-expression based over stripped text,
//! with documented heuristics for the cases that cannot be decided
//! lexically.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod gomod;
pub mod output;
pub mod receiver;
pub mod resolve;
pub mod scan;
pub mod strip;
pub mod walk;
