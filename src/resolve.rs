use crate::catalog::InterfaceEntry;

/// Build the reference string the stub generator takes as its interface
/// argument.
///
/// Standard-library entries (and entries that never got an import path,
/// e.g. the project has no readable go.mod) resolve to the
/// package-qualified name. Project-local entries resolve through their
/// import path, which supersedes the raw package name: within a module
/// the generator needs an import-path-qualified reference, since bare
/// package names can collide across directories.
pub fn resolve(entry: &InterfaceEntry) -> String {
    match entry.import_path.as_deref() {
        Some(import_path) if !entry.stdlib && !import_path.is_empty() => {
            format!("{import_path}.{}", entry.interface_name)
        }
        _ => entry.full_name.clone(),
    }
}
