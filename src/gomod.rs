//! go.mod module-path handling.
//!
//! Project-local entries are referenced by import path, not bare package
//! name, because package names are not unique across a module's
//! directories. The import path is derived from the module declaration
//! plus the file's directory relative to the project root.

use std::path::Path;

/// Parse the module path from go.mod content: the token following the
/// `module` keyword. Only the first token counts, so a trailing comment
/// on the directive line cannot leak into the path.
pub fn parse_module_path(content: &str) -> Option<String> {
    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("module ") {
            return rest.split_whitespace().next().map(str::to_string);
        }
    }
    None
}

/// Read the module path from `<project_root>/go.mod`.
pub fn read_module_path(project_root: &Path) -> Option<String> {
    let go_mod_path = project_root.join("go.mod");
    let content = std::fs::read_to_string(go_mod_path).ok()?;
    parse_module_path(&content)
}

/// Import path of the package containing `file`: the module path joined
/// with the file's directory relative to `project_root`. A file directly
/// under the root maps to the module path itself. Best effort: a file
/// outside the root falls back to the bare module path.
pub fn import_path_for(module_path: &str, project_root: &Path, file: &Path) -> String {
    let dir = file.parent().unwrap_or(file);
    match dir.strip_prefix(project_root) {
        Ok(rel) if rel.as_os_str().is_empty() => module_path.to_string(),
        Ok(rel) => {
            let rel = rel.to_string_lossy().replace('\\', "/");
            format!("{module_path}/{rel}")
        }
        Err(_) => module_path.to_string(),
    }
}
