//! Lexical interface extraction.
//!
//! Declarations are located by pattern matching over comment-stripped
//! source text, not by parsing. This is deliberate: the engine only needs
//! interface names and their declaring package, and a full Go front-end is
//! out of scope. Matching is best-effort; a malformed declaration yields
//! no entry and no error.

use crate::catalog::{Catalog, InterfaceEntry, BUILTIN_PACKAGE};
use crate::config::ExtractConfig;
use crate::strip;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static INTERFACE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"type\s+(\w+)\s+interface\s*\{").unwrap());

static PACKAGE_DECL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"package\s+(\w+)").unwrap());

static TYPE_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*type\s+(\w+)\s+(\S+)").unwrap());

/// Extract the declaring package name from stripped source text: the first
/// line starting with the `package` keyword wins. Empty string if absent.
pub fn extract_package_name(text: &str) -> String {
    for line in text.lines() {
        if line.starts_with("package") {
            return match PACKAGE_DECL.captures(line) {
                Some(caps) => caps[1].to_string(),
                None => String::new(),
            };
        }
    }
    String::new()
}

/// Find every interface declaration in stripped source text and return the
/// declared identifiers, in source order.
///
/// With `balanced_braces` the body is skipped with a depth counter, so an
/// embedded `interface { ... }` inside the body does not end the match
/// early. Without it, the body ends at the first `}`, matching the flat
/// regex the heuristic started from. Either way a declaration whose body
/// never closes is dropped.
pub fn extract_interfaces(text: &str, config: &ExtractConfig) -> Vec<String> {
    let mut names = Vec::new();
    let mut offset = 0;

    while let Some(caps) = INTERFACE_HEADER.captures(&text[offset..]) {
        let whole = caps.get(0).unwrap();
        let body_start = offset + whole.end();

        let body_end = if config.balanced_braces {
            scan_balanced(&text[body_start..]).map(|i| body_start + i)
        } else {
            text[body_start..].find('}').map(|i| body_start + i)
        };

        match body_end {
            Some(end) => {
                names.push(caps[1].to_string());
                offset = end + 1;
            }
            None => break,
        }
    }

    names
}

/// Index of the `}` closing a body whose opening `{` was just consumed.
fn scan_balanced(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Go exports an identifier by capitalizing it. The builtin pseudo-package
/// is exempt: `error` is usable everywhere despite being lowercase.
fn is_retainable(name: &str, package_name: &str) -> bool {
    if package_name == BUILTIN_PACKAGE {
        return !name.is_empty();
    }
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Read `path`, extract its interface declarations, and append the
/// retained entries to the catalog partition selected by `stdlib`.
///
/// Returns the number of entries appended, or `None` when the file cannot
/// be read or is empty. That is not an error: per-file read failures must
/// not abort the scan of sibling files, so they are logged and reported
/// as "nothing to extract".
pub fn extract_file(
    path: &Path,
    stdlib: bool,
    import_path: Option<&str>,
    config: &ExtractConfig,
    catalog: &mut Catalog,
) -> Option<usize> {
    let raw = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!("could not read {}: {err}", path.display());
            return None;
        }
    };
    if raw.is_empty() {
        return None;
    }

    let text = strip::strip(&raw);
    let package_name = extract_package_name(&text);

    let mut appended = 0;
    for name in extract_interfaces(&text, config) {
        if !is_retainable(&name, &package_name) {
            tracing::debug!("dropping unexported interface {package_name}.{name}");
            continue;
        }
        let entry = InterfaceEntry::new(
            package_name.clone(),
            name,
            path,
            stdlib,
            if stdlib {
                None
            } else {
                import_path.map(str::to_string)
            },
        );
        catalog.append(entry);
        appended += 1;
    }

    Some(appended)
}

/// True iff `line` is the head of a non-interface type declaration, e.g.
/// `type Foo struct {` or `type Meters int`. The trigger layer uses this
/// to decide whether offering "implement interface" makes sense at the
/// cursor line at all.
pub fn is_at_declaration_start(line: &str) -> bool {
    match TYPE_DECL.captures(line) {
        Some(caps) => !caps[2].starts_with("interface"),
        None => false,
    }
}
