//! Receiver-name inference.
//!
//! When a type already has methods, newly generated stubs should reuse the
//! existing receiver variable (`func (s *Server) ...`). The document is
//! scanned for a method whose receiver clause mentions the target type;
//! absence is a normal outcome, signalling the caller to prompt for a
//! receiver instead.

use regex::Regex;
use std::sync::LazyLock;

static RECEIVER_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"func\s*\(([^)]*)\)").unwrap());

/// Find an existing receiver clause for `type_name` in `text`, e.g.
/// `f *Foo` from `func (f *Foo) Bar() {}`. Returns `None` when no method
/// on the type exists or the matching line cannot be parsed.
///
/// The caller should pass comment-stripped text; a method mentioned in a
/// comment would otherwise satisfy the search.
pub fn infer_receiver(type_name: &str, text: &str) -> Option<String> {
    let search_key = format!("{type_name})");
    let line = text.lines().find(|line| line.contains(&search_key))?;
    let caps = RECEIVER_CLAUSE.captures(line)?;
    let clause = caps[1].trim();
    if clause.is_empty() {
        None
    } else {
        Some(clause.to_string())
    }
}
