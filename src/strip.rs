//! Comment removal for Go source text.
//!
//! The extractor matches interface declarations lexically, so comments must
//! be blanked out first or a commented-out declaration would produce a
//! catalog entry. Comment bytes are replaced with spaces rather than
//! removed: every line break in the input survives in the output, keeping
//! line-number-based positioning valid for downstream consumers.
//!
//! String literals (`"…"` with escapes), rune literals (`'…'`) and raw
//! strings (`` `…` ``) are honored, so `//` inside a literal is not treated
//! as a comment. This is a lexical scanner, not a parser; Go's grammar is
//! regular enough at this level for the heuristic to hold.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    StringLit,
    RawStringLit,
    RuneLit,
}

/// Strip line and block comments from `text`, preserving line breaks.
pub fn strip(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut state = State::Code;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match state {
            State::Code => match c {
                '/' if next == Some('/') => {
                    state = State::LineComment;
                    out.push_str("  ");
                    i += 2;
                    continue;
                }
                '/' if next == Some('*') => {
                    state = State::BlockComment;
                    out.push_str("  ");
                    i += 2;
                    continue;
                }
                '"' => {
                    state = State::StringLit;
                    out.push(c);
                }
                '`' => {
                    state = State::RawStringLit;
                    out.push(c);
                }
                '\'' => {
                    state = State::RuneLit;
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    state = State::Code;
                    out.push_str("  ");
                    i += 2;
                    continue;
                }
                if c == '\n' {
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::StringLit => match c {
                '\\' if next.is_some() => {
                    out.push(c);
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                '"' | '\n' => {
                    // An unterminated literal ends at the line break.
                    state = State::Code;
                    out.push(c);
                }
                _ => out.push(c),
            },
            State::RawStringLit => {
                if c == '`' {
                    state = State::Code;
                }
                out.push(c);
            }
            State::RuneLit => match c {
                '\\' if next.is_some() => {
                    out.push(c);
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                '\'' | '\n' => {
                    state = State::Code;
                    out.push(c);
                }
                _ => out.push(c),
            },
        }
        i += 1;
    }

    out
}
