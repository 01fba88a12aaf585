//! Lexical Grammar
//!
//!     The grammar is an ordered list of (kind, pattern) rules. Order is the disambiguation
//!     policy: at any scan position the first rule whose pattern matches wins, regardless of how
//!     long another rule's match would be. Tablature rules are permissive (a bare `a` is a note,
//!     `a:b` starts with one) so they go last, after every structural rule they could shadow.
//!
//!     Two matchers are derived from the list, both built once:
//!
//!     Combined Matcher:
//!         All rules joined into one alternation with their trailing `$` removed, followed by a
//!         catch-all for the longest run of non-whitespace. Applied to the remainder of a line it
//!         finds the span of the next token. The regex crate uses leftmost-first semantics, so the
//!         alternation preserves rule order.
//!
//!     Classification:
//!         The full-anchored rules are re-applied, in order, to the matched text to recover the
//!         kind and the capture groups. Text no rule claims is `AnyString` with no captures.
//!
//!     Character classes are spelled out in ASCII (`[0-9]`, `[A-Za-z0-9_]`) because the regex
//!     crate's `\d` and `\w` are Unicode-aware and the decoders rely on ASCII digits.

use crate::mml::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Grammar rules as (kind, pattern), tried in declaration order.
pub const GRAMMAR: &[(TokenKind, &str)] = &[
    // Everything from `#` to the end of the line, not just `#` followed by dots
    (TokenKind::Comment, r"^#.*$"),
    (TokenKind::SendArrow, r"^<-$"),
    (TokenKind::LoopTag, r"^[Ll][Oo][Oo][Pp][ \t]*:$"),
    (TokenKind::OpenKey, r"^\{$"),
    (TokenKind::CloseTuple, r"^\}([0-9]+)$"),
    (TokenKind::CloseKey, r"^\}$"),
    (
        TokenKind::AdsrVector,
        r"^[Aa][Dd][Ss][Rr][ \t]*:[ \t]*([0-9]+)[ \t]*->[ \t]*([0-9]+)[ \t]*,[ \t]*([0-9]+)[ \t]*->[ \t]*([0-9]+)[ \t]*,[ \t]*([0-9]+)[ \t]*,[ \t]*([0-9]+)$",
    ),
    (
        TokenKind::MapEntry,
        r"^([A-Za-z0-9_]+)[ \t]*:[ \t]*([A-Za-z0-9_]+)$",
    ),
    (TokenKind::Separator, r"^\|+$"),
    (TokenKind::ConstName, r"^\$([A-Za-z0-9_]+)$"),
    (TokenKind::Assign, r"^:=$"),
    (TokenKind::ChannelId, r"^@([A-Za-z0-9_]+)$"),
    (TokenKind::ChannelSync, r"^-{2,}$"),
    // Tablature goes last so it never shadows the structural rules above
    (TokenKind::Note, r"^([a-gA-G])([#+\-]?)([0-9]*)(\.*)$"),
    (TokenKind::Silence, r"^[Rr]([0-9]*)$"),
    (TokenKind::Octave, r"^[Oo]([0-9])$"),
    (TokenKind::OctaveStep, r"^(<|>)$"),
    (TokenKind::Number, r"^([0-9]+)$"),
];

/// Fallback alternative of the combined matcher.
const CATCH_ALL: &str = r"^\S+";

/// A compiled grammar rule.
#[derive(Debug)]
pub struct GrammarEntry {
    pub kind: TokenKind,
    pub pattern: &'static str,
    regex: Regex,
}

impl GrammarEntry {
    /// Whether the whole of `text` belongs to this rule.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Capture groups of this rule over `text`, empty strings for groups that didn't take part.
    pub fn captures(&self, text: &str) -> Option<Vec<String>> {
        self.regex.captures(text).map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        })
    }
}

static ENTRIES: Lazy<Vec<GrammarEntry>> = Lazy::new(|| {
    GRAMMAR
        .iter()
        .map(|(kind, pattern)| GrammarEntry {
            kind: *kind,
            pattern: *pattern,
            regex: Regex::new(pattern).unwrap(),
        })
        .collect()
});

static COMBINED: Lazy<Regex> = Lazy::new(|| Regex::new(&combined_pattern()).unwrap());

/// The compiled rules, in priority order.
pub fn entries() -> &'static [GrammarEntry] {
    &ENTRIES
}

/// Source of the combined matcher: every rule without its end anchor, then the catch-all.
pub fn combined_pattern() -> String {
    GRAMMAR
        .iter()
        .map(|(_, pattern)| pattern.strip_suffix('$').unwrap_or(*pattern))
        .chain(std::iter::once(CATCH_ALL))
        .map(|body| format!("(?:{})", body))
        .collect::<Vec<_>>()
        .join("|")
}

/// Byte length of the token starting at the beginning of `rest`, if any.
///
/// Always finds one when `rest` starts with a non-whitespace character.
pub fn match_len(rest: &str) -> Option<usize> {
    COMBINED
        .find(rest)
        .map(|m| m.end())
        .filter(|len| *len > 0)
}

/// Recover the kind and captures of a matched span.
pub fn classify(text: &str) -> (TokenKind, Vec<String>) {
    for entry in entries() {
        if let Some(captures) = entry.captures(text) {
            return (entry.kind, captures);
        }
    }
    (TokenKind::AnyString, Vec::new())
}
