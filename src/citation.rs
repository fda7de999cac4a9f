//! Heuristic cleanup of citation-author strings.
//!
//! Bibliography blocks are scraped from heterogeneous formats, so author
//! fields arrive malformed in recurring ways: trailing "et al.", LaTeX
//! braces and math, mis-parsed title fields, "Last, First" ordering. The
//! normalizer is an ordered table of named rules; each rule either rewrites
//! the string or drops the entry. It is a best-effort cleanup, not a name
//! parser: bad names let through are acceptable, merging name variants is
//! not attempted.

use crate::constants::citation::{
    BRACE_MAX_PARTS, ET_AL_MARKER, MIN_AUTHOR_LEN, TITLE_MARKER, TOKEN_SEPARATOR,
};
use crate::data::{Citation, RawCitation};
use crate::types::CanonicalToken;

/// Result of applying one rule to an author string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Keep processing with this (possibly rewritten) string.
    Keep(String),
    /// Drop the entry entirely; no placeholder is emitted.
    Skip,
}

/// One named rewrite rule in the normalization table.
pub struct Rule {
    /// Stable rule name used in tests and diagnostics.
    pub name: &'static str,
    /// Rule body; receives the output of the previous rule.
    pub apply: fn(&str) -> RuleOutcome,
}

/// The ordered rule table. Order is part of the contract: each rule sees the
/// output of the one before it.
pub const RULES: &[Rule] = &[
    Rule {
        name: "trim_and_drop_short",
        apply: trim_and_drop_short,
    },
    Rule {
        name: "truncate_et_al",
        apply: truncate_et_al,
    },
    Rule {
        name: "drop_title_fragment",
        apply: drop_title_fragment,
    },
    Rule {
        name: "drop_leading_comma",
        apply: drop_leading_comma,
    },
    Rule {
        name: "truncate_brace",
        apply: truncate_brace,
    },
    Rule {
        name: "truncate_math",
        apply: truncate_math,
    },
    Rule {
        name: "reorder_last_first",
        apply: reorder_last_first,
    },
    Rule {
        name: "truncate_colon",
        apply: truncate_colon,
    },
];

fn trim_and_drop_short(input: &str) -> RuleOutcome {
    let trimmed = input.trim();
    if trimmed.chars().count() < MIN_AUTHOR_LEN {
        return RuleOutcome::Skip;
    }
    RuleOutcome::Keep(trimmed.to_string())
}

fn truncate_et_al(input: &str) -> RuleOutcome {
    match input.find(ET_AL_MARKER) {
        Some(pos) => RuleOutcome::Keep(input[..pos].to_string()),
        None => RuleOutcome::Keep(input.to_string()),
    }
}

/// A literal "title" anywhere means a bibliography title field leaked into
/// the author list; there is no valid author to recover.
fn drop_title_fragment(input: &str) -> RuleOutcome {
    if input.contains(TITLE_MARKER) {
        return RuleOutcome::Skip;
    }
    RuleOutcome::Keep(input.to_string())
}

fn drop_leading_comma(input: &str) -> RuleOutcome {
    if input.starts_with(',') {
        return RuleOutcome::Skip;
    }
    RuleOutcome::Keep(input.to_string())
}

/// Long brace-bearing strings are LaTeX debris; keep only the part before
/// the brace. Short ones (e.g. `{van der Berg}`) are left for later rules.
fn truncate_brace(input: &str) -> RuleOutcome {
    if let Some(pos) = input.find('{') {
        if input.split_whitespace().count() > BRACE_MAX_PARTS {
            return RuleOutcome::Keep(input[..pos].to_string());
        }
    }
    RuleOutcome::Keep(input.to_string())
}

fn truncate_math(input: &str) -> RuleOutcome {
    match input.find('$') {
        Some(pos) => RuleOutcome::Keep(input[..pos].to_string()),
        None => RuleOutcome::Keep(input.to_string()),
    }
}

/// Rewrite "Last, First" as "First Last". Assumes Western two-part names;
/// multi-part names are handled best-effort by splitting at the first comma.
fn reorder_last_first(input: &str) -> RuleOutcome {
    let Some((last, first)) = input.split_once(',') else {
        return RuleOutcome::Keep(input.to_string());
    };
    let last = last.trim();
    let first = first.trim();
    let rewritten = match (last.is_empty(), first.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => last.to_string(),
        (true, false) => first.to_string(),
        (true, true) => String::new(),
    };
    RuleOutcome::Keep(rewritten)
}

fn truncate_colon(input: &str) -> RuleOutcome {
    match input.find(':') {
        Some(pos) => RuleOutcome::Keep(input[..pos].to_string()),
        None => RuleOutcome::Keep(input.to_string()),
    }
}

/// Run one raw citation-author string through the rule table.
///
/// Returns the canonical `#`-joined token, or `None` when a rule dropped the
/// entry or nothing survived truncation.
pub fn normalize_citation_author(raw: &str) -> Option<CanonicalToken> {
    let mut current = raw.to_string();
    for rule in RULES {
        match (rule.apply)(&current) {
            RuleOutcome::Keep(next) => current = next,
            RuleOutcome::Skip => return None,
        }
    }
    let token = current
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR);
    if token.is_empty() {
        return None;
    }
    Some(token)
}

/// Normalize every author of a raw citation.
///
/// A citation whose authors all failed normalization still yields a
/// `Citation` with an empty token list; citations are never dropped at this
/// level.
pub fn normalize_citation(raw: &RawCitation) -> Citation {
    Citation {
        authors: raw
            .author
            .iter()
            .filter_map(|author| normalize_citation_author(author))
            .collect(),
    }
}
