// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query language parsing.
//!
//! A query is a list of whitespace-separated clauses:
//!
//! | Syntax      | Meaning                                         |
//! |-------------|-------------------------------------------------|
//! | `term`      | optional: contributes score if present          |
//! | `+term`     | required: documents without it are dropped      |
//! | `-term`     | prohibited: documents with it are dropped       |
//! | `te*m`      | wildcard against the vocabulary, not stemmed    |
//! | `term~N`    | vocabulary terms within N edits                 |
//! | `term^B`    | multiply this clause's contribution by B        |
//!
//! Parsing never fails. Modifiers that do not parse are dropped and the rest
//! of the clause is kept, because a search box must tolerate half-typed input.

/// Largest edit distance a clause may request. Higher values are clamped.
pub const MAX_EDIT_DISTANCE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Optional,
    Required,
    Prohibited,
}

/// One parsed query clause. `term` is raw user text; analysis happens in the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub term: String,
    pub presence: Presence,
    pub edit_distance: u8,
    pub boost: f64,
}

impl Clause {
    pub fn is_wildcard(&self) -> bool {
        self.term.contains('*')
    }
}

pub fn parse_query(query: &str) -> Vec<Clause> {
    query.split_whitespace().filter_map(parse_clause).collect()
}

fn parse_clause(token: &str) -> Option<Clause> {
    let (presence, rest) = if let Some(rest) = token.strip_prefix('+') {
        (Presence::Required, rest)
    } else if let Some(rest) = token.strip_prefix('-') {
        (Presence::Prohibited, rest)
    } else {
        (Presence::Optional, token)
    };

    let split = rest.find(['~', '^']).unwrap_or(rest.len());
    let (term, modifiers) = rest.split_at(split);
    if term.is_empty() {
        return None;
    }

    let mut clause = Clause {
        term: term.to_string(),
        presence,
        edit_distance: 0,
        boost: 1.0,
    };
    apply_modifiers(&mut clause, modifiers);
    Some(clause)
}

/// Walk `~N` / `^B` groups in any order. A bare `~` means distance 1.
fn apply_modifiers(clause: &mut Clause, mut modifiers: &str) {
    while let Some(marker) = modifiers.chars().next() {
        let body = &modifiers[1..];
        let end = body.find(['~', '^']).unwrap_or(body.len());
        let value = &body[..end];
        match marker {
            '~' if value.is_empty() => clause.edit_distance = 1,
            '~' => {
                if let Ok(distance) = value.parse::<u8>() {
                    clause.edit_distance = distance.min(MAX_EDIT_DISTANCE);
                }
            }
            '^' => {
                if let Ok(boost) = value.parse::<f64>() {
                    if boost.is_finite() && boost > 0.0 {
                        clause.boost = boost;
                    }
                }
            }
            _ => {}
        }
        modifiers = &body[end..];
    }
}

/// Glob match where `*` matches any run of characters (including none).
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star, matched)) = backtrack {
            p = star + 1;
            t = matched + 1;
            backtrack = Some((star, matched + 1));
        } else {
            return false;
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

/// Literal prefix before the first `*`, used to narrow vocabulary scans.
pub fn literal_prefix(pattern: &str) -> &str {
    pattern.split('*').next().unwrap_or("")
}
