// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance for `term~N` query clauses.
//!
//! Fuzzy clauses are matched by scanning the vocabulary, so the check has to be
//! cheap to reject. `|len(a) - len(b)|` is a lower bound on edit distance, and a
//! DP row whose minimum already exceeds the bound can never come back down.

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Character counts, not byte lengths
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b_len] <= max
}
