// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and BM25 ranking.
//!
//! # INVARIANTS
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by doc_id
//! 2. **DOC_FREQ_CORRECT**: doc_freq equals the number of postings
//! 3. **NON_EMPTY**: every vocabulary term has at least one posting
//! 4. **REF_ALIGNED**: `refs`, `doc_lengths` are indexed by the same doc_id

use super::levenshtein::levenshtein_within;
use super::pipeline::Analyzer;
use super::query::{literal_prefix, parse_query, wildcard_match, Clause, Presence};
use super::{EngineOptions, TextIndex};
use crate::types::{Document, Hit};
use crate::utils::normalize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Contribution of a vocabulary term reached by expansion rather than exact match.
pub const EXPANDED_TERM_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: usize,
    pub term_freq: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingList {
    pub postings: Vec<Posting>,
    pub doc_freq: usize,
}

/// A built, queryable index over one catalog.
#[derive(Debug)]
pub struct InvertedIndex {
    refs: Vec<String>,
    doc_lengths: Vec<usize>,
    avg_doc_len: f64,
    /// Ordered so wildcard clauses can range-scan by literal prefix.
    terms: BTreeMap<String, PostingList>,
    analyzer: Analyzer,
    k1: f64,
    b: f64,
}

/// A query clause after vocabulary lookup.
struct ResolvedClause {
    presence: Presence,
    boost: f64,
    /// (vocabulary term, weight)
    matches: Vec<(String, f64)>,
}

impl InvertedIndex {
    pub fn build(docs: &[Document], options: &EngineOptions) -> Self {
        let analyzer = Analyzer::new(options);
        let mut refs = Vec::with_capacity(docs.len());
        let mut doc_lengths = Vec::with_capacity(docs.len());
        let mut terms: BTreeMap<String, PostingList> = BTreeMap::new();

        for (doc_id, doc) in docs.iter().enumerate() {
            let tokens = analyzer.analyze(&doc.content);
            doc_lengths.push(tokens.len());
            refs.push(doc.title.clone());

            let mut freqs: HashMap<String, u32> = HashMap::new();
            for token in tokens {
                *freqs.entry(token).or_insert(0) += 1;
            }

            // Docs are visited in order, so pushing keeps each list sorted
            for (term, term_freq) in freqs {
                let list = terms.entry(term).or_insert_with(|| PostingList {
                    postings: Vec::new(),
                    doc_freq: 0,
                });
                list.postings.push(Posting { doc_id, term_freq });
                list.doc_freq += 1;
            }
        }

        let total: usize = doc_lengths.iter().sum();
        let avg_doc_len = if docs.is_empty() {
            0.0
        } else {
            total as f64 / docs.len() as f64
        };

        Self {
            refs,
            doc_lengths,
            avg_doc_len,
            terms,
            analyzer,
            k1: options.k1,
            b: options.b,
        }
    }

    pub fn doc_count(&self) -> usize {
        self.refs.len()
    }

    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Inverse document frequency, always positive.
    fn idf(&self, doc_freq: usize) -> f64 {
        let n = self.refs.len() as f64;
        let df = doc_freq as f64;
        (1.0 + ((n - df + 0.5) / (df + 0.5)).abs()).ln()
    }

    fn bm25(&self, posting: &Posting, idf: f64) -> f64 {
        let tf = f64::from(posting.term_freq);
        let length_ratio = if self.avg_doc_len > 0.0 {
            self.doc_lengths[posting.doc_id] as f64 / self.avg_doc_len
        } else {
            1.0
        };
        let norm = self.k1 * (1.0 - self.b + self.b * length_ratio);
        idf * (tf * (self.k1 + 1.0)) / (tf + norm)
    }

    /// Turn parsed clauses into vocabulary matches.
    ///
    /// A plain clause that analyzes to several tokens (`gtfs-file`) becomes one
    /// resolved clause per token. A clause whose tokens are all stop words
    /// disappears entirely.
    fn resolve(&self, clauses: Vec<Clause>) -> Vec<ResolvedClause> {
        let mut resolved = Vec::new();
        for clause in clauses {
            if clause.is_wildcard() {
                if let Some(matches) = self.resolve_wildcard(&clause.term) {
                    resolved.push(ResolvedClause {
                        presence: clause.presence,
                        boost: clause.boost,
                        matches,
                    });
                }
                continue;
            }
            for token in self.analyzer.analyze(&clause.term) {
                let matches = if clause.edit_distance > 0 {
                    self.expand_fuzzy(&token, usize::from(clause.edit_distance))
                } else if self.terms.contains_key(&token) {
                    vec![(token, 1.0)]
                } else {
                    Vec::new()
                };
                resolved.push(ResolvedClause {
                    presence: clause.presence,
                    boost: clause.boost,
                    matches,
                });
            }
        }
        resolved
    }

    /// Expand a wildcard against the vocabulary.
    ///
    /// The vocabulary holds stems, so when the pattern is one word with `*`
    /// only at its ends, that word is analyzed too and its stem expanded with
    /// the same wildcards: `reading*` also reaches `read`. A word that
    /// analyzes to nothing (`the*`) drops the clause.
    fn resolve_wildcard(&self, term: &str) -> Option<Vec<(String, f64)>> {
        let pattern = normalize(term);
        let word = pattern.trim_matches('*');
        let mut matches: BTreeMap<String, f64> =
            self.expand_wildcard(&pattern).into_iter().collect();

        if !word.is_empty() && !word.contains('*') {
            let stems = self.analyzer.analyze(word);
            match stems.as_slice() {
                [] => return None,
                [stem] if stem != word => {
                    let lead = if pattern.starts_with('*') { "*" } else { "" };
                    let trail = if pattern.ends_with('*') { "*" } else { "" };
                    let stemmed = format!("{}{}{}", lead, stem, trail);
                    for (term, _) in self.expand_wildcard(&stemmed) {
                        let weight = expansion_weight(&term, stem);
                        let entry = matches.entry(term).or_insert(weight);
                        *entry = entry.max(weight);
                    }
                }
                _ => {}
            }
        }
        Some(matches.into_iter().collect())
    }

    fn expand_wildcard(&self, pattern: &str) -> Vec<(String, f64)> {
        let prefix = literal_prefix(pattern);
        self.terms
            .range(prefix.to_string()..)
            .map(|(term, _)| term)
            .take_while(|term| term.starts_with(prefix))
            .filter(|term| wildcard_match(pattern, term))
            .map(|term| (term.clone(), expansion_weight(term, pattern)))
            .collect()
    }

    fn expand_fuzzy(&self, token: &str, distance: usize) -> Vec<(String, f64)> {
        self.terms
            .keys()
            .filter(|term| levenshtein_within(token, term, distance))
            .map(|term| (term.clone(), expansion_weight(term, token)))
            .collect()
    }
}

fn expansion_weight(term: &str, requested: &str) -> f64 {
    if term == requested {
        1.0
    } else {
        EXPANDED_TERM_WEIGHT
    }
}

impl TextIndex for InvertedIndex {
    fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    fn search(&self, query: &str) -> Vec<Hit> {
        let clauses = self.resolve(parse_query(query));
        if clauses.is_empty() {
            return Vec::new();
        }

        let num_docs = self.refs.len();
        let mut scores = vec![0.0_f64; num_docs];
        let mut matched = vec![false; num_docs];
        let mut required: Option<HashSet<usize>> = None;
        let mut prohibited: HashSet<usize> = HashSet::new();

        for clause in &clauses {
            let mut clause_docs: HashSet<usize> = HashSet::new();
            for (term, weight) in &clause.matches {
                let Some(list) = self.terms.get(term) else {
                    continue;
                };
                let idf = self.idf(list.doc_freq);
                for posting in &list.postings {
                    clause_docs.insert(posting.doc_id);
                    if clause.presence != Presence::Prohibited {
                        scores[posting.doc_id] += clause.boost * weight * self.bm25(posting, idf);
                        matched[posting.doc_id] = true;
                    }
                }
            }
            match clause.presence {
                Presence::Optional => {}
                Presence::Required => {
                    required = Some(match required {
                        Some(acc) => acc.intersection(&clause_docs).copied().collect(),
                        None => clause_docs,
                    });
                }
                Presence::Prohibited => prohibited.extend(clause_docs),
            }
        }

        let mut ranked: Vec<usize> = (0..num_docs)
            .filter(|&doc_id| matched[doc_id])
            .filter(|doc_id| required.as_ref().is_none_or(|set| set.contains(doc_id)))
            .filter(|doc_id| !prohibited.contains(doc_id))
            .collect();

        // Stable sort keeps catalog order among equal scores
        ranked.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
            .into_iter()
            .map(|doc_id| Hit {
                reference: self.refs[doc_id].clone(),
                score: scores[doc_id],
            })
            .collect()
    }
}
