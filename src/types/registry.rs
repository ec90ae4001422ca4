use std::collections::BTreeMap;
use std::sync::Arc;

use super::context::MediaContext;
use super::query::MediaQuery;
use crate::evaluate::Evaluator;

/// Shared, reference-counted queries keyed by their condition text.
///
/// Each subscriber [`acquire`](Self::acquire)s the text it cares about and
/// [`release`](Self::release)s it when done; the parsed query lives exactly as
/// long as at least one subscriber holds it. [`refresh`](Self::refresh)
/// re-evaluates every live query against a new snapshot and reports which
/// ones flipped.
#[derive(Debug, Default)]
pub struct QueryRegistry {
    entries: BTreeMap<String, Entry>,
    evaluator: Evaluator,
}

#[derive(Debug)]
struct Entry {
    query: Arc<MediaQuery>,
    refs: usize,
    last_match: Option<bool>,
}

/// A query whose match state changed during [`QueryRegistry::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchChange {
    pub query: String,
    pub matches: bool,
}

impl QueryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            entries: BTreeMap::new(),
            evaluator,
        }
    }

    /// Take a reference to the query for `text`, parsing it on first use.
    pub fn acquire(&mut self, text: &str) -> Arc<MediaQuery> {
        let entry = self.entries.entry(text.to_owned()).or_insert_with(|| {
            tracing::debug!(query = text, "registering media query");
            Entry {
                query: Arc::new(MediaQuery::new(text)),
                refs: 0,
                last_match: None,
            }
        });
        entry.refs += 1;
        Arc::clone(&entry.query)
    }

    /// Drop one reference to `text`. Returns `true` if that was the last one
    /// and the query was removed. Unknown text is ignored.
    pub fn release(&mut self, text: &str) -> bool {
        let Some(entry) = self.entries.get_mut(text) else {
            return false;
        };
        entry.refs -= 1;
        if entry.refs > 0 {
            return false;
        }
        self.entries.remove(text);
        tracing::debug!(query = text, "dropped media query");
        true
    }

    /// Evaluate every registered query against `ctx`.
    ///
    /// Returns the queries whose result differs from the previous refresh, in
    /// key order. Queries not yet evaluated are always reported.
    pub fn refresh(&mut self, ctx: &MediaContext) -> Vec<MatchChange> {
        let mut changes = Vec::new();
        for (text, entry) in &mut self.entries {
            let matches = entry.query.matches_with(&self.evaluator, ctx);
            if entry.last_match != Some(matches) {
                entry.last_match = Some(matches);
                changes.push(MatchChange {
                    query: text.clone(),
                    matches,
                });
            }
        }
        tracing::trace!(
            queries = self.entries.len(),
            changed = changes.len(),
            "refreshed media queries"
        );
        changes
    }

    /// Result of the last [`refresh`](Self::refresh) for `text`, if any.
    #[must_use]
    pub fn last_match(&self, text: &str) -> Option<bool> {
        self.entries.get(text).and_then(|e| e.last_match)
    }

    #[must_use]
    pub fn ref_count(&self, text: &str) -> usize {
        self.entries.get(text).map_or(0, |e| e.refs)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
