//! The filter pass: recompute visibility for every post from one query.

use crate::matcher::contains_ignore_case;
use crate::post::Post;
#[cfg(feature = "tracing")]
use web_time::Instant;

/// Run one filter pass over `posts`.
///
/// The query is uppercased once, then every post's `visible` flag is set to
/// whether its title contains the query as a contiguous case-insensitive
/// substring. Plain containment: no word boundaries, no regex, no trimming of
/// the query. Each flag is written exactly once per call, posts are processed
/// independently in sequence order, and the pass is idempotent.
pub fn apply(query: &str, posts: &mut [Post]) {
    #[cfg(feature = "tracing")]
    let apply_start = Instant::now();
    #[cfg(feature = "tracing")]
    let apply_span = tracing::debug_span!(
        "filter.apply",
        total_items = posts.len(),
        visible_items = tracing::field::Empty,
        filter_active = !query.trim().is_empty(),
        apply_duration_us = tracing::field::Empty
    );
    #[cfg(feature = "tracing")]
    let _apply_guard = apply_span.enter();

    let query_upper = query.to_uppercase();
    #[cfg(feature = "tracing")]
    let mut matched = 0usize;
    for post in posts.iter_mut() {
        post.visible = contains_ignore_case(post.title(), &query_upper);
        #[cfg(feature = "tracing")]
        if post.visible {
            matched += 1;
        }
    }

    #[cfg(feature = "tracing")]
    {
        let elapsed_us = apply_start.elapsed().as_micros() as u64;
        apply_span.record("visible_items", matched);
        apply_span.record("apply_duration_us", elapsed_us);
        tracing::debug!(
            message = "filter.metrics",
            total_items = posts.len(),
            visible_items = matched,
            filter_active = !query.trim().is_empty(),
            apply_duration_us = elapsed_us
        );
    }
}

/// Indices of the posts a pass with `query` would leave visible, in sequence
/// order. Read-only companion to [`apply`] for callers that want to enumerate
/// matches without touching the flags.
#[must_use]
pub fn visible_indices(query: &str, posts: &[Post]) -> Vec<usize> {
    let query_upper = query.to_uppercase();
    posts
        .iter()
        .enumerate()
        .filter_map(|(idx, post)| contains_ignore_case(post.title(), &query_upper).then_some(idx))
        .collect()
}

/// Owned current query with incremental editing.
///
/// Models the keystroke stream that drives a live search box: printable chars
/// append, backspace pops, escape clears. The state holds nothing besides the
/// query; every [`FilterState::apply_to`] fully recomputes all flags from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
}

impl FilterState {
    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query wholesale.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        #[cfg(feature = "tracing")]
        self.log_query_change("set");
    }

    /// Append one typed character.
    ///
    /// Any char is accepted, control characters included; deciding which
    /// keystrokes reach the query (and which mean backspace, escape, etc.)
    /// is the event layer's job.
    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
        #[cfg(feature = "tracing")]
        self.log_query_change("push");
    }

    /// Remove the last character. Returns false when the query was already
    /// empty and nothing changed.
    pub fn pop(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        self.log_query_change("pop");
        true
    }

    /// Clear the query. Returns false when it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        #[cfg(feature = "tracing")]
        self.log_query_change("clear");
        true
    }

    /// Whether a non-whitespace query is present. Display signal only; the
    /// pass itself matches the raw query, whitespace included.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Run the filter pass with the current query.
    pub fn apply_to(&self, posts: &mut [Post]) {
        apply(&self.query, posts);
    }

    /// Capture the query for state saving.
    #[must_use]
    pub fn save_state(&self) -> FilterPersistState {
        FilterPersistState {
            query: self.query.clone(),
        }
    }

    /// Restore a previously saved query.
    pub fn restore_state(&mut self, state: FilterPersistState) {
        self.query = state.query;
    }

    #[cfg(feature = "tracing")]
    fn log_query_change(&self, action: &str) {
        tracing::debug!(
            message = "filter.query",
            action,
            query_len = self.query.len(),
            filter_active = self.is_active()
        );
    }
}

/// Persistable state for a [`FilterState`].
///
/// Contains the user-facing state that should survive sessions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FilterPersistState {
    /// Query text at save time.
    pub query: String,
}
