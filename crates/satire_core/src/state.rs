use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::view_model::article_row;
use crate::{Article, AppViewModel, ConnectionState, MIN_PROMPT_LEN};

/// Client-side state: the last known list snapshot, the set of articles with
/// a vote in flight, and the derived connection/input bookkeeping.
///
/// Single-writer discipline: only `update()` mutates this, so the snapshot
/// never needs a lock even while several network calls are pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    articles: Vec<Article>,
    pending_votes: BTreeSet<String>,
    connection: ConnectionState,
    prompt_input: String,
    create_in_flight: bool,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived, sorted view. Consumers never see the raw snapshot.
    pub fn view(&self) -> AppViewModel {
        let articles: Vec<_> = self
            .articles
            .iter()
            .map(|article| article_row(article, self.pending_votes.contains(&article.id)))
            .collect();
        let prompt_len = self.prompt_input.trim().chars().count();
        AppViewModel {
            article_count: articles.len(),
            can_submit: self.connection.is_connected()
                && prompt_len >= MIN_PROMPT_LEN
                && !self.create_in_flight,
            can_vote: self.connection.is_connected(),
            articles,
            prompt_len,
            create_in_flight: self.create_in_flight,
            connection: self.connection.clone(),
            last_error: self.last_error.clone(),
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn prompt(&self) -> &str {
        &self.prompt_input
    }

    pub(crate) fn set_prompt(&mut self, text: String) {
        if self.prompt_input != text {
            self.prompt_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn create_in_flight(&self) -> bool {
        self.create_in_flight
    }

    pub(crate) fn begin_create(&mut self) {
        self.create_in_flight = true;
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn set_connection(&mut self, connection: ConnectionState) {
        if self.connection != connection {
            self.connection = connection;
            self.mark_dirty();
        }
    }

    pub(crate) fn has_article(&self, id: &str) -> bool {
        self.articles.iter().any(|article| article.id == id)
    }

    pub(crate) fn vote_pending(&self, id: &str) -> bool {
        self.pending_votes.contains(id)
    }

    pub(crate) fn mark_vote_pending(&mut self, id: &str) {
        self.pending_votes.insert(id.to_string());
        self.mark_dirty();
    }

    pub(crate) fn clear_vote_pending(&mut self, id: &str) {
        self.pending_votes.remove(id);
        self.mark_dirty();
    }

    /// Applies a full-refresh snapshot.
    ///
    /// The incoming list replaces the snapshot wholesale, except that an
    /// article with a vote in flight keeps its last known value: a refresh
    /// that raced the vote must not visibly revert the tally. Pending
    /// entries the refresh no longer reports are retained, and duplicate
    /// incoming ids are dropped so an id appears at most once.
    pub(crate) fn apply_refresh(&mut self, incoming: Vec<Article>) {
        let previous = std::mem::take(&mut self.articles);
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut merged: Vec<Article> = Vec::with_capacity(incoming.len());
        for article in incoming {
            if !seen.insert(article.id.clone()) {
                continue;
            }
            if self.pending_votes.contains(&article.id) {
                if let Some(kept) = previous.iter().find(|prev| prev.id == article.id) {
                    merged.push(kept.clone());
                    continue;
                }
            }
            merged.push(article);
        }
        for kept in previous {
            if self.pending_votes.contains(&kept.id) && !seen.contains(&kept.id) {
                seen.insert(kept.id.clone());
                merged.push(kept);
            }
        }
        self.articles = merged;
        self.resort();
        self.last_error = None;
        self.mark_dirty();
    }

    /// Applies a single vote result: replace by id, or append when a
    /// concurrent refresh evicted the entry. Clears the pending mark.
    pub(crate) fn apply_vote(&mut self, updated: Article) {
        self.pending_votes.remove(&updated.id);
        match self
            .articles
            .iter_mut()
            .find(|article| article.id == updated.id)
        {
            Some(slot) => *slot = updated,
            None => self.articles.push(updated),
        }
        self.resort();
        self.mark_dirty();
    }

    /// Applies a successful creation: the server-echoed article joins the
    /// snapshot and the input box is cleared for the next prompt.
    pub(crate) fn apply_created(&mut self, created: Article) {
        self.create_in_flight = false;
        self.prompt_input.clear();
        match self
            .articles
            .iter_mut()
            .find(|article| article.id == created.id)
        {
            Some(slot) => *slot = created,
            None => self.articles.push(created),
        }
        self.resort();
        self.mark_dirty();
    }

    pub(crate) fn fail_create(&mut self, message: String) {
        self.create_in_flight = false;
        self.set_error(message);
    }

    // Stable, so equal-score articles keep their relative order across calls.
    fn resort(&mut self) {
        self.articles.sort_by_key(|article| Reverse(article.score()));
    }
}
