use crate::{Article, ConnectionState};

/// Longest headline (prompt excerpt) shown in a list row.
pub const HEADLINE_MAX: usize = 100;
/// Longest body excerpt shown in a list row.
pub const PREVIEW_MAX: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub connection: ConnectionState,
    /// Articles in display order: score descending, ties stable.
    pub articles: Vec<ArticleRowView>,
    pub article_count: usize,
    pub prompt_len: usize,
    pub can_submit: bool,
    pub can_vote: bool,
    pub create_in_flight: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRowView {
    pub id: String,
    pub headline: String,
    pub preview: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    pub vote_pending: bool,
}

pub(crate) fn article_row(article: &Article, vote_pending: bool) -> ArticleRowView {
    ArticleRowView {
        id: article.id.clone(),
        headline: excerpt(&article.prompt, HEADLINE_MAX),
        preview: excerpt(&article.body, PREVIEW_MAX),
        upvotes: article.upvotes,
        downvotes: article.downvotes,
        score: article.score(),
        vote_pending,
    }
}

fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}
