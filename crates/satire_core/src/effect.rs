#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full article list from the service.
    FetchList,
    /// Submit a prompt for article generation.
    CreateArticle { prompt: String },
    /// Cast a vote on a previously observed article.
    CastVote {
        id: String,
        direction: VoteDirection,
    },
    /// Run the lightweight health probe.
    ProbeHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}
