use crate::{Article, ConnectionState, VoteDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the prompt input box.
    PromptChanged(String),
    /// User submitted the current prompt for generation.
    PromptSubmitted,
    /// User asked for an immediate list refresh.
    RefreshClicked,
    /// The periodic polling timer elapsed.
    PollElapsed,
    /// The health-probe timer elapsed.
    ProbeElapsed,
    /// A full list fetch completed.
    RefreshArrived(Vec<Article>),
    RefreshFailed(String),
    /// User pressed a vote button on an article.
    VoteClicked {
        id: String,
        direction: VoteDirection,
    },
    /// A vote call resolved with the server-computed article.
    VoteArrived { id: String, article: Article },
    VoteFailed { id: String, message: String },
    /// Creation resolved; the server echoes the stored article.
    ArticleCreated(Article),
    CreateFailed(String),
    /// The health probe resolved.
    ProbeResolved(ConnectionState),
    /// Fallback for placeholder wiring.
    NoOp,
}
