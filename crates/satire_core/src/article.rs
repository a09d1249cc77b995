use serde::{Deserialize, Serialize};

/// One generated article as served by the story service.
///
/// Identity is `id`; every other field is owned by the server and only ever
/// replaced wholesale by a server response, never edited locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    /// The user-submitted prompt the article was generated from.
    pub prompt: String,
    /// Generated text. The service names this field `story` on the wire.
    #[serde(rename = "story")]
    pub body: String,
    pub upvotes: u64,
    pub downvotes: u64,
}

impl Article {
    /// Net vote score used for ranking.
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}
