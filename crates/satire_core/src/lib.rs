//! Satire core: pure reconciliation state machine and view-model helpers.
mod article;
mod connection;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::Article;
pub use connection::ConnectionState;
pub use effect::{Effect, VoteDirection};
pub use msg::Msg;
pub use state::AppState;
pub use update::{update, MIN_PROMPT_LEN};
pub use view_model::{AppViewModel, ArticleRowView, HEADLINE_MAX, PREVIEW_MAX};
