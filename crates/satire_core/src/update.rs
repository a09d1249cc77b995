use crate::{AppState, Effect, Msg};

/// Shortest prompt the service will generate a sensible article from.
/// Enforced locally; shorter prompts never reach the network.
pub const MIN_PROMPT_LEN: usize = 10;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PromptChanged(text) => {
            state.set_prompt(text);
            Vec::new()
        }
        Msg::PromptSubmitted => {
            let prompt = state.prompt().trim().to_string();
            if prompt.chars().count() < MIN_PROMPT_LEN {
                state.set_error(format!(
                    "prompt must be at least {MIN_PROMPT_LEN} characters"
                ));
                Vec::new()
            } else if state.create_in_flight() {
                // One submission at a time; the button is disabled in the
                // view, this guards paths that bypass it.
                Vec::new()
            } else {
                state.begin_create();
                vec![Effect::CreateArticle { prompt }]
            }
        }
        Msg::RefreshClicked | Msg::PollElapsed => vec![Effect::FetchList],
        Msg::ProbeElapsed => vec![Effect::ProbeHealth],
        Msg::RefreshArrived(articles) => {
            state.apply_refresh(articles);
            Vec::new()
        }
        Msg::RefreshFailed(message) => {
            // The last successfully loaded list stays visible.
            state.set_error(message);
            Vec::new()
        }
        Msg::VoteClicked { id, direction } => {
            if !state.has_article(&id) || state.vote_pending(&id) {
                Vec::new()
            } else {
                state.mark_vote_pending(&id);
                vec![Effect::CastVote { id, direction }]
            }
        }
        Msg::VoteArrived { article, .. } => {
            state.apply_vote(article);
            Vec::new()
        }
        Msg::VoteFailed { id, message } => {
            state.clear_vote_pending(&id);
            state.set_error(message);
            Vec::new()
        }
        Msg::ArticleCreated(article) => {
            state.apply_created(article);
            // Generation is asynchronous server-side; follow up with a fetch
            // so the list reflects whatever else landed meanwhile.
            vec![Effect::FetchList]
        }
        Msg::CreateFailed(message) => {
            state.fail_create(message);
            Vec::new()
        }
        Msg::ProbeResolved(connection) => {
            state.set_connection(connection);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
