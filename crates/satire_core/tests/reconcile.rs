use pretty_assertions::assert_eq;
use satire_core::{update, AppState, Article, Effect, Msg, VoteDirection};

fn article(id: &str, upvotes: u64, downvotes: u64) -> Article {
    Article {
        id: id.to_string(),
        prompt: format!("prompt that produced {id}"),
        body: format!("generated body for {id}"),
        upvotes,
        downvotes,
    }
}

fn refreshed(state: AppState, articles: Vec<Article>) -> AppState {
    let (state, _) = update(state, Msg::RefreshArrived(articles));
    state
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state.view().articles.iter().map(|row| row.id.clone()).collect()
}

#[test]
fn refresh_replaces_snapshot_and_sorts_by_score() {
    let state = AppState::new();
    let state = refreshed(
        state,
        vec![article("a", 1, 0), article("b", 5, 1), article("c", 0, 2)],
    );

    assert_eq!(visible_ids(&state), vec!["b", "a", "c"]);

    let state = refreshed(state, vec![article("d", 3, 0)]);
    assert_eq!(visible_ids(&state), vec!["d"]);
}

#[test]
fn equal_scores_keep_server_order_across_identical_refreshes() {
    let state = AppState::new();
    let snapshot = vec![article("a", 1, 0), article("b", 1, 0), article("c", 2, 0)];

    let state = refreshed(state, snapshot.clone());
    assert_eq!(visible_ids(&state), vec!["c", "a", "b"]);

    // Same server state again: identical, stably ordered sequence.
    let state = refreshed(state, snapshot);
    assert_eq!(visible_ids(&state), vec!["c", "a", "b"]);
}

#[test]
fn pending_vote_wins_over_a_stale_refresh() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("a", 5, 0), article("b", 0, 0)]);

    let (state, effects) = update(
        state,
        Msg::VoteClicked {
            id: "a".to_string(),
            direction: VoteDirection::Up,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::CastVote {
            id: "a".to_string(),
            direction: VoteDirection::Up,
        }]
    );

    // A refresh that left the server before the vote landed reports a=3.
    let state = refreshed(state, vec![article("a", 3, 0), article("b", 0, 0)]);
    let row = state.view().articles.first().cloned().unwrap();
    assert_eq!(row.id, "a");
    assert_eq!(row.upvotes, 5);
    assert!(row.vote_pending);

    // The vote resolves with the authoritative tally.
    let (state, _) = update(
        state,
        Msg::VoteArrived {
            id: "a".to_string(),
            article: article("a", 6, 0),
        },
    );
    let row = state.view().articles.first().cloned().unwrap();
    assert_eq!(row.upvotes, 6);
    assert!(!row.vote_pending);
}

#[test]
fn pending_entry_missing_from_a_refresh_is_retained() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("a", 2, 0), article("b", 1, 0)]);

    let (state, _) = update(
        state,
        Msg::VoteClicked {
            id: "a".to_string(),
            direction: VoteDirection::Down,
        },
    );
    let state = refreshed(state, vec![article("b", 1, 0)]);

    assert_eq!(visible_ids(&state), vec!["a", "b"]);
}

#[test]
fn vote_result_for_an_evicted_article_is_appended() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("b", 4, 0)]);

    let (state, _) = update(
        state,
        Msg::VoteArrived {
            id: "a".to_string(),
            article: article("a", 9, 0),
        },
    );

    assert_eq!(visible_ids(&state), vec!["a", "b"]);
}

#[test]
fn upvote_moves_the_article_in_the_derived_order() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("b", 0, 0), article("abc123", 0, 0)]);
    assert_eq!(visible_ids(&state), vec!["b", "abc123"]);

    let (state, _) = update(
        state,
        Msg::VoteClicked {
            id: "abc123".to_string(),
            direction: VoteDirection::Up,
        },
    );
    let (state, _) = update(
        state,
        Msg::VoteArrived {
            id: "abc123".to_string(),
            article: article("abc123", 1, 0),
        },
    );

    assert_eq!(visible_ids(&state), vec!["abc123", "b"]);
}

#[test]
fn refresh_failure_preserves_the_last_loaded_list() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("a", 1, 0)]);

    let (state, effects) = update(state, Msg::RefreshFailed("timeout".to_string()));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.article_count, 1);
    assert_eq!(view.last_error, Some("timeout".to_string()));

    // The next successful refresh clears the error.
    let state = refreshed(state, vec![article("a", 1, 0)]);
    assert_eq!(state.view().last_error, None);
}

#[test]
fn vote_failure_clears_the_pending_mark_and_keeps_counts() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("a", 2, 1)]);

    let (state, _) = update(
        state,
        Msg::VoteClicked {
            id: "a".to_string(),
            direction: VoteDirection::Up,
        },
    );
    assert!(state.view().articles[0].vote_pending);

    let (state, _) = update(
        state,
        Msg::VoteFailed {
            id: "a".to_string(),
            message: "HTTP 500".to_string(),
        },
    );
    let row = state.view().articles.first().cloned().unwrap();
    assert!(!row.vote_pending);
    assert_eq!(row.upvotes, 2);
    assert_eq!(row.downvotes, 1);
    assert_eq!(state.view().last_error, Some("HTTP 500".to_string()));
}

#[test]
fn duplicate_ids_in_a_refresh_are_dropped() {
    let state = AppState::new();
    let state = refreshed(state, vec![article("a", 1, 0), article("a", 7, 0)]);

    let view = state.view();
    assert_eq!(view.article_count, 1);
    assert_eq!(view.articles[0].upvotes, 1);
}
