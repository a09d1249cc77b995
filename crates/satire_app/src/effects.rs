use client_logging::client_warn;
use satire_client::{ClientCommand, ClientEvent, ClientHandle};
use satire_core::{Effect, Msg};

/// Executes effects by forwarding them to the client worker.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = match effect {
                Effect::FetchList => ClientCommand::RefreshList,
                Effect::CreateArticle { prompt } => ClientCommand::CreateArticle { prompt },
                Effect::CastVote { id, direction } => ClientCommand::CastVote { id, direction },
                Effect::ProbeHealth => ClientCommand::ProbeHealth,
            };
            self.client.submit(command);
        }
    }
}

/// Maps a client event back into a core message.
pub fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::ListRefreshed(Ok(articles)) => Msg::RefreshArrived(articles),
        ClientEvent::ListRefreshed(Err(error)) => {
            client_warn!("list refresh failed: {error}");
            Msg::RefreshFailed(error.to_string())
        }
        ClientEvent::ArticleCreated(Ok(article)) => Msg::ArticleCreated(article),
        ClientEvent::ArticleCreated(Err(error)) => {
            client_warn!("creation failed: {error}");
            Msg::CreateFailed(error.to_string())
        }
        ClientEvent::VoteResolved { id, result } => match result {
            Ok(article) => Msg::VoteArrived { id, article },
            Err(error) => {
                client_warn!("vote on {id} failed: {error}");
                Msg::VoteFailed {
                    id,
                    message: error.to_string(),
                }
            }
        },
        ClientEvent::HealthProbed(state) => Msg::ProbeResolved(state),
    }
}
