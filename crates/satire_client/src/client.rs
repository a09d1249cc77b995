use std::sync::{mpsc, Arc};
use std::thread;

use satire_core::{Article, ConnectionState, VoteDirection};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, LogSink, Transport, TransportSink};
use crate::types::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    RefreshList,
    CreateArticle { prompt: String },
    CastVote {
        id: String,
        direction: VoteDirection,
    },
    ProbeHealth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ListRefreshed(Result<Vec<Article>, ApiError>),
    ArticleCreated(Result<Article, ApiError>),
    VoteResolved {
        id: String,
        result: Result<Article, ApiError>,
    },
    HealthProbed(ConnectionState),
}

/// Bridge between the synchronous shell and the async client.
///
/// Commands are queued onto a dedicated worker thread owning a tokio
/// runtime; each command runs as its own task, so a slow poll never delays
/// a vote or the probe. Results come back on the event receiver.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(config: ClientConfig) -> Result<(Self, mpsc::Receiver<ClientEvent>), ApiError> {
        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(config)?);
        let sink: Arc<dyn TransportSink> = Arc::new(LogSink);
        let api = ApiClient::new(transport, sink);
        Ok(Self::with_api(api))
    }

    /// Wires the handle onto an existing client; used by tests.
    pub fn with_api(api: ApiClient) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(api, command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, command: ClientCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn run_command(api: ApiClient, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::RefreshList => ClientEvent::ListRefreshed(api.list_articles().await),
        ClientCommand::CreateArticle { prompt } => {
            ClientEvent::ArticleCreated(api.create_article(&prompt).await)
        }
        ClientCommand::CastVote { id, direction } => {
            let result = match direction {
                VoteDirection::Up => api.upvote(&id).await,
                VoteDirection::Down => api.downvote(&id).await,
            };
            ClientEvent::VoteResolved { id, result }
        }
        ClientCommand::ProbeHealth => ClientEvent::HealthProbed(api.check_connection().await),
    }
}
