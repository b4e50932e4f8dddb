use std::sync::{mpsc, Arc};
use std::thread;

use crate::client::AnnotationApi;
use crate::types::{ApiError, WireArticleBundle, WireCodedArticle, WireSavePayload};

enum ApiCommand {
    FetchList { seq: u64, order_by: String },
    LoadArticle { seq: u64, id: u64 },
    SaveArticle { id: u64, payload: WireSavePayload },
}

/// Completed REST calls, tagged with the request sequence number where the
/// caller needs to detect stale responses.
#[derive(Debug)]
pub enum ApiEvent {
    ListFetched {
        seq: u64,
        result: Result<Vec<WireCodedArticle>, ApiError>,
    },
    ArticleLoaded {
        seq: u64,
        result: Result<WireArticleBundle, ApiError>,
    },
    SaveFinished {
        id: u64,
        result: Result<(), ApiError>,
    },
}

/// Owns a tokio runtime on a background thread. Commands go in over a
/// channel, completions come back as `ApiEvent`s polled by the UI loop.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: mpsc::Receiver<ApiEvent>,
}

impl ApiHandle {
    pub fn new(api: Arc<dyn AnnotationApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_list(&self, seq: u64, order_by: impl Into<String>) {
        let _ = self.cmd_tx.send(ApiCommand::FetchList {
            seq,
            order_by: order_by.into(),
        });
    }

    pub fn load_article(&self, seq: u64, id: u64) {
        let _ = self.cmd_tx.send(ApiCommand::LoadArticle { seq, id });
    }

    pub fn save_article(&self, id: u64, payload: WireSavePayload) {
        let _ = self.cmd_tx.send(ApiCommand::SaveArticle { id, payload });
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn AnnotationApi,
    command: ApiCommand,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    let event = match command {
        ApiCommand::FetchList { seq, order_by } => ApiEvent::ListFetched {
            seq,
            result: api.list_coded_articles(&order_by).await,
        },
        ApiCommand::LoadArticle { seq, id } => ApiEvent::ArticleLoaded {
            seq,
            result: api.get_coded_article(id).await,
        },
        ApiCommand::SaveArticle { id, payload } => ApiEvent::SaveFinished {
            id,
            result: api.save_coded_article(id, &payload).await,
        },
    };
    let _ = event_tx.send(event);
}
