use crate::picker::domain::models::{
    DataSource, FetchKind, FetchRequest, FetchResponse, FetchResponseKind, Item,
};
use anyhow::Result;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::debug;

/// The data backend the picker talks to. One implementation per server
/// or fixture set; the controller never sees past this seam.
pub trait Directory: Send + Sync {
    /// Fetch one page of a paged source. An empty result signals end of
    /// data; calling again with the same page index must be safe.
    fn fetch_page(&self, source: DataSource, page: i64, per_page: usize) -> Result<Vec<Item>>;

    /// Search a source by term.
    fn search(&self, source: DataSource, term: &str) -> Result<Vec<Item>>;

    /// Whether `search` is wired up for this source. Dynamic option
    /// backends may legitimately lack one.
    fn supports_search(&self, source: DataSource) -> bool;
}

/// Spawn the worker thread that serves fetch requests off the UI loop.
/// Responses carry the request id so the loop can drop stale ones.
pub fn start_fetch_worker(
    directory: Arc<dyn Directory>,
) -> (Sender<FetchRequest>, Receiver<FetchResponse>) {
    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            debug!(id = request.id, "serving fetch request");
            let kind = match &request.kind {
                FetchKind::Page { page, per_page } => {
                    let outcome = directory
                        .fetch_page(request.source, *page, *per_page)
                        .map_err(|e| e.to_string());
                    FetchResponseKind::Page(outcome)
                }
                FetchKind::Search { term } => {
                    let outcome = directory
                        .search(request.source, term)
                        .map_err(|e| e.to_string());
                    FetchResponseKind::Search(outcome)
                }
            };

            if response_tx
                .send(FetchResponse {
                    id: request.id,
                    kind,
                })
                .is_err()
            {
                break;
            }
        }
    });

    (request_tx, response_rx)
}
