//! Event loop driving a [`FeedState`] against a [`CatalogApi`].
//!
//! Commands come in over an mpsc channel, page requests run on spawned
//! tasks, and every state change is published on a `watch` channel.

use std::sync::Arc;
use std::time::Duration;

use domain_catalog::{CreateItem, Item, PageResult, SortOrder};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info};

use crate::api::CatalogApi;
use crate::debounce::{DEFAULT_DEBOUNCE, Debounce};
use crate::error::{ClientError, ClientResult};
use crate::feed::FeedState;
use crate::viewport::{DEFAULT_SENTINEL_MARGIN, Viewport};

#[derive(Debug, Clone, Copy)]
pub struct BrowserConfig {
    pub debounce: Duration,
    pub sentinel_margin: f64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            sentinel_margin: DEFAULT_SENTINEL_MARGIN,
        }
    }
}

#[derive(Debug)]
pub enum Command {
    /// Raw search input
    Type(String),
    SetSort(SortOrder),
    /// The view moved
    Scrolled(Viewport),
    Create {
        input: CreateItem,
        reply: oneshot::Sender<ClientResult<Item>>,
    },
    Shutdown,
}

enum Settled {
    Page {
        generation: u64,
        result: ClientResult<PageResult>,
    },
    Created {
        result: ClientResult<Item>,
        reply: oneshot::Sender<ClientResult<Item>>,
    },
}

/// Caller side of a running browser
#[derive(Debug, Clone)]
pub struct BrowserHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<FeedState>,
}

impl BrowserHandle {
    async fn send(&self, command: Command) -> ClientResult<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ClientError::Closed)
    }

    pub async fn type_query(&self, raw: impl Into<String>) -> ClientResult<()> {
        self.send(Command::Type(raw.into())).await
    }

    pub async fn set_sort(&self, sort: SortOrder) -> ClientResult<()> {
        self.send(Command::SetSort(sort)).await
    }

    pub async fn scrolled(&self, viewport: Viewport) -> ClientResult<()> {
        self.send(Command::Scrolled(viewport)).await
    }

    /// Create an item and wait for the server's answer
    pub async fn create(&self, input: CreateItem) -> ClientResult<Item> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Create { input, reply }).await?;
        rx.await.map_err(|_| ClientError::Closed)?
    }

    pub async fn shutdown(&self) -> ClientResult<()> {
        self.send(Command::Shutdown).await
    }

    pub fn snapshot(&self) -> FeedState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.clone()
    }
}

pub struct Browser<A: CatalogApi + 'static> {
    api: Arc<A>,
    config: BrowserConfig,
}

impl<A: CatalogApi + 'static> Browser<A> {
    pub fn new(api: A, config: BrowserConfig) -> Self {
        Self {
            api: Arc::new(api),
            config,
        }
    }

    /// Start the event loop; the first page is requested immediately.
    pub fn spawn(self) -> (BrowserHandle, JoinHandle<()>) {
        let (commands_tx, commands_rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(FeedState::new());

        let task = tokio::spawn(self.run(commands_rx, state_tx));
        let handle = BrowserHandle {
            commands: commands_tx,
            state: state_rx,
        };
        (handle, task)
    }

    async fn run(self, mut commands: mpsc::Receiver<Command>, state: watch::Sender<FeedState>) {
        let mut feed = FeedState::new();
        let mut debounce: Debounce<String> = Debounce::new(self.config.debounce);
        let (settled_tx, mut settled_rx) = mpsc::unbounded_channel();

        info!("Browser started");
        self.dispatch(&mut feed, &settled_tx);
        state.send_replace(feed.clone());

        loop {
            let deadline = debounce.deadline();

            tokio::select! {
                command = commands.recv() => match command {
                    None | Some(Command::Shutdown) => break,
                    Some(Command::Type(raw)) => {
                        feed.edit_query(raw.clone());
                        debounce.push(raw, Instant::now());
                    }
                    Some(Command::SetSort(sort)) => {
                        feed.set_sort(sort);
                    }
                    Some(Command::Scrolled(viewport)) => {
                        if viewport.sentinel_visible(self.config.sentinel_margin) {
                            feed.on_sentinel_visible();
                        }
                    }
                    Some(Command::Create { input, reply }) => {
                        let api = Arc::clone(&self.api);
                        let tx = settled_tx.clone();
                        tokio::spawn(async move {
                            let result = api.create_item(&input).await;
                            let _ = tx.send(Settled::Created { result, reply });
                        });
                    }
                },

                Some(settled) = settled_rx.recv() => match settled {
                    Settled::Page { generation, result } => {
                        feed.complete(generation, result);
                    }
                    Settled::Created { result, reply } => {
                        if let Ok(item) = &result {
                            debug!(item_id = %item.id, "Item created, reloading first page");
                            debounce.cancel();
                            feed.item_created();
                        }
                        let _ = reply.send(result);
                    }
                },

                _ = wait_for(deadline) => {
                    if let Some(query) = debounce.poll(Instant::now()) {
                        feed.apply_query(query);
                    }
                }
            }

            self.dispatch(&mut feed, &settled_tx);
            state.send_replace(feed.clone());
        }

        info!("Browser stopped");
    }

    fn dispatch(&self, feed: &mut FeedState, settled: &mpsc::UnboundedSender<Settled>) {
        let Some(request) = feed.next_fetch() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = settled.clone();
        tokio::spawn(async move {
            let result = api.fetch_page(&request.query).await;
            let _ = tx.send(Settled::Page {
                generation: request.generation,
                result,
            });
        });
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
