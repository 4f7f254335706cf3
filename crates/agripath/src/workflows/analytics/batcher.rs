use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::domain::{AnalyticsEvent, EventBatch};

pub const DEFAULT_FLUSH_THRESHOLD: usize = 5;
pub const DEFAULT_IDLE_FLUSH: Duration = Duration::from_secs(10);

/// Flush triggers for the batcher task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatcherConfig {
    pub flush_threshold: usize,
    pub idle_flush: Duration,
}

impl BatcherConfig {
    pub fn new(flush_threshold: usize, idle_flush: Duration) -> Self {
        Self {
            flush_threshold: flush_threshold.max(1),
            idle_flush,
        }
    }
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FLUSH_THRESHOLD, DEFAULT_IDLE_FLUSH)
    }
}

/// Destination for flushed batches.
///
/// `deliver` is the awaited path used for threshold, idle and explicit flushes.
/// `beacon` must return immediately; it is only used when the batcher unloads.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    async fn deliver(&self, batch: &EventBatch) -> Result<(), DeliveryError>;
    fn beacon(&self, batch: EventBatch);
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ingestion endpoint rejected the batch with status {status}")]
    Rejected { status: u16 },
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
#[error("event batcher has shut down")]
pub struct BatcherClosed;

enum Command {
    Track(AnalyticsEvent),
    Flush(oneshot::Sender<()>),
    Unload,
}

/// Cloneable handle to a background batching task.
#[derive(Clone)]
pub struct EventBatcher {
    commands: mpsc::UnboundedSender<Command>,
}

impl EventBatcher {
    pub fn spawn<S: EventSink>(sink: Arc<S>, config: BatcherConfig) -> (Self, JoinHandle<()>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(sink, config, receiver));
        (Self { commands }, task)
    }

    pub fn track(&self, event: AnalyticsEvent) -> Result<(), BatcherClosed> {
        self.commands
            .send(Command::Track(event))
            .map_err(|_| BatcherClosed)
    }

    /// Deliver whatever is queued and wait for the attempt to finish.
    pub async fn flush(&self) -> Result<(), BatcherClosed> {
        let (ack, done) = oneshot::channel();
        self.commands
            .send(Command::Flush(ack))
            .map_err(|_| BatcherClosed)?;
        done.await.map_err(|_| BatcherClosed)
    }

    /// Hand queued events to the sink's beacon and stop the task.
    pub fn unload(&self) {
        // A closed channel means the task already stopped.
        let _ = self.commands.send(Command::Unload);
    }
}

enum Wake {
    Command(Option<Command>),
    Idle,
}

async fn run<S: EventSink>(
    sink: Arc<S>,
    config: BatcherConfig,
    mut commands: mpsc::UnboundedReceiver<Command>,
) {
    let mut queue: Vec<AnalyticsEvent> = Vec::new();
    let mut deadline: Option<Instant> = None;

    loop {
        let wake = match deadline {
            Some(at) => tokio::select! {
                command = commands.recv() => Wake::Command(command),
                _ = tokio::time::sleep_until(at) => Wake::Idle,
            },
            None => Wake::Command(commands.recv().await),
        };

        match wake {
            Wake::Idle => {
                deadline = None;
                deliver(sink.as_ref(), &mut queue).await;
            }
            Wake::Command(Some(Command::Track(event))) => {
                queue.push(event);
                if queue.len() >= config.flush_threshold {
                    deadline = None;
                    deliver(sink.as_ref(), &mut queue).await;
                } else {
                    deadline = Some(Instant::now() + config.idle_flush);
                }
            }
            Wake::Command(Some(Command::Flush(ack))) => {
                deadline = None;
                deliver(sink.as_ref(), &mut queue).await;
                let _ = ack.send(());
            }
            Wake::Command(Some(Command::Unload)) | Wake::Command(None) => {
                if !queue.is_empty() {
                    debug!(size = queue.len(), "analytics batch handed to beacon");
                    sink.beacon(EventBatch {
                        events: std::mem::take(&mut queue),
                    });
                }
                break;
            }
        }
    }
}

async fn deliver<S: EventSink>(sink: &S, queue: &mut Vec<AnalyticsEvent>) {
    if queue.is_empty() {
        return;
    }
    let batch = EventBatch {
        events: std::mem::take(queue),
    };
    let size = batch.events.len();
    match sink.deliver(&batch).await {
        Ok(()) => debug!(size, "analytics batch delivered"),
        Err(error) => warn!(size, %error, "analytics batch dropped"),
    }
}
