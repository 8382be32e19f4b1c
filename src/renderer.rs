//! Design renderer: turns submitted payloads into displayable designs.
//!
//! A renderer subscribes to a [`DesignBus`] when spawned and keeps a
//! background listener for its whole lifetime. Each payload moves the state
//! to `Loading` and starts a generation; a newer payload drops the pending
//! generation, so only the latest payload's design is ever shown. Shutting
//! down (or dropping) the renderer unsubscribes, cancels any pending
//! generation, and freezes the state.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::bus::{DesignBus, Subscription};
use crate::design::{DesignPayload, DesignResult};
use crate::error::GenerateError;
use crate::generator::DesignGenerator;

/// Observable renderer state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderState {
    /// Nothing submitted yet.
    #[default]
    Empty,
    /// A generation is in progress.
    Loading,
    Ready(Box<DesignResult>),
    /// Generation failed. `previous` is the last design shown, restored when
    /// the error is dismissed.
    Error {
        message: String,
        previous: Option<Box<DesignResult>>,
    },
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Ready or Error: nothing more happens until the next payload.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Error { .. })
    }

    pub fn result(&self) -> Option<&DesignResult> {
        match self {
            Self::Ready(result) => Some(result),
            _ => None,
        }
    }
}

type Generation = Pin<Box<dyn Future<Output = Result<DesignResult, GenerateError>> + Send>>;

struct Shared {
    state: watch::Sender<RenderState>,
    /// Cleared on shutdown; every state write checks it under the lock.
    alive: Mutex<bool>,
    /// Flips to `false` once on shutdown so waiters stop expecting updates.
    running: watch::Sender<bool>,
}

impl Shared {
    fn update<F>(&self, modify: F) -> bool
    where
        F: FnOnce(&mut RenderState) -> bool,
    {
        let alive = self.alive.lock().unwrap_or_else(|e| e.into_inner());
        if !*alive {
            return false;
        }
        self.state.send_if_modified(modify)
    }

    fn set(&self, next: RenderState) {
        self.update(|state| {
            *state = next;
            true
        });
    }
}

/// Handle to a running renderer.
pub struct DesignRenderer {
    shared: Arc<Shared>,
    listener: Option<JoinHandle<()>>,
}

impl DesignRenderer {
    /// Subscribe to `bus` and start listening. Must be called inside a tokio
    /// runtime.
    pub fn spawn(bus: &DesignBus, generator: Arc<dyn DesignGenerator>) -> Self {
        let (state, _) = watch::channel(RenderState::Empty);
        let shared = Arc::new(Shared {
            state,
            alive: Mutex::new(true),
            running: watch::channel(true).0,
        });
        let subscription = bus.subscribe();
        let listener = tokio::spawn(run_listener(subscription, generator, Arc::clone(&shared)));
        debug!(channel = bus.name(), "renderer subscribed");
        Self {
            shared,
            listener: Some(listener),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RenderState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn watch(&self) -> watch::Receiver<RenderState> {
        self.shared.state.subscribe()
    }

    /// Leave the error state ("Try Again"). Returns to the previous design
    /// if there was one, otherwise to empty. No-op outside `Error`.
    pub fn dismiss_error(&self) -> bool {
        self.shared.update(|state| {
            let RenderState::Error { previous, .. } = state else {
                return false;
            };
            *state = match previous.take() {
                Some(result) => RenderState::Ready(result),
                None => RenderState::Empty,
            };
            true
        })
    }

    pub fn is_running(&self) -> bool {
        self.listener.is_some()
    }

    /// Receiver that reads `false` once the renderer has shut down.
    pub fn watch_running(&self) -> watch::Receiver<bool> {
        self.shared.running.subscribe()
    }

    /// Stop listening. Pending generations are cancelled and no state update
    /// is applied afterwards. Idempotent.
    pub fn shutdown(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        {
            let mut alive = self.shared.alive.lock().unwrap_or_else(|e| e.into_inner());
            *alive = false;
        }
        listener.abort();
        self.shared.running.send_replace(false);
        debug!("renderer shut down");
    }
}

impl Drop for DesignRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_listener(
    mut subscription: Subscription,
    generator: Arc<dyn DesignGenerator>,
    shared: Arc<Shared>,
) {
    let mut pending: Option<Generation> = None;
    let mut last_result: Option<Box<DesignResult>> = None;

    loop {
        tokio::select! {
            received = subscription.recv() => {
                let Some(payload) = received else {
                    debug!("design bus closed, renderer listener exiting");
                    break;
                };
                if pending.is_some() {
                    debug!("newer payload supersedes pending generation");
                }
                info!(id = payload.id().unwrap_or("-"), "design payload received");
                shared.set(RenderState::Loading);
                pending = Some(start_generation(Arc::clone(&generator), payload));
            }
            outcome = async {
                match pending.as_mut() {
                    Some(generation) => generation.await,
                    None => std::future::pending().await,
                }
            }, if pending.is_some() => {
                pending = None;
                match outcome {
                    Ok(result) => {
                        let result = Box::new(result);
                        last_result = Some(result.clone());
                        shared.set(RenderState::Ready(result));
                    }
                    Err(err) => {
                        warn!(error = %err, "design generation failed");
                        shared.set(RenderState::Error {
                            message: err.to_string(),
                            previous: last_result.clone(),
                        });
                    }
                }
            }
        }
    }
}

fn start_generation(generator: Arc<dyn DesignGenerator>, payload: DesignPayload) -> Generation {
    Box::pin(async move { generator.generate(&payload).await })
}
