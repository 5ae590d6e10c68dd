//! Live notification channel.
//!
//! Each open viewer connection owns an unbounded receiver; the channel keeps
//! the matching senders keyed by connection id. A broadcast snapshots the
//! membership at the time of the call, so late joiners miss it and members
//! whose receiver is gone are pruned instead of retried.

mod ws;

use std::{collections::HashMap, sync::{Arc, Mutex, PoisonError}};

use axum::{routing::get, Router};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::AppState;

pub type ConnectionId = Uuid;

#[derive(Clone, Default)]
pub struct LiveChannel {
    members: Arc<Mutex<HashMap<ConnectionId, mpsc::UnboundedSender<String>>>>,
}

impl LiveChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let id = Uuid::now_v7();
        let (tx, rx) = mpsc::unbounded_channel();
        let count = {
            let mut members = self.members.lock().unwrap_or_else(PoisonError::into_inner);
            members.insert(id, tx);
            members.len()
        };
        info!(connection = %id, count, "viewer connected");
        (id, rx)
    }

    pub fn unregister(&self, id: ConnectionId) {
        let removed = self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            info!(connection = %id, "viewer disconnected");
        }
    }

    /// Best-effort fan-out. Returns how many members the text was handed to.
    pub fn broadcast_all(&self, text: &str) -> usize {
        let mut members = self.members.lock().unwrap_or_else(PoisonError::into_inner);
        let before = members.len();
        members.retain(|id, tx| {
            let delivered = tx.send(text.to_owned()).is_ok();
            if !delivered {
                debug!(connection = %id, "dropping closed viewer");
            }
            delivered
        });
        let delivered = members.len();
        info!(delivered, pruned = before - delivered, "broadcast sent");
        delivered
    }

    pub fn len(&self) -> usize {
        self.members.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/live", get(ws::live_ws))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
