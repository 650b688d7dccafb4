//! Shared request-handling state.
//!
//! # Responsibility
//! - Hold the process-wide storage handle behind an async lock.
//!
//! # Invariants
//! - Handlers acquire the connection for the duration of one persistence
//!   call; the guard releases on every exit path.

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Application state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an already-bootstrapped connection (migrations applied).
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquires the storage connection for a single operation.
    pub async fn lock_db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().await
    }
}
