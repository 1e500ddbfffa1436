use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::models::FormSession;

/// In-memory session store. Nothing outlives the process.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, FormSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Stores a new session, dropping any that have gone idle past the TTL.
    pub async fn insert(&self, session: FormSession) -> Uuid {
        let id = session.id;
        let mut sessions = self.inner.write().await;
        purge(&mut sessions, self.ttl);
        sessions.insert(id, session);
        debug!("Session {id} created ({} active)", sessions.len());
        id
    }

    /// Runs `f` against a live session. Browsing counts as activity, so the
    /// session's idle clock restarts.
    pub async fn read<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&FormSession) -> Result<T, AppError>,
    {
        self.update(id, |session| {
            session.touch();
            f(session)
        })
        .await
    }

    /// Runs `f` against a live session with mutable access. Expired sessions are removed.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut FormSession) -> Result<T, AppError>,
    {
        let mut sessions = self.inner.write().await;
        let expired = match sessions.get(&id) {
            Some(session) => session.is_expired(Utc::now(), self.ttl),
            None => return Err(session_not_found(id)),
        };
        if expired {
            sessions.remove(&id);
            info!("Session {id} expired");
            return Err(session_not_found(id));
        }
        match sessions.get_mut(&id) {
            Some(session) => f(session),
            None => Err(session_not_found(id)),
        }
    }

    /// Discards a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn purge_expired(&self) -> usize {
        purge(&mut *self.inner.write().await, self.ttl)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

fn purge(sessions: &mut HashMap<Uuid, FormSession>, ttl: Duration) -> usize {
    let now = Utc::now();
    let before = sessions.len();
    sessions.retain(|_, s| !s.is_expired(now, ttl));
    let removed = before - sessions.len();
    if removed > 0 {
        info!("Purged {removed} expired sessions");
    }
    removed
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found or expired"))
}
