use std::sync::Arc;

use crate::{
    api::error, configs::KeyValueStore, constants::SESSION_KEY, modules::user::schema::UserEntity,
};

/// Outcome of reading the persisted session entry.
#[derive(Debug, PartialEq)]
pub enum StoredSession {
    Empty,
    Valid(UserEntity),
    Corrupt(String),
}

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore + Send + Sync>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub async fn save(&self, user: &UserEntity) -> Result<(), error::SystemError> {
        let payload = serde_json::to_string(user)?;
        self.store.set(SESSION_KEY, &payload).await
    }

    pub async fn load(&self) -> Result<StoredSession, error::SystemError> {
        let Some(raw) = self.store.get(SESSION_KEY).await? else {
            return Ok(StoredSession::Empty);
        };
        match serde_json::from_str::<UserEntity>(&raw) {
            Ok(user) => Ok(StoredSession::Valid(user)),
            Err(err) => Ok(StoredSession::Corrupt(err.to_string())),
        }
    }

    pub async fn clear(&self) -> Result<(), error::SystemError> {
        self.store.delete(SESSION_KEY).await
    }
}
