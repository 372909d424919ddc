use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{ContactMessage, NewContactMessage},
    ports::outgoing::{ContactMessageRepository, ContactMessageRepositoryError},
};
use crate::content::application::ports::outgoing::KeyValueStore;

pub const CONTACT_MESSAGES_KEY: &str = "contact_messages";

/// Inbox kept as one JSON array, newest first, under [`CONTACT_MESSAGES_KEY`].
#[derive(Clone)]
pub struct ContactMessageRepositoryKv<K>
where
    K: KeyValueStore,
{
    storage: K,
    // Serializes read-modify-write cycles.
    write_lock: Arc<Mutex<()>>,
}

impl<K> ContactMessageRepositoryKv<K>
where
    K: KeyValueStore,
{
    pub fn new(storage: K) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        let raw = self
            .storage
            .get(CONTACT_MESSAGES_KEY)
            .await
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| ContactMessageRepositoryError::SerializationError(e.to_string())),
        }
    }

    async fn save(&self, messages: &[ContactMessage]) -> Result<(), ContactMessageRepositoryError> {
        let raw = serde_json::to_string(messages)
            .map_err(|e| ContactMessageRepositoryError::SerializationError(e.to_string()))?;

        self.storage
            .set(CONTACT_MESSAGES_KEY, raw)
            .await
            .map_err(|e| ContactMessageRepositoryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl<K> ContactMessageRepository for ContactMessageRepositoryKv<K>
where
    K: KeyValueStore,
{
    async fn insert_message(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut messages = self.load().await?;
        let stored = data.into_message(Uuid::new_v4(), Utc::now().to_rfc3339());
        messages.insert(0, stored.clone());
        self.save(&messages).await?;

        Ok(stored)
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.load().await
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut messages = self.load().await?;
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ContactMessageRepositoryError::NotFound)?;
        message.is_read = true;

        self.save(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::InMemoryKeyValueStore;

    fn new_message(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_string(),
            email: "someone@example.com".to_string(),
            project_type: "Web Application".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_messages_are_listed_newest_first() {
        let repo = ContactMessageRepositoryKv::new(InMemoryKeyValueStore::default());

        repo.insert_message(new_message("first")).await.unwrap();
        repo.insert_message(new_message("second")).await.unwrap();

        let names: Vec<String> = repo
            .list_messages()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();

        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_messages_survive_new_repository_over_same_storage() {
        let storage = InMemoryKeyValueStore::default();
        ContactMessageRepositoryKv::new(storage.clone())
            .insert_message(new_message("kept"))
            .await
            .unwrap();

        let reopened = ContactMessageRepositoryKv::new(storage);

        assert_eq!(reopened.list_messages().await.unwrap()[0].name, "kept");
    }

    #[tokio::test]
    async fn test_corrupt_inbox_is_serialization_error() {
        let storage = InMemoryKeyValueStore::default();
        storage
            .set(CONTACT_MESSAGES_KEY, "{not json".to_string())
            .await
            .unwrap();

        let repo = ContactMessageRepositoryKv::new(storage);

        assert!(matches!(
            repo.list_messages().await,
            Err(ContactMessageRepositoryError::SerializationError(_))
        ));
    }
}
