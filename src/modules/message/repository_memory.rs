use std::sync::Arc;

use crate::{
    api::error,
    modules::message::{repository::MessageRepository, schema::MessageEntity},
    seed,
    utils::Snapshot,
};

pub struct MessageRepositoryMemory {
    messages: Snapshot<MessageEntity>,
}

impl MessageRepositoryMemory {
    pub fn new(messages: Vec<MessageEntity>) -> Self {
        Self { messages: Snapshot::new(messages) }
    }

    pub fn seeded() -> Self {
        Self::new(seed::messages())
    }
}

#[async_trait::async_trait]
impl MessageRepository for MessageRepositoryMemory {
    async fn find_all(&self) -> Result<Arc<Vec<MessageEntity>>, error::SystemError> {
        Ok(self.messages.load())
    }

    async fn find_between(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        Ok(self
            .messages
            .load()
            .iter()
            .filter(|m| {
                (m.sender_id == a && m.receiver_id == b) || (m.sender_id == b && m.receiver_id == a)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, message: &MessageEntity) -> Result<(), error::SystemError> {
        self.messages.push_many(vec![message.clone()]);
        Ok(())
    }

    async fn mark_read(
        &self,
        receiver_id: &str,
        sender_id: &str,
    ) -> Result<usize, error::SystemError> {
        let is_target =
            |m: &MessageEntity| !m.read && m.receiver_id == receiver_id && m.sender_id == sender_id;

        let mut changed = 0;
        self.messages.replace_with(|current| {
            changed = current.iter().filter(|&m| is_target(m)).count();
            if changed == 0 {
                return None;
            }
            Some(
                current
                    .iter()
                    .map(|m| if is_target(m) { MessageEntity { read: true, ..m.clone() } } else { m.clone() })
                    .collect(),
            )
        });
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_between_ignores_direction() {
        let repo = MessageRepositoryMemory::seeded();
        let forward: Vec<_> = repo.find_between("1", "2").await.unwrap().into_iter().map(|m| m.id).collect();
        let backward: Vec<_> = repo.find_between("2", "1").await.unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(forward, vec!["m1", "m2", "m3", "m4"]);
        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn test_mark_read_is_directional() {
        let repo = MessageRepositoryMemory::seeded();
        assert_eq!(repo.mark_read("2", "1").await.unwrap(), 0);
        assert_eq!(repo.mark_read("1", "2").await.unwrap(), 1);
        assert_eq!(repo.mark_read("1", "2").await.unwrap(), 0);
        let m5 = repo.find_between("4", "2").await.unwrap();
        assert!(!m5[0].read);
    }
}
