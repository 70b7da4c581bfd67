use std::sync::Arc;

use crate::{
    api::error,
    modules::notification::{repository::NotificationRepository, schema::NotificationEntity},
    seed,
    utils::Snapshot,
};

pub struct NotificationRepositoryMemory {
    notifications: Snapshot<NotificationEntity>,
}

impl NotificationRepositoryMemory {
    pub fn new(notifications: Vec<NotificationEntity>) -> Self {
        Self { notifications: Snapshot::new(notifications) }
    }

    pub fn seeded() -> Self {
        Self::new(seed::notifications())
    }
}

#[async_trait::async_trait]
impl NotificationRepository for NotificationRepositoryMemory {
    async fn find_all(&self) -> Result<Arc<Vec<NotificationEntity>>, error::SystemError> {
        Ok(self.notifications.load())
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError> {
        Ok(self.notifications.load().iter().filter(|n| n.user_id == user_id).cloned().collect())
    }

    async fn insert_many(
        &self,
        notifications: Vec<NotificationEntity>,
    ) -> Result<(), error::SystemError> {
        self.notifications.push_many(notifications);
        Ok(())
    }

    async fn mark_as_read(&self, id: &str) -> Result<bool, error::SystemError> {
        let updated = self.notifications.modify_first(
            |n| n.id == id && !n.read,
            Box::new(|n: &NotificationEntity| Ok(NotificationEntity { read: true, ..n.clone() })),
        )?;
        Ok(updated.is_some())
    }
}
