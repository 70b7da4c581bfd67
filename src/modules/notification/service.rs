/// Notification Service
///
/// Per-user notification feed and the faculty announcement broadcast.
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::api::toast::{Toast, ToastSink};
use crate::modules::notification::repository::NotificationRepository;
use crate::modules::notification::schema::{NotificationEntity, NotificationType};
use crate::utils::new_id;

pub struct NotificationService {
    notification_repo: Arc<dyn NotificationRepository + Send + Sync>,
    toasts: Arc<dyn ToastSink + Send + Sync>,
}

impl NotificationService {
    pub fn with_dependencies(
        notification_repo: Arc<dyn NotificationRepository + Send + Sync>,
        toasts: Arc<dyn ToastSink + Send + Sync>,
    ) -> Self {
        info!("NotificationService initialized with dependencies");
        NotificationService { notification_repo, toasts }
    }

    pub async fn notifications(
        &self,
    ) -> Result<Arc<Vec<NotificationEntity>>, error::SystemError> {
        self.notification_repo.find_all().await
    }

    pub async fn get_notifications_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<NotificationEntity>, error::SystemError> {
        self.notification_repo.find_by_user(user_id).await
    }

    pub async fn get_unread_notifications_count(
        &self,
        user_id: &str,
    ) -> Result<usize, error::SystemError> {
        let notifications = self.notification_repo.find_all().await?;
        Ok(notifications.iter().filter(|n| n.user_id == user_id && !n.read).count())
    }

    /// One-way; unknown or already read ids change nothing.
    pub async fn mark_notification_as_read(&self, id: &str) -> Result<(), error::SystemError> {
        self.notification_repo.mark_as_read(id).await?;
        Ok(())
    }

    /// Fans an announcement out to every recipient in a single append.
    pub async fn send_announcement(
        &self,
        sender_id: &str,
        title: &str,
        message: &str,
        recipient_ids: &[String],
    ) -> Result<Vec<NotificationEntity>, error::SystemError> {
        let now = chrono::Utc::now();
        let notifications: Vec<NotificationEntity> = recipient_ids
            .iter()
            .map(|user_id| NotificationEntity {
                id: new_id("notification"),
                user_id: user_id.clone(),
                title: title.to_string(),
                message: message.to_string(),
                created_at: now,
                read: false,
                _type: NotificationType::Announcement,
                link_to: None,
            })
            .collect();

        self.notification_repo.insert_many(notifications.clone()).await?;

        info!("Announcement from {} sent to {} recipients", sender_id, notifications.len());
        self.toasts.emit(Toast::ok("Announcement Sent").description(format!(
            "Announcement has been sent to {} recipients.",
            recipient_ids.len()
        )));
        Ok(notifications)
    }

    /// Single system-generated notification, e.g. after grading.
    pub async fn notify(
        &self,
        user_id: &str,
        kind: NotificationType,
        title: &str,
        message: &str,
        link_to: Option<&str>,
    ) -> Result<NotificationEntity, error::SystemError> {
        let notification = NotificationEntity {
            id: new_id("notification"),
            user_id: user_id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            created_at: chrono::Utc::now(),
            read: false,
            _type: kind,
            link_to: link_to.map(str::to_string),
        };
        self.notification_repo.insert_many(vec![notification.clone()]).await?;
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::toast::RecordingToastSink;
    use crate::modules::notification::repository_memory::NotificationRepositoryMemory;
    use std::collections::HashSet;

    fn fixture() -> (NotificationService, Arc<RecordingToastSink>) {
        let toasts = Arc::new(RecordingToastSink::new());
        let service = NotificationService::with_dependencies(
            Arc::new(NotificationRepositoryMemory::seeded()),
            toasts.clone(),
        );
        (service, toasts)
    }

    fn ids(notifications: &[NotificationEntity]) -> Vec<&str> {
        notifications.iter().map(|n| n.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_feed_is_per_user_in_insertion_order() {
        let (service, _) = fixture();
        assert_eq!(ids(&service.get_notifications_for_user("1").await.unwrap()), vec!["n1", "n2", "n3"]);
        assert_eq!(ids(&service.get_notifications_for_user("3").await.unwrap()), vec!["n5"]);
        assert!(service.get_notifications_for_user("9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unread_count_tracks_mark_as_read() {
        let (service, _) = fixture();
        assert_eq!(service.get_unread_notifications_count("1").await.unwrap(), 2);

        service.mark_notification_as_read("n1").await.unwrap();
        assert_eq!(service.get_unread_notifications_count("1").await.unwrap(), 1);

        service.mark_notification_as_read("n1").await.unwrap();
        service.mark_notification_as_read("missing").await.unwrap();
        assert_eq!(service.get_unread_notifications_count("1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_announcement_creates_one_per_recipient() {
        let (service, toasts) = fixture();
        let recipients = vec!["1".to_string(), "4".to_string(), "5".to_string()];
        let sent = service.send_announcement("2", "Exam", "Moved to Friday", &recipients).await.unwrap();

        assert_eq!(sent.len(), 3);
        let unique: HashSet<_> = sent.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(unique.len(), 3);
        assert!(sent.iter().all(|n| n._type == NotificationType::Announcement && !n.read));
        assert_eq!(sent.iter().map(|n| n.user_id.as_str()).collect::<Vec<_>>(), vec!["1", "4", "5"]);

        let all = service.notifications().await.unwrap();
        assert_eq!(all.len(), 8);
        for (recipient, notification) in recipients.iter().zip(&sent) {
            let feed = service.get_notifications_for_user(recipient).await.unwrap();
            assert_eq!(feed.last(), Some(notification));
            assert_eq!(feed.last().map(|n| n.title.as_str()), Some("Exam"));
        }
        assert_eq!(service.get_unread_notifications_count("4").await.unwrap(), 1);

        let toast = toasts.last().unwrap();
        assert_eq!(toast.title, "Announcement Sent");
        assert_eq!(toast.description.as_deref(), Some("Announcement has been sent to 3 recipients."));
    }

    #[tokio::test]
    async fn test_notify_appends_single_notification() {
        let (service, toasts) = fixture();
        let created = service
            .notify("1", NotificationType::Grade, "Graded", "9/10", Some("/assignments/a1"))
            .await
            .unwrap();
        assert!(created.id.starts_with("notification-"));
        let feed = service.get_notifications_for_user("1").await.unwrap();
        assert_eq!(feed.last(), Some(&created));
        assert!(toasts.toasts().is_empty());
    }
}
