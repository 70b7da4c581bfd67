/// Portal
///
/// The single object a front end talks to. It wires the seeded repositories into the
/// services once and hands the services out by reference.
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::api::toast::ToastSink;
use crate::configs::{connect_store, KeyValueStore};
use crate::constants::Env;
use crate::modules::conversation::repository_memory::ConversationRepositoryMemory;
use crate::modules::conversation::service::ConversationService;
use crate::modules::course::repository_memory::{
    AssignmentRepositoryMemory, CourseRepositoryMemory,
};
use crate::modules::course::service::CourseService;
use crate::modules::message::repository_memory::MessageRepositoryMemory;
use crate::modules::message::service::MessageService;
use crate::modules::notification::repository_memory::NotificationRepositoryMemory;
use crate::modules::notification::service::NotificationService;
use crate::modules::user::repository_memory::UserRepositoryMemory;
use crate::modules::user::service::UserService;
use crate::modules::user::session::SessionStore;

pub struct Portal {
    auth: Arc<UserService>,
    courses: Arc<CourseService>,
    notifications: Arc<NotificationService>,
    messages: Arc<MessageService>,
    conversations: Arc<ConversationService>,
}

impl Portal {
    /// Builds every service over fresh seed data. Conversations are derived from the
    /// seeded message log before the portal is returned.
    pub async fn with_dependencies(
        env: &Env,
        store: Arc<dyn KeyValueStore + Send + Sync>,
        toasts: Arc<dyn ToastSink + Send + Sync>,
    ) -> Result<Self, error::SystemError> {
        let message_repo = Arc::new(MessageRepositoryMemory::seeded());
        let conversation_repo = Arc::new(ConversationRepositoryMemory::default());

        let auth = UserService::with_dependencies(
            Arc::new(UserRepositoryMemory::seeded()),
            SessionStore::new(store),
            toasts.clone(),
            env.simulated_latency,
        );
        let courses = CourseService::with_dependencies(
            Arc::new(CourseRepositoryMemory::seeded()),
            Arc::new(AssignmentRepositoryMemory::seeded()),
            toasts.clone(),
        );
        let notifications = NotificationService::with_dependencies(
            Arc::new(NotificationRepositoryMemory::seeded()),
            toasts.clone(),
        );
        let messages = MessageService::with_dependencies(
            message_repo.clone(),
            conversation_repo.clone(),
            toasts,
        );
        let conversations =
            ConversationService::with_dependencies(conversation_repo, message_repo);
        conversations.rebuild().await?;

        Ok(Portal {
            auth: Arc::new(auth),
            courses: Arc::new(courses),
            notifications: Arc::new(notifications),
            messages: Arc::new(messages),
            conversations: Arc::new(conversations),
        })
    }

    /// Connects the configured session store, builds the portal and restores any
    /// persisted session.
    pub async fn bootstrap(
        env: &Env,
        toasts: Arc<dyn ToastSink + Send + Sync>,
    ) -> Result<Self, error::SystemError> {
        let store = connect_store(env).await?;
        let portal = Self::with_dependencies(env, store, toasts).await?;
        match portal.auth.restore_session().await {
            Some(user) => info!("Portal ready, signed in as {} ({:?})", user.email, user.role),
            None => info!("Portal ready, no active session"),
        }
        Ok(portal)
    }

    pub fn auth(&self) -> &Arc<UserService> {
        &self.auth
    }

    pub fn courses(&self) -> &Arc<CourseService> {
        &self.courses
    }

    pub fn notifications(&self) -> &Arc<NotificationService> {
        &self.notifications
    }

    pub fn messages(&self) -> &Arc<MessageService> {
        &self.messages
    }

    pub fn conversations(&self) -> &Arc<ConversationService> {
        &self.conversations
    }
}

#[cfg(test)]
mod tests {
    use crate::modules::user::model::SignInModel;
    use crate::test::{memory_portal, portal_over};
    use crate::configs::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_portal_starts_from_seed() {
        let (portal, _) = memory_portal().await;
        assert_eq!(portal.courses().courses().await.unwrap().len(), 4);
        assert_eq!(portal.courses().student_assignments().await.unwrap().len(), 4);
        assert_eq!(portal.notifications().notifications().await.unwrap().len(), 5);
        assert_eq!(portal.messages().messages().await.unwrap().len(), 5);
        assert_eq!(portal.conversations().conversations().await.unwrap().len(), 2);
        assert_eq!(portal.auth().current_user(), None);
    }

    #[tokio::test]
    async fn test_message_sent_through_portal_shows_in_conversations() {
        let (portal, toasts) = memory_portal().await;
        portal.messages().send_message("4", "2", "Thanks!").await.unwrap();

        let for_mike = portal.conversations().get_conversations_for_user("4").await.unwrap();
        assert_eq!(for_mike.len(), 1);
        assert_eq!(for_mike[0].last_message.content, "Thanks!");
        assert_eq!(for_mike[0].unread_count, 2);
        assert_eq!(toasts.titles(), vec!["Message Sent"]);
    }

    #[tokio::test]
    async fn test_session_survives_portal_restart() {
        let kv = Arc::new(MemoryStore::new());
        let (first, _) = portal_over(kv.clone()).await;
        let sarah = first
            .auth()
            .sign_in(SignInModel {
                email: "sarah.johnson@college.edu".into(),
                password: String::new(),
            })
            .await
            .unwrap();

        let (second, _) = portal_over(kv).await;
        assert_eq!(second.auth().restore_session().await, Some(sarah));
    }

    #[tokio::test]
    async fn test_portals_do_not_share_state() {
        let (first, _) = memory_portal().await;
        let (second, _) = memory_portal().await;
        first.courses().enroll_in_course("1", "1").await.unwrap();
        let untouched = second.courses().get_course("1").await.unwrap().unwrap();
        assert_eq!(untouched.enrolled_students, 120);
    }
}
