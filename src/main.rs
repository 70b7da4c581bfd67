use std::sync::Arc;

use campus_portal::{api::toast::LogToastSink, constants::Env, Portal};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let env = Env::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    env_logger::init();
    log::info!("Environment variables loaded from .env file");

    let portal = Portal::bootstrap(&env, Arc::new(LogToastSink))
        .await
        .map_err(|e| std::io::Error::other(format!("Portal bootstrap error: {e}")))?;

    let courses = portal.courses().courses().await.map_err(|e| std::io::Error::other(e.to_string()))?;
    let conversations = portal
        .conversations()
        .conversations()
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    log::info!("{} courses, {} conversations loaded", courses.len(), conversations.len());

    if let Some(user) = portal.auth().current_user() {
        let unread = portal
            .notifications()
            .get_unread_notifications_count(&user.id)
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        log::info!("{} has {} unread notifications", user.name, unread);
    }

    Ok(())
}
