use std::sync::Arc;

use crate::{api::error, modules::user::schema::UserEntity};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserEntity>, error::SystemError>;
    /// Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_all(&self) -> Result<Arc<Vec<UserEntity>>, error::SystemError>;
    /// Fails with `Conflict` when the email is already registered.
    async fn create(&self, user: &UserEntity) -> Result<(), error::SystemError>;
    async fn delete(&self, id: &str) -> Result<bool, error::SystemError>;
}
