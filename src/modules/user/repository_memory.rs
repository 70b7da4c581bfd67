use std::sync::Arc;

use crate::{
    api::error,
    modules::user::{repository::UserRepository, schema::UserEntity},
    seed,
    utils::Snapshot,
};

pub struct UserRepositoryMemory {
    users: Snapshot<UserEntity>,
}

impl UserRepositoryMemory {
    pub fn new(users: Vec<UserEntity>) -> Self {
        Self { users: Snapshot::new(users) }
    }

    pub fn seeded() -> Self {
        Self::new(seed::users())
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryMemory {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.load().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError> {
        Ok(self.users.load().iter().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Arc<Vec<UserEntity>>, error::SystemError> {
        Ok(self.users.load())
    }

    async fn create(&self, user: &UserEntity) -> Result<(), error::SystemError> {
        let inserted = self.users.replace_with(|current| {
            if current.iter().any(|u| u.email == user.email) {
                return None;
            }
            let mut next = current.to_vec();
            next.push(user.clone());
            Some(next)
        });

        if inserted {
            Ok(())
        } else {
            Err(error::SystemError::conflict("Email already in use"))
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, error::SystemError> {
        Ok(self.users.remove_where(|u| u.id == id) > 0)
    }
}
