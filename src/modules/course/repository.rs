use std::sync::Arc;

use crate::{
    api::error,
    modules::course::schema::{AssignmentEntity, CourseEntity},
    utils::Patch,
};

#[async_trait::async_trait]
pub trait CourseRepository {
    /// Snapshot of the catalogue in insertion order.
    async fn find_all(&self) -> Result<Arc<Vec<CourseEntity>>, error::SystemError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<CourseEntity>, error::SystemError>;
    async fn insert(&self, course: CourseEntity) -> Result<(), error::SystemError>;
    /// `Ok(None)` when no course has this id.
    async fn modify(
        &self,
        id: &str,
        patch: Patch<CourseEntity>,
    ) -> Result<Option<CourseEntity>, error::SystemError>;
    async fn delete(&self, id: &str) -> Result<bool, error::SystemError>;
}

/// The signed-in student's assignment list.
#[async_trait::async_trait]
pub trait AssignmentRepository {
    async fn find_all(&self) -> Result<Arc<Vec<AssignmentEntity>>, error::SystemError>;
    async fn modify_by_id(
        &self,
        id: &str,
        patch: Patch<AssignmentEntity>,
    ) -> Result<Option<AssignmentEntity>, error::SystemError>;
    async fn modify_by_submission_id(
        &self,
        submission_id: &str,
        patch: Patch<AssignmentEntity>,
    ) -> Result<Option<AssignmentEntity>, error::SystemError>;
}
