use std::sync::Arc;

use crate::{
    api::error,
    modules::course::{
        repository::{AssignmentRepository, CourseRepository},
        schema::{AssignmentEntity, CourseEntity},
    },
    seed,
    utils::{Patch, Snapshot},
};

pub struct CourseRepositoryMemory {
    courses: Snapshot<CourseEntity>,
}

impl CourseRepositoryMemory {
    pub fn new(courses: Vec<CourseEntity>) -> Self {
        Self { courses: Snapshot::new(courses) }
    }

    pub fn seeded() -> Self {
        Self::new(seed::courses())
    }
}

#[async_trait::async_trait]
impl CourseRepository for CourseRepositoryMemory {
    async fn find_all(&self) -> Result<Arc<Vec<CourseEntity>>, error::SystemError> {
        Ok(self.courses.load())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CourseEntity>, error::SystemError> {
        Ok(self.courses.load().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, course: CourseEntity) -> Result<(), error::SystemError> {
        self.courses.push_many(vec![course]);
        Ok(())
    }

    async fn modify(
        &self,
        id: &str,
        patch: Patch<CourseEntity>,
    ) -> Result<Option<CourseEntity>, error::SystemError> {
        self.courses.modify_first(|c| c.id == id, patch)
    }

    async fn delete(&self, id: &str) -> Result<bool, error::SystemError> {
        Ok(self.courses.remove_where(|c| c.id == id) > 0)
    }
}

pub struct AssignmentRepositoryMemory {
    assignments: Snapshot<AssignmentEntity>,
}

impl AssignmentRepositoryMemory {
    pub fn new(assignments: Vec<AssignmentEntity>) -> Self {
        Self { assignments: Snapshot::new(assignments) }
    }

    pub fn seeded() -> Self {
        Self::new(seed::student_assignments())
    }
}

#[async_trait::async_trait]
impl AssignmentRepository for AssignmentRepositoryMemory {
    async fn find_all(&self) -> Result<Arc<Vec<AssignmentEntity>>, error::SystemError> {
        Ok(self.assignments.load())
    }

    async fn modify_by_id(
        &self,
        id: &str,
        patch: Patch<AssignmentEntity>,
    ) -> Result<Option<AssignmentEntity>, error::SystemError> {
        self.assignments.modify_first(|a| a.id == id, patch)
    }

    async fn modify_by_submission_id(
        &self,
        submission_id: &str,
        patch: Patch<AssignmentEntity>,
    ) -> Result<Option<AssignmentEntity>, error::SystemError> {
        self.assignments
            .modify_first(|a| a.submission.as_ref().is_some_and(|s| s.id == submission_id), patch)
    }
}
