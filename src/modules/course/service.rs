/// Course Service
///
/// Catalogue queries and mutations plus the student's assignment workflow. Mutations on
/// unknown ids are silent no-ops; only status rule violations are reported as errors.
use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::api::toast::{Toast, ToastSink};
use crate::modules::course::model::{
    score_quiz, AssignmentStats, CourseDraft, CoursePatch, SubmissionDraft,
};
use crate::modules::course::repository::{AssignmentRepository, CourseRepository};
use crate::modules::course::schema::{
    AssignmentEntity, AssignmentStatus, AssignmentSubmission, CourseEntity, CourseLevel,
    QuizAnswer, QuizAttempt,
};
use crate::utils::new_id;

pub struct CourseService {
    course_repo: Arc<dyn CourseRepository + Send + Sync>,
    assignment_repo: Arc<dyn AssignmentRepository + Send + Sync>,
    toasts: Arc<dyn ToastSink + Send + Sync>,
}

impl CourseService {
    pub fn with_dependencies(
        course_repo: Arc<dyn CourseRepository + Send + Sync>,
        assignment_repo: Arc<dyn AssignmentRepository + Send + Sync>,
        toasts: Arc<dyn ToastSink + Send + Sync>,
    ) -> Self {
        info!("CourseService initialized with dependencies");
        CourseService { course_repo, assignment_repo, toasts }
    }

    pub async fn courses(&self) -> Result<Arc<Vec<CourseEntity>>, error::SystemError> {
        self.course_repo.find_all().await
    }

    pub async fn get_course(&self, id: &str) -> Result<Option<CourseEntity>, error::SystemError> {
        self.course_repo.find_by_id(id).await
    }

    /// Case-insensitive substring match on title, description or instructor name, in
    /// catalogue order. An empty query returns everything.
    pub async fn search_courses(&self, query: &str) -> Result<Vec<CourseEntity>, error::SystemError> {
        let courses = self.course_repo.find_all().await?;
        if query.is_empty() {
            return Ok(courses.to_vec());
        }

        let needle = query.to_lowercase();
        Ok(courses
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
                    || c.instructor.name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    pub async fn filter_by_level(
        &self,
        query: &str,
        level: Option<CourseLevel>,
    ) -> Result<Vec<CourseEntity>, error::SystemError> {
        let mut courses = self.search_courses(query).await?;
        if let Some(level) = level {
            courses.retain(|c| c.level == level);
        }
        Ok(courses)
    }

    pub async fn get_instructor_courses(
        &self,
        instructor_id: &str,
    ) -> Result<Vec<CourseEntity>, error::SystemError> {
        let courses = self.course_repo.find_all().await?;
        Ok(courses.iter().filter(|c| c.instructor.id == instructor_id).cloned().collect())
    }

    /// Enrollment is not recorded per student, so every course counts as enrolled.
    pub async fn get_enrolled_courses(
        &self,
        _student_id: &str,
    ) -> Result<Vec<CourseEntity>, error::SystemError> {
        Ok(self.course_repo.find_all().await?.to_vec())
    }

    /// Bumps the enrollment counter. Repeated calls count again; there is no roster.
    pub async fn enroll_in_course(
        &self,
        course_id: &str,
        student_id: &str,
    ) -> Result<Option<CourseEntity>, error::SystemError> {
        let updated = self
            .course_repo
            .modify(
                course_id,
                Box::new(|course: &CourseEntity| {
                    Ok(CourseEntity {
                        enrolled_students: course.enrolled_students.saturating_add(1),
                        ..course.clone()
                    })
                }),
            )
            .await?;

        if let Some(course) = &updated {
            info!("Student {} enrolled in course {}", student_id, course.id);
            self.toasts.emit(
                Toast::ok("Enrolled Successfully")
                    .description("You have been enrolled in the course."),
            );
        }
        Ok(updated)
    }

    pub async fn create_course(&self, draft: CourseDraft) -> Result<CourseEntity, error::SystemError> {
        let course = draft.into_course(new_id("course"), chrono::Utc::now());
        self.course_repo.insert(course.clone()).await?;
        info!("Course {} created by {}", course.id, course.instructor.id);
        self.toasts.emit(
            Toast::ok("Course Created").description("The course has been created successfully."),
        );
        Ok(course)
    }

    pub async fn update_course(
        &self,
        id: &str,
        patch: CoursePatch,
    ) -> Result<Option<CourseEntity>, error::SystemError> {
        let now = chrono::Utc::now();
        let updated = self
            .course_repo
            .modify(id, Box::new(move |course: &CourseEntity| Ok(patch.apply(course, now))))
            .await?;

        if updated.is_some() {
            self.toasts.emit(
                Toast::ok("Course Updated").description("The course has been updated successfully."),
            );
        }
        Ok(updated)
    }

    pub async fn delete_course(&self, id: &str) -> Result<bool, error::SystemError> {
        let deleted = self.course_repo.delete(id).await?;
        if deleted {
            info!("Course {} deleted", id);
            self.toasts.emit(
                Toast::ok("Course Deleted").description("The course has been deleted successfully."),
            );
        }
        Ok(deleted)
    }

    pub async fn student_assignments(
        &self,
    ) -> Result<Arc<Vec<AssignmentEntity>>, error::SystemError> {
        self.assignment_repo.find_all().await
    }

    pub async fn assignment_stats(&self) -> Result<AssignmentStats, error::SystemError> {
        let assignments = self.assignment_repo.find_all().await?;
        Ok(AssignmentStats::from_assignments(&assignments))
    }

    /// Attaches a fresh submission and moves the assignment to `submitted`. A graded
    /// assignment cannot be resubmitted.
    pub async fn submit_assignment(
        &self,
        assignment_id: &str,
        student_id: &str,
        draft: SubmissionDraft,
    ) -> Result<Option<AssignmentEntity>, error::SystemError> {
        let submission = AssignmentSubmission {
            id: new_id("submission"),
            student_id: student_id.to_string(),
            assignment_id: assignment_id.to_string(),
            submitted_at: chrono::Utc::now(),
            content: draft.content,
            attachments: draft.attachments,
            grade: None,
            feedback: None,
        };

        let updated = self
            .assignment_repo
            .modify_by_id(
                assignment_id,
                Box::new(move |assignment: &AssignmentEntity| {
                    if assignment.status == AssignmentStatus::Graded {
                        return Err(error::SystemError::invalid(
                            "Assignment has already been graded",
                        ));
                    }
                    Ok(AssignmentEntity {
                        status: AssignmentStatus::Submitted,
                        submission: Some(submission),
                        ..assignment.clone()
                    })
                }),
            )
            .await?;

        if let Some(assignment) = &updated {
            info!("Assignment {} submitted by {}", assignment.id, student_id);
            self.toasts.emit(
                Toast::ok("Assignment Submitted")
                    .description("Your assignment has been submitted successfully."),
            );
        }
        Ok(updated)
    }

    pub async fn grade_assignment(
        &self,
        submission_id: &str,
        grade: f64,
        feedback: &str,
    ) -> Result<Option<AssignmentEntity>, error::SystemError> {
        let feedback = feedback.to_string();
        let updated = self
            .assignment_repo
            .modify_by_submission_id(
                submission_id,
                Box::new(move |assignment: &AssignmentEntity| {
                    let submission = assignment.submission.clone().map(|s| AssignmentSubmission {
                        grade: Some(grade),
                        feedback: Some(feedback),
                        ..s
                    });
                    Ok(AssignmentEntity {
                        status: AssignmentStatus::Graded,
                        submission,
                        ..assignment.clone()
                    })
                }),
            )
            .await?;

        if let Some(assignment) = &updated {
            info!("Assignment {} graded", assignment.id);
            self.toasts.emit(
                Toast::ok("Assignment Graded")
                    .description("The assignment has been graded successfully."),
            );
        }
        Ok(updated)
    }

    /// Records a scored attempt on the quiz inside its course module.
    pub async fn submit_quiz(
        &self,
        quiz_id: &str,
        student_id: &str,
        answers: Vec<QuizAnswer>,
    ) -> Result<Option<QuizAttempt>, error::SystemError> {
        let courses = self.course_repo.find_all().await?;
        let Some(course_id) = courses
            .iter()
            .find(|c| c.modules.iter().any(|m| m.quiz.as_ref().is_some_and(|q| q.id == quiz_id)))
            .map(|c| c.id.clone())
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now();
        let target = quiz_id.to_string();
        let quiz_id = quiz_id.to_string();
        let student_id = student_id.to_string();
        let attempt_id = new_id("attempt");

        let updated = self
            .course_repo
            .modify(
                &course_id,
                Box::new(move |course: &CourseEntity| {
                    let mut next = course.clone();
                    let quiz = next
                        .modules
                        .iter_mut()
                        .filter_map(|m| m.quiz.as_mut())
                        .find(|q| q.id == quiz_id)
                        .ok_or_else(|| error::SystemError::not_found("Quiz not found"))?;
                    let score = score_quiz(quiz, &answers);
                    quiz.attempts.push(QuizAttempt {
                        id: attempt_id,
                        student_id,
                        quiz_id,
                        started_at: now,
                        completed_at: Some(now),
                        score: Some(score),
                        answers,
                    });
                    Ok(next)
                }),
            )
            .await?;

        let attempt = updated.and_then(|course| {
            course
                .modules
                .into_iter()
                .filter_map(|m| m.quiz)
                .find(|q| q.id == target)
                .and_then(|q| q.attempts.last().cloned())
        });
        if attempt.is_some() {
            self.toasts.emit(
                Toast::ok("Quiz Submitted").description("Your quiz has been submitted successfully."),
            );
        }
        Ok(attempt)
    }
}
