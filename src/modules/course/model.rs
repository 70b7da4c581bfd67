use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COVER_IMAGE;
use crate::modules::course::schema::{
    AssignmentEntity, AssignmentStatus, CourseEntity, CourseLevel, CourseModule, Quiz, QuizAnswer,
};
use crate::modules::user::schema::UserEntity;

/// Fields for a new course; anything left unset gets a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub instructor: UserEntity,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub modules: Option<Vec<CourseModule>>,
}

impl CourseDraft {
    pub fn new(instructor: UserEntity) -> Self {
        Self {
            instructor,
            title: None,
            description: None,
            cover_image: None,
            duration: None,
            level: None,
            modules: None,
        }
    }

    pub fn into_course(self, id: String, now: DateTime<Utc>) -> CourseEntity {
        CourseEntity {
            id,
            title: self.title.unwrap_or_else(|| "New Course".to_string()),
            description: self.description.unwrap_or_else(|| "Course description".to_string()),
            instructor: self.instructor,
            cover_image: self.cover_image.unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
            created_at: now,
            updated_at: now,
            enrolled_students: 0,
            duration: self.duration.unwrap_or_else(|| "10 weeks".to_string()),
            level: self.level.unwrap_or(CourseLevel::Beginner),
            modules: self.modules.unwrap_or_default(),
        }
    }
}

/// Partial update merged into an existing course.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<UserEntity>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub enrolled_students: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<CourseLevel>,
    #[serde(default)]
    pub modules: Option<Vec<CourseModule>>,
}

impl CoursePatch {
    pub fn apply(self, course: &CourseEntity, now: DateTime<Utc>) -> CourseEntity {
        CourseEntity {
            id: course.id.clone(),
            title: self.title.unwrap_or_else(|| course.title.clone()),
            description: self.description.unwrap_or_else(|| course.description.clone()),
            instructor: self.instructor.unwrap_or_else(|| course.instructor.clone()),
            cover_image: self.cover_image.unwrap_or_else(|| course.cover_image.clone()),
            created_at: course.created_at,
            updated_at: now,
            enrolled_students: self.enrolled_students.unwrap_or(course.enrolled_students),
            duration: self.duration.unwrap_or_else(|| course.duration.clone()),
            level: self.level.unwrap_or(course.level),
            modules: self.modules.unwrap_or_else(|| course.modules.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionDraft {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Per-status counts of the student's assignments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentStats {
    pub upcoming: usize,
    pub active: usize,
    pub submitted: usize,
    pub graded: usize,
}

impl AssignmentStats {
    pub fn from_assignments(assignments: &[AssignmentEntity]) -> Self {
        assignments.iter().fold(AssignmentStats::default(), |mut acc, a| {
            match a.status {
                AssignmentStatus::Upcoming => acc.upcoming += 1,
                AssignmentStatus::Active => acc.active += 1,
                AssignmentStatus::Submitted => acc.submitted += 1,
                AssignmentStatus::Graded => acc.graded += 1,
            }
            acc
        })
    }
}

/// Sum of the points of every correctly answered question. Unknown question ids score
/// nothing; a repeated question counts once.
pub fn score_quiz(quiz: &Quiz, answers: &[QuizAnswer]) -> u32 {
    quiz.questions
        .iter()
        .filter(|question| {
            answers
                .iter()
                .find(|a| a.question_id == question.id)
                .is_some_and(|a| a.answer.matches(&question.correct_answer))
        })
        .map(|question| question.points)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::course::schema::{Answer, QuestionType, QuizQuestion, QuizStatus};
    use crate::seed;

    fn quiz() -> Quiz {
        let question = |id: &str, correct: Answer, points: u32| QuizQuestion {
            id: id.into(),
            question: "?".into(),
            _type: QuestionType::ShortAnswer,
            options: None,
            correct_answer: correct,
            points,
        };
        Quiz {
            id: "q".into(),
            title: "Quiz".into(),
            description: String::new(),
            time_limit: 10,
            questions: vec![
                question("1", Answer::One("x = 5".into()), 1),
                question("2", Answer::Many(vec!["a".into(), "c".into()]), 3),
                question("3", Answer::One("true".into()), 2),
            ],
            due_date: Utc::now(),
            status: QuizStatus::Active,
            attempts: Vec::new(),
        }
    }

    fn answer(id: &str, answer: Answer) -> QuizAnswer {
        QuizAnswer { question_id: id.into(), answer }
    }

    #[test]
    fn test_draft_defaults() {
        let jane = seed::users().remove(1);
        let now = Utc::now();
        let course = CourseDraft::new(jane.clone()).into_course("course-x".into(), now);
        assert_eq!(course.title, "New Course");
        assert_eq!(course.description, "Course description");
        assert_eq!(course.cover_image, DEFAULT_COVER_IMAGE);
        assert_eq!(course.duration, "10 weeks");
        assert_eq!(course.level, CourseLevel::Beginner);
        assert_eq!(course.enrolled_students, 0);
        assert!(course.modules.is_empty());
        assert_eq!(course.instructor, jane);
        assert_eq!(course.created_at, now);
        assert_eq!(course.updated_at, now);
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let course = seed::courses().remove(0);
        let now = Utc::now();
        let patch = CoursePatch { title: Some("Programming 101".into()), ..Default::default() };
        let updated = patch.apply(&course, now);
        assert_eq!(updated.title, "Programming 101");
        assert_eq!(updated.description, course.description);
        assert_eq!(updated.modules, course.modules);
        assert_eq!(updated.created_at, course.created_at);
        assert_eq!(updated.updated_at, now);
    }

    #[test]
    fn test_patch_deserializes_camel_case() {
        let patch: CoursePatch =
            serde_json::from_str(r#"{"coverImage":"img.png","level":"advanced"}"#).unwrap();
        assert_eq!(patch.cover_image.as_deref(), Some("img.png"));
        assert_eq!(patch.level, Some(CourseLevel::Advanced));
        assert!(patch.title.is_none());
    }

    #[test]
    fn test_stats_count_each_status() {
        let stats = AssignmentStats::from_assignments(&seed::student_assignments());
        assert_eq!(stats, AssignmentStats { upcoming: 1, active: 1, submitted: 1, graded: 1 });
    }

    #[test]
    fn test_score_quiz_sums_correct_answers() {
        let answers = vec![
            answer("1", Answer::One("X = 5".into())),
            answer("2", Answer::Many(vec!["c".into(), "a".into()])),
            answer("3", Answer::One("false".into())),
            answer("99", Answer::One("anything".into())),
        ];
        assert_eq!(score_quiz(&quiz(), &answers), 4);
        assert_eq!(score_quiz(&quiz(), &[]), 0);
    }
}
