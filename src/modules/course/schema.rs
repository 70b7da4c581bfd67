use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::modules::user::schema::UserEntity;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pdf,
    Video,
    Link,
    Document,
}

/// Declaration order is the lifecycle order; statuses only move forward.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Upcoming,
    Active,
    Submitted,
    Graded,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: UserEntity,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub enrolled_students: u32,
    pub duration: String,
    pub level: CourseLevel,
    pub modules: Vec<CourseModule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub content: String,
    pub resources: Vec<Resource>,
    pub assignments: Vec<AssignmentEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub _type: ResourceType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub downloadable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentEntity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub points: u32,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission: Option<AssignmentSubmission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    pub id: String,
    pub student_id: String,
    pub assignment_id: String,
    pub submitted_at: DateTime<Utc>,
    pub content: String,
    pub attachments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Minutes.
    pub time_limit: u32,
    pub questions: Vec<QuizQuestion>,
    pub due_date: DateTime<Utc>,
    pub status: QuizStatus,
    #[serde(default)]
    pub attempts: Vec<QuizAttempt>,
}

/// Either a single answer or a set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

impl Answer {
    /// Trimmed, lowercased answer set; order of multi-answers does not matter.
    pub fn normalized(&self) -> BTreeSet<String> {
        match self {
            Answer::One(value) => BTreeSet::from([value.trim().to_lowercase()]),
            Answer::Many(values) => values.iter().map(|v| v.trim().to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, other: &Answer) -> bool {
        self.normalized() == other.normalized()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub _type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: Answer,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub student_id: String,
    pub quiz_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub answers: Vec<QuizAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_order_is_lifecycle_order() {
        assert!(AssignmentStatus::Upcoming < AssignmentStatus::Active);
        assert!(AssignmentStatus::Active < AssignmentStatus::Submitted);
        assert!(AssignmentStatus::Submitted < AssignmentStatus::Graded);
    }

    #[test]
    fn test_answer_matching_ignores_case_whitespace_and_order() {
        assert!(Answer::One(" x = 5 ".into()).matches(&Answer::One("X = 5".into())));
        assert!(Answer::Many(vec!["b".into(), "a".into()])
            .matches(&Answer::Many(vec!["A".into(), "B".into()])));
        assert!(Answer::Many(vec!["true".into()]).matches(&Answer::One("True".into())));
        assert!(!Answer::Many(vec!["a".into()]).matches(&Answer::Many(vec!["a".into(), "b".into()])));
    }

    #[test]
    fn test_answer_deserializes_both_shapes() {
        let one: Answer = serde_json::from_str(r#""x = 5""#).unwrap();
        let many: Answer = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(one, Answer::One("x = 5".into()));
        assert_eq!(many, Answer::Many(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_question_type_wire_names() {
        assert_eq!(serde_json::to_string(&QuestionType::MultipleChoice).unwrap(), r#""multiple-choice""#);
        assert_eq!(serde_json::to_string(&QuestionType::TrueFalse).unwrap(), r#""true-false""#);
    }
}
