//! Quiz APIs
//!
//! Quiz bodies are sent as JSON rather than form fields.
use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use crate::{
    enums::{HideResults, QuizType},
    model::Quiz,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of a quiz, serialized as the `quiz` JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuizForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_group_id: Option<i64>,
    /// Minutes; `None` means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_answers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_results: Option<HideResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_correct_answers: Option<bool>,
    /// `-1` allows unlimited attempts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_attempts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_question_at_a_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Lists the quizzes of a course.
#[derive(Debug, Clone, Default)]
pub struct ListQuizzesInCourse {
    pub course_id: String,
    pub search_term: Option<String>,
}

impl ListQuizzesInCourse {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListQuizzesInCourse {
    type Output = Vec<Quiz>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/quizzes", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("search_term", &self.search_term);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Returns a single quiz.
#[derive(Debug, Clone, Default)]
pub struct GetSingleQuiz {
    pub course_id: String,
    pub id: String,
}

impl GetSingleQuiz {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for GetSingleQuiz {
    type Output = Quiz;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/quizzes/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("id", &self.id)
            .finish()
    }
}

/// Creates a quiz in a course.
#[derive(Debug, Clone, Default)]
pub struct CreateQuiz {
    pub course_id: String,
    pub quiz: QuizForm,
}

impl CreateQuiz {
    pub fn new(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            quiz: QuizForm {
                title: Some(title.into()),
                ..Default::default()
            },
        }
    }
}

impl Request for CreateQuiz {
    type Output = Quiz;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/quizzes", &[("course_id", &self.course_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        Ok(Some(RequestBody::Json(json!({ "quiz": &self.quiz }))))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_some("quiz.title", &self.quiz.title)
            .check(
                self.quiz.allowed_attempts.map_or(true, |n| n >= -1),
                "'quiz.allowed_attempts' must be -1 or greater",
            )
            .finish()
    }
}

/// Deletes a quiz and returns it.
#[derive(Debug, Clone, Default)]
pub struct DeleteQuiz {
    pub course_id: String,
    pub id: String,
}

impl DeleteQuiz {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for DeleteQuiz {
    type Output = Quiz;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/quizzes/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("id", &self.id)
            .finish()
    }
}
