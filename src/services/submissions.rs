//! Submission-related APIs
use reqwest::Method;

use crate::{
    enums::{SubmissionInclude, SubmissionType},
    model::Submission,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Lists the submissions of an assignment.
#[derive(Debug, Clone, Default)]
pub struct ListAssignmentSubmissionsCourses {
    pub course_id: String,
    pub assignment_id: String,
    pub include: Vec<SubmissionInclude>,
    /// Groups submissions of group assignments.
    pub grouped: Option<bool>,
}

impl ListAssignmentSubmissionsCourses {
    pub fn new(course_id: impl Into<String>, assignment_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            assignment_id: assignment_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListAssignmentSubmissionsCourses {
    type Output = Vec<Submission>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{assignment_id}/submissions",
            &[
                ("course_id", &self.course_id),
                ("assignment_id", &self.assignment_id),
            ],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("grouped", &self.grouped);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("assignment_id", &self.assignment_id)
            .finish()
    }
}

/// Gets a single submission of a user.
#[derive(Debug, Clone, Default)]
pub struct GetSingleSubmissionCourses {
    pub course_id: String,
    pub assignment_id: String,
    pub user_id: String,
    pub include: Vec<SubmissionInclude>,
}

impl GetSingleSubmissionCourses {
    pub fn new(
        course_id: impl Into<String>,
        assignment_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            assignment_id: assignment_id.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetSingleSubmissionCourses {
    type Output = Submission;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{assignment_id}/submissions/{user_id}",
            &[
                ("course_id", &self.course_id),
                ("assignment_id", &self.assignment_id),
                ("user_id", &self.user_id),
            ],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("assignment_id", &self.assignment_id)
            .require_segment("user_id", &self.user_id)
            .finish()
    }
}

/// Makes a submission for an assignment on behalf of the current user.
#[derive(Debug, Clone)]
pub struct SubmitAssignmentCourses {
    pub course_id: String,
    pub assignment_id: String,
    pub submission_type: SubmissionType,
    pub text_comment: Option<String>,
    /// Content for `online_text_entry`.
    pub body: Option<String>,
    /// Target for `online_url`.
    pub url: Option<String>,
    /// Previously uploaded files for `online_upload`.
    pub file_ids: Vec<i64>,
    pub submitted_at: Option<String>,
}

impl SubmitAssignmentCourses {
    pub fn new(
        course_id: impl Into<String>,
        assignment_id: impl Into<String>,
        submission_type: SubmissionType,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            assignment_id: assignment_id.into(),
            submission_type,
            text_comment: None,
            body: None,
            url: None,
            file_ids: Vec::new(),
            submitted_at: None,
        }
    }
}

impl Request for SubmitAssignmentCourses {
    type Output = Submission;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{assignment_id}/submissions",
            &[
                ("course_id", &self.course_id),
                ("assignment_id", &self.assignment_id),
            ],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("comment[text_comment]", &self.text_comment)
            .push("submission[submission_type]", self.submission_type)
            .push_opt("submission[body]", &self.body)
            .push_opt("submission[url]", &self.url)
            .push_list("submission[file_ids]", &self.file_ids)
            .push_opt("submission[submitted_at]", &self.submitted_at);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        let mut v = Validator::new();
        v.require_segment("course_id", &self.course_id)
            .require_segment("assignment_id", &self.assignment_id);

        match self.submission_type {
            SubmissionType::OnlineTextEntry => {
                v.require_some("submission[body]", &self.body);
            }
            SubmissionType::OnlineUrl => {
                v.require_some("submission[url]", &self.url);
            }
            SubmissionType::OnlineUpload => {
                v.require_non_empty("submission[file_ids]", &self.file_ids);
            }
            SubmissionType::MediaRecording
            | SubmissionType::BasicLtiLaunch
            | SubmissionType::StudentAnnotation => {}
            other => {
                v.check(
                    false,
                    format!("'submission[submission_type]' cannot be {}", other),
                );
            }
        }

        v.finish()
    }
}

/// Grades or comments on a user's submission.
#[derive(Debug, Clone, Default)]
pub struct GradeOrCommentOnSubmissionCourses {
    pub course_id: String,
    pub assignment_id: String,
    pub user_id: String,
    pub text_comment: Option<String>,
    /// Sends the comment to the whole group for group assignments.
    pub group_comment: Option<bool>,
    /// Points, percentage (`"40%"`), letter grade or `pass`/`complete`.
    pub posted_grade: Option<String>,
    pub excuse: Option<bool>,
    pub late_policy_status: Option<String>,
}

impl GradeOrCommentOnSubmissionCourses {
    pub fn new(
        course_id: impl Into<String>,
        assignment_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            assignment_id: assignment_id.into(),
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl Request for GradeOrCommentOnSubmissionCourses {
    type Output = Submission;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{assignment_id}/submissions/{user_id}",
            &[
                ("course_id", &self.course_id),
                ("assignment_id", &self.assignment_id),
                ("user_id", &self.user_id),
            ],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("comment[text_comment]", &self.text_comment)
            .push_opt("comment[group_comment]", &self.group_comment)
            .push_opt("submission[posted_grade]", &self.posted_grade)
            .push_opt("submission[excuse]", &self.excuse)
            .push_opt("submission[late_policy_status]", &self.late_policy_status);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("assignment_id", &self.assignment_id)
            .require_segment("user_id", &self.user_id)
            .finish()
    }
}
