//! Assignment-related APIs
use reqwest::Method;

use crate::{
    enums::{AssignmentBucket, AssignmentInclude, AssignmentOrderBy, GradingType, SubmissionType},
    model::Assignment,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of an assignment, sent as `assignment[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    pub submission_types: Vec<SubmissionType>,
    /// File extensions allowed for `online_upload`, without the dot.
    pub allowed_extensions: Vec<String>,
    pub points_possible: Option<f64>,
    pub grading_type: Option<GradingType>,
    pub due_at: Option<String>,
    pub lock_at: Option<String>,
    pub unlock_at: Option<String>,
    pub assignment_group_id: Option<i64>,
    pub peer_reviews: Option<bool>,
    pub omit_from_final_grade: Option<bool>,
    pub published: Option<bool>,
}

impl AssignmentForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("assignment[name]", &self.name)
            .push_opt("assignment[description]", &self.description)
            .push_opt("assignment[position]", &self.position)
            .push_list("assignment[submission_types]", &self.submission_types)
            .push_list("assignment[allowed_extensions]", &self.allowed_extensions)
            .push_opt("assignment[points_possible]", &self.points_possible)
            .push_opt("assignment[grading_type]", &self.grading_type)
            .push_opt("assignment[due_at]", &self.due_at)
            .push_opt("assignment[lock_at]", &self.lock_at)
            .push_opt("assignment[unlock_at]", &self.unlock_at)
            .push_opt("assignment[assignment_group_id]", &self.assignment_group_id)
            .push_opt("assignment[peer_reviews]", &self.peer_reviews)
            .push_opt("assignment[omit_from_final_grade]", &self.omit_from_final_grade)
            .push_opt("assignment[published]", &self.published);
    }

    fn validate(&self, v: &mut Validator) {
        v.check(
            self.points_possible.map_or(true, |p| p >= 0.0),
            "'assignment[points_possible]' must not be negative",
        );
    }
}

/// Lists the assignments of a course.
#[derive(Debug, Clone, Default)]
pub struct ListAssignmentsAssignments {
    pub course_id: String,
    pub include: Vec<AssignmentInclude>,
    pub search_term: Option<String>,
    pub override_assignment_dates: Option<bool>,
    pub needs_grading_count_by_section: Option<bool>,
    pub bucket: Option<AssignmentBucket>,
    pub assignment_ids: Vec<String>,
    pub order_by: Option<AssignmentOrderBy>,
}

impl ListAssignmentsAssignments {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListAssignmentsAssignments {
    type Output = Vec<Assignment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments",
            &[("course_id", &self.course_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("search_term", &self.search_term)
            .push_opt("override_assignment_dates", &self.override_assignment_dates)
            .push_opt(
                "needs_grading_count_by_section",
                &self.needs_grading_count_by_section,
            )
            .push_opt("bucket", &self.bucket)
            .push_list("assignment_ids", &self.assignment_ids)
            .push_opt("order_by", &self.order_by);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Returns a single assignment.
#[derive(Debug, Clone, Default)]
pub struct GetSingleAssignment {
    pub course_id: String,
    pub id: String,
    pub include: Vec<AssignmentInclude>,
    pub override_assignment_dates: Option<bool>,
}

impl GetSingleAssignment {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetSingleAssignment {
    type Output = Assignment;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("override_assignment_dates", &self.override_assignment_dates);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("id", &self.id)
            .finish()
    }
}

/// Creates a new assignment in a course.
#[derive(Debug, Clone, Default)]
pub struct CreateAssignment {
    pub course_id: String,
    pub assignment: AssignmentForm,
}

impl CreateAssignment {
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            assignment: AssignmentForm {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }
}

impl Request for CreateAssignment {
    type Output = Assignment;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments",
            &[("course_id", &self.course_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.assignment.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        let mut v = Validator::new();
        v.require_segment("course_id", &self.course_id)
            .require_some("assignment[name]", &self.assignment.name);
        self.assignment.validate(&mut v);
        v.finish()
    }
}

/// Modifies an existing assignment.
#[derive(Debug, Clone, Default)]
pub struct EditAssignment {
    pub course_id: String,
    pub id: String,
    pub assignment: AssignmentForm,
}

impl EditAssignment {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for EditAssignment {
    type Output = Assignment;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.assignment.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        let mut v = Validator::new();
        v.require_segment("course_id", &self.course_id).require_segment("id", &self.id);
        self.assignment.validate(&mut v);
        v.finish()
    }
}

/// Deletes an assignment and returns it.
#[derive(Debug, Clone, Default)]
pub struct DeleteAssignment {
    pub course_id: String,
    pub id: String,
}

impl DeleteAssignment {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for DeleteAssignment {
    type Output = Assignment;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/assignments/{id}",
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

#[cfg(test)]
mod test {
    use super::*;
    use crate::Client;
    use wiremock::{
        matchers::{body_string_contains, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_list_assignments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/assignments"))
            .and(query_param("bucket", "upcoming"))
            .and(query_param("order_by", "due_at"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{
                    "id": 30,
                    "name": "Essay",
                    "points_possible": 10.0,
                    "grading_type": "points",
                    "submission_types": ["online_text_entry", "online_upload"],
                    "due_at": "2024-02-01T23:59:00Z"
                }]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let req = ListAssignmentsAssignments {
            bucket: Some(AssignmentBucket::Upcoming),
            order_by: Some(AssignmentOrderBy::DueAt),
            ..ListAssignmentsAssignments::new("1")
        };
        let assignments = req.send(&client).await.unwrap();

        assert_eq!(assignments.len(), 1);
        let a = &assignments[0];
        assert_eq!(a.name, "Essay");
        assert_eq!(a.grading_type, Some(GradingType::Points));
        assert_eq!(
            a.submission_types,
            vec![SubmissionType::OnlineTextEntry, SubmissionType::OnlineUpload]
        );
    }

    #[tokio::test]
    async fn test_create_assignment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/1/assignments"))
            .and(body_string_contains("assignment%5Bname%5D=Lab+report"))
            .and(body_string_contains(
                "assignment%5Bsubmission_types%5D%5B%5D=online_upload",
            ))
            .and(body_string_contains(
                "assignment%5Ballowed_extensions%5D%5B%5D=pdf",
            ))
            .and(body_string_contains("assignment%5Bpoints_possible%5D=25"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id": 31, "name": "Lab report", "points_possible": 25}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let mut req = CreateAssignment::new("1", "Lab report");
        req.assignment.submission_types = vec![SubmissionType::OnlineUpload];
        req.assignment.allowed_extensions = vec!["pdf".to_string()];
        req.assignment.points_possible = Some(25.0);
        let assignment = req.send(&client).await.unwrap();

        assert_eq!(assignment.id, 31);
        assert_eq!(assignment.points_possible, Some(25.0));
    }

    #[test]
    fn test_create_assignment_validation() {
        let mut req = CreateAssignment {
            course_id: "1".to_string(),
            ..Default::default()
        };
        req.assignment.points_possible = Some(-1.0);

        assert_eq!(
            req.has_errors().unwrap_err().to_string(),
            "Invalid request: 'assignment[name]' is required, \
             'assignment[points_possible]' must not be negative"
        );
    }

    #[test]
    fn test_delete_assignment_request() {
        let req = DeleteAssignment::new("1", "31");

        assert_eq!(req.method(), Method::DELETE);
        assert_eq!(req.url_path(), "courses/1/assignments/31");
        assert!(req.body().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dot_segment_is_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let err = DeleteAssignment::new("..", "7")
            .send(&client)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid request: 'course_id' must not be a dot segment"
        );
    }
}
