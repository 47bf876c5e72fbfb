//! Course-related APIs
use reqwest::Method;

use crate::{
    enums::{
        CourseEvent, CourseInclude, CourseState, CourseUpdateEvent, EnrollmentRole,
        EnrollmentState, UserInclude,
    },
    model::{Course, DeleteCourseResult, User},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of a course, sent as `course[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub license: Option<String>,
    pub is_public: Option<bool>,
    pub public_description: Option<String>,
    pub syllabus_body: Option<String>,
    pub time_zone: Option<String>,
    pub default_view: Option<String>,
    pub sis_course_id: Option<String>,
    pub term_id: Option<String>,
}

impl CourseForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("course[name]", &self.name)
            .push_opt("course[course_code]", &self.course_code)
            .push_opt("course[start_at]", &self.start_at)
            .push_opt("course[end_at]", &self.end_at)
            .push_opt("course[license]", &self.license)
            .push_opt("course[is_public]", &self.is_public)
            .push_opt("course[public_description]", &self.public_description)
            .push_opt("course[syllabus_body]", &self.syllabus_body)
            .push_opt("course[time_zone]", &self.time_zone)
            .push_opt("course[default_view]", &self.default_view)
            .push_opt("course[sis_course_id]", &self.sis_course_id)
            .push_opt("course[term_id]", &self.term_id);
    }
}

/// Returns the paginated list of active courses for the current user.
#[derive(Debug, Clone, Default)]
pub struct ListYourCourses {
    pub enrollment_type: Option<EnrollmentRole>,
    pub enrollment_state: Option<EnrollmentState>,
    pub exclude_blueprint_courses: Option<bool>,
    pub include: Vec<CourseInclude>,
    pub state: Vec<CourseState>,
}

impl Request for ListYourCourses {
    type Output = Vec<Course>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        "courses".to_owned()
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("enrollment_type", &self.enrollment_type)
            .push_opt("enrollment_state", &self.enrollment_state)
            .push_opt("exclude_blueprint_courses", &self.exclude_blueprint_courses)
            .push_list("include", &self.include)
            .push_list("state", &self.state);
        q
    }
}

/// Returns the paginated list of active courses for a user.
#[derive(Debug, Clone, Default)]
pub struct ListCoursesForUser {
    pub user_id: String,
    pub enrollment_state: Option<EnrollmentState>,
    pub include: Vec<CourseInclude>,
    pub state: Vec<CourseState>,
}

impl ListCoursesForUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListCoursesForUser {
    type Output = Vec<Course>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("users/{user_id}/courses", &[("user_id", &self.user_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("enrollment_state", &self.enrollment_state)
            .push_list("include", &self.include)
            .push_list("state", &self.state);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("user_id", &self.user_id).finish()
    }
}

/// Returns information on a single course.
#[derive(Debug, Clone, Default)]
pub struct GetSingleCourse {
    pub id: String,
    pub include: Vec<CourseInclude>,
}

impl GetSingleCourse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetSingleCourse {
    type Output = Course;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{id}", &[("id", &self.id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Creates a new course in an account.
#[derive(Debug, Clone, Default)]
pub struct CreateNewCourse {
    pub account_id: String,
    pub course: CourseForm,
    /// Makes the course available to students immediately.
    pub offer: Option<bool>,
    /// Enrolls the caller as the teacher.
    pub enroll_me: Option<bool>,
    pub enable_sis_reactivation: Option<bool>,
}

impl CreateNewCourse {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateNewCourse {
    type Output = Course;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("accounts/{account_id}/courses", &[("account_id", &self.account_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.course.write(&mut form);
        form.push_opt("offer", &self.offer)
            .push_opt("enroll_me", &self.enroll_me)
            .push_opt("enable_sis_reactivation", &self.enable_sis_reactivation);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .finish()
    }
}

/// Updates an existing course.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourse {
    pub id: String,
    pub course: CourseForm,
    pub event: Option<CourseUpdateEvent>,
    pub offer: Option<bool>,
}

impl UpdateCourse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for UpdateCourse {
    type Output = Course;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand("courses/{id}", &[("id", &self.id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.course.write(&mut form);
        form.push_opt("course[event]", &self.event)
            .push_opt("offer", &self.offer);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Deletes or concludes an existing course.
#[derive(Debug, Clone)]
pub struct DeleteConcludeCourse {
    pub id: String,
    pub event: CourseEvent,
}

impl DeleteConcludeCourse {
    pub fn new(id: impl Into<String>, event: CourseEvent) -> Self {
        Self {
            id: id.into(),
            event,
        }
    }
}

impl Request for DeleteConcludeCourse {
    type Output = DeleteCourseResult;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand("courses/{id}", &[("id", &self.id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push("event", self.event);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Returns the paginated list of users in a course.
#[derive(Debug, Clone, Default)]
pub struct ListUsersInCourse {
    pub course_id: String,
    pub search_term: Option<String>,
    pub enrollment_type: Vec<EnrollmentRole>,
    pub enrollment_state: Vec<EnrollmentState>,
    pub include: Vec<UserInclude>,
    pub user_ids: Vec<i64>,
}

impl ListUsersInCourse {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListUsersInCourse {
    type Output = Vec<User>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/users", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("search_term", &self.search_term)
            .push_list("enrollment_type", &self.enrollment_type)
            .push_list("enrollment_state", &self.enrollment_state)
            .push_list("include", &self.include)
            .push_list("user_ids", &self.user_ids);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .check(
                self.search_term.as_ref().map_or(true, |s| s.chars().count() >= 2),
                "'search_term' must be at least 2 characters",
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Client;
    use wiremock::{
        matchers::{body_string_contains, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_list_your_courses() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            r#"[{
                "id": 1,
                "name": "Biology",
                "course_code": "BIO-101",
                "workflow_state": "available",
                "term": {"id": 4, "name": "Fall"}
            }, {
                "id": 2,
                "name": "Chemistry",
                "course_code": "CHEM-101",
                "workflow_state": "unpublished"
            }]"#,
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/api/v1/courses"))
            .and(query_param("enrollment_type", "teacher"))
            .and(query_param("include[]", "term"))
            .and(header("Authorization", "Bearer token"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), Some("token")).await.unwrap();
        let courses = ListYourCourses {
            enrollment_type: Some(EnrollmentRole::Teacher),
            include: vec![CourseInclude::Term],
            ..Default::default()
        }
        .send(&client)
        .await
        .unwrap();

        drop(server);
        let expected = [
            (1, "Biology", "BIO-101", CourseState::Available),
            (2, "Chemistry", "CHEM-101", CourseState::Unpublished),
        ];

        assert_eq!(courses.len(), 2);
        for (c, e) in courses.iter().zip(expected.iter()) {
            assert_eq!(c.id, e.0);
            assert_eq!(c.name.as_deref(), Some(e.1));
            assert_eq!(c.course_code.as_deref(), Some(e.2));
            assert_eq!(c.workflow_state, Some(e.3));
        }
        assert_eq!(courses[0].term.as_ref().unwrap().name, "Fall");
    }

    #[tokio::test]
    async fn test_get_single_course_sis_id() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200)
            .set_body_raw(r#"{"id": 5, "name": "History"}"#, "application/json");
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/sis_course_id:HIST%20200"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let course = GetSingleCourse::new("sis_course_id:HIST 200")
            .send(&client)
            .await
            .unwrap();

        assert_eq!(course.id, 5);
    }

    #[tokio::test]
    async fn test_create_new_course() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            r#"{"id": 10, "name": "Physics", "course_code": "PHY"}"#,
            "application/json",
        );
        Mock::given(method("POST"))
            .and(path("/api/v1/accounts/1/courses"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("course%5Bname%5D=Physics"))
            .and(body_string_contains("course%5Bcourse_code%5D=PHY"))
            .and(body_string_contains("offer=true"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let mut req = CreateNewCourse::new("1");
        req.course.name = Some("Physics".to_string());
        req.course.course_code = Some("PHY".to_string());
        req.offer = Some(true);
        let course = req.send(&client).await.unwrap();

        assert_eq!(course.id, 10);
        assert_eq!(course.course_code.as_deref(), Some("PHY"));
    }

    #[tokio::test]
    async fn test_delete_conclude_course() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/courses/3"))
            .and(query_param("event", "conclude"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"conclude": true}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let result = DeleteConcludeCourse::new("3", CourseEvent::Conclude)
            .send(&client)
            .await
            .unwrap();

        assert_eq!(result.conclude, Some(true));
        assert_eq!(result.delete, None);
    }

    #[test]
    fn test_update_course_body() {
        let mut req = UpdateCourse::new("8");
        req.course.syllabus_body = Some("<p>Week 1</p>".to_string());
        req.event = Some(CourseUpdateEvent::Offer);

        let form = match req.body().unwrap() {
            Some(RequestBody::Form(form)) => form,
            other => panic!("unexpected body: {:?}", other),
        };
        assert_eq!(form.get("course[syllabus_body]"), Some("<p>Week 1</p>"));
        assert_eq!(form.get("course[event]"), Some("offer"));
        assert_eq!(form.get("course[name]"), None);
        assert_eq!(req.method(), Method::PUT);
        assert_eq!(req.url_path(), "courses/8");
    }

    #[test]
    fn test_list_users_in_course_validation() {
        let req = ListUsersInCourse {
            search_term: Some("a".to_string()),
            ..Default::default()
        };

        let err = req.has_errors().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid request: 'course_id' is required, 'search_term' must be at least 2 characters"
        );
    }
}
