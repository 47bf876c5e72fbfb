//! Enrollment-related APIs
use reqwest::Method;

use crate::{
    enums::{EnrollmentState, EnrollmentTask, EnrollmentType},
    model::Enrollment,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Filters shared by the enrollment listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentFilter {
    pub r#type: Vec<EnrollmentType>,
    pub role: Vec<String>,
    pub state: Vec<EnrollmentState>,
    /// Only `avatar_url`, `group_ids`, `locked`, `observed_users`,
    /// `can_be_removed` and `uuid` are understood.
    pub include: Vec<String>,
    pub grading_period_id: Option<i64>,
}

impl EnrollmentFilter {
    fn write(&self, q: &mut Params) {
        q.push_list("type", &self.r#type)
            .push_list("role", &self.role)
            .push_list("state", &self.state)
            .push_list("include", &self.include)
            .push_opt("grading_period_id", &self.grading_period_id);
    }
}

/// Lists the enrollments of a course.
#[derive(Debug, Clone, Default)]
pub struct ListEnrollmentsCourses {
    pub course_id: String,
    pub filter: EnrollmentFilter,
    /// Restricts the listing to one user; may be `self` or a `sis_user_id:` id.
    pub user_id: Option<String>,
}

impl ListEnrollmentsCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListEnrollmentsCourses {
    type Output = Vec<Enrollment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/enrollments",
            &[("course_id", &self.course_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        self.filter.write(&mut q);
        q.push_opt("user_id", &self.user_id);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Lists the enrollments of a section.
#[derive(Debug, Clone, Default)]
pub struct ListEnrollmentsSections {
    pub section_id: String,
    pub filter: EnrollmentFilter,
}

impl ListEnrollmentsSections {
    pub fn new(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListEnrollmentsSections {
    type Output = Vec<Enrollment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "sections/{section_id}/enrollments",
            &[("section_id", &self.section_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        self.filter.write(&mut q);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("section_id", &self.section_id)
            .finish()
    }
}

/// Lists the enrollments of a user.
#[derive(Debug, Clone, Default)]
pub struct ListEnrollmentsUsers {
    pub user_id: String,
    pub filter: EnrollmentFilter,
}

impl ListEnrollmentsUsers {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListEnrollmentsUsers {
    type Output = Vec<Enrollment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("users/{user_id}/enrollments", &[("user_id", &self.user_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        self.filter.write(&mut q);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("user_id", &self.user_id).finish()
    }
}

/// Enrolls a user in a course.
#[derive(Debug, Clone)]
pub struct EnrollUserCourses {
    pub course_id: String,
    /// ID of the user to enroll; may be a `sis_user_id:` id.
    pub user_id: String,
    pub r#type: EnrollmentType,
    pub role_id: Option<i64>,
    /// Only `active` and `invited` are accepted by Canvas.
    pub enrollment_state: Option<EnrollmentState>,
    pub course_section_id: Option<i64>,
    pub limit_privileges_to_course_section: Option<bool>,
    pub notify: Option<bool>,
}

impl EnrollUserCourses {
    pub fn new(
        course_id: impl Into<String>,
        user_id: impl Into<String>,
        r#type: EnrollmentType,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            user_id: user_id.into(),
            r#type,
            role_id: None,
            enrollment_state: None,
            course_section_id: None,
            limit_privileges_to_course_section: None,
            notify: None,
        }
    }
}

impl Request for EnrollUserCourses {
    type Output = Enrollment;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/enrollments",
            &[("course_id", &self.course_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push("enrollment[user_id]", &self.user_id)
            .push("enrollment[type]", self.r#type)
            .push_opt("enrollment[role_id]", &self.role_id)
            .push_opt("enrollment[enrollment_state]", &self.enrollment_state)
            .push_opt("enrollment[course_section_id]", &self.course_section_id)
            .push_opt(
                "enrollment[limit_privileges_to_course_section]",
                &self.limit_privileges_to_course_section,
            )
            .push_opt("enrollment[notify]", &self.notify);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require("enrollment[user_id]", &self.user_id)
            .check(
                matches!(
                    self.enrollment_state,
                    None | Some(EnrollmentState::Active) | Some(EnrollmentState::Invited)
                ),
                "'enrollment[enrollment_state]' must be one of active, invited",
            )
            .finish()
    }
}

/// Concludes, deactivates or deletes an enrollment.
#[derive(Debug, Clone)]
pub struct ConcludeDeactivateOrDeleteEnrollment {
    pub course_id: String,
    pub id: String,
    /// Defaults to `conclude` on the server side.
    pub task: Option<EnrollmentTask>,
}

impl ConcludeDeactivateOrDeleteEnrollment {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            task: None,
        }
    }
}

impl Request for ConcludeDeactivateOrDeleteEnrollment {
    type Output = Enrollment;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/enrollments/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("task", &self.task);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("id", &self.id)
            .finish()
    }
}

/// Activates an inactive enrollment.
#[derive(Debug, Clone)]
pub struct ReactivateEnrollment {
    pub course_id: String,
    pub id: String,
}

impl ReactivateEnrollment {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for ReactivateEnrollment {
    type Output = Enrollment;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/enrollments/{id}/reactivate",
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

    const ENROLLMENT: &str = r#"{
        "id": 99,
        "course_id": 1,
        "user_id": 7,
        "type": "StudentEnrollment",
        "enrollment_state": "active",
        "grades": {"current_score": 91.5, "current_grade": "A-"}
    }"#;

    #[tokio::test]
    async fn test_list_enrollments_courses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/enrollments"))
            .and(query_param("type[]", "StudentEnrollment"))
            .and(query_param("state[]", "active"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(format!("[{}]", ENROLLMENT), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let mut req = ListEnrollmentsCourses::new("1");
        req.filter.r#type = vec![EnrollmentType::Student];
        req.filter.state = vec![EnrollmentState::Active];
        let enrollments = req.send(&client).await.unwrap();

        assert_eq!(enrollments.len(), 1);
        let e = &enrollments[0];
        assert_eq!(e.r#type, Some(EnrollmentType::Student));
        assert_eq!(e.enrollment_state, Some(EnrollmentState::Active));
        assert_eq!(e.grades.as_ref().unwrap().current_score, Some(91.5));
    }

    #[tokio::test]
    async fn test_enroll_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/1/enrollments"))
            .and(body_string_contains("enrollment%5Buser_id%5D=7"))
            .and(body_string_contains("enrollment%5Btype%5D=StudentEnrollment"))
            .and(body_string_contains("enrollment%5Bnotify%5D=false"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(ENROLLMENT, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let mut req = EnrollUserCourses::new("1", "7", EnrollmentType::Student);
        req.notify = Some(false);
        let enrollment = req.send(&client).await.unwrap();

        assert_eq!(enrollment.id, 99);
    }

    #[tokio::test]
    async fn test_conclude_enrollment() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/courses/1/enrollments/99"))
            .and(query_param("task", "inactivate"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(ENROLLMENT, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let req = ConcludeDeactivateOrDeleteEnrollment {
            task: Some(EnrollmentTask::Inactivate),
            ..ConcludeDeactivateOrDeleteEnrollment::new("1", "99")
        };
        req.send(&client).await.unwrap();
    }

    #[test]
    fn test_enroll_user_rejects_state() {
        let mut req = EnrollUserCourses::new("1", "", EnrollmentType::Teacher);
        req.enrollment_state = Some(EnrollmentState::Completed);

        assert_eq!(
            req.has_errors().unwrap_err().to_string(),
            "Invalid request: 'enrollment[user_id]' is required, \
             'enrollment[enrollment_state]' must be one of active, invited"
        );
    }

    #[test]
    fn test_reactivate_path() {
        let req = ReactivateEnrollment::new("1", "99");
        assert_eq!(req.url_path(), "courses/1/enrollments/99/reactivate");
        assert_eq!(req.method(), Method::PUT);
    }
}
