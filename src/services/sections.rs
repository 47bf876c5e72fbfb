//! Section-related APIs
use reqwest::Method;

use crate::{
    model::Section,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of a section, sent as `course_section[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionForm {
    pub name: Option<String>,
    pub sis_section_id: Option<String>,
    pub integration_id: Option<String>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub restrict_enrollments_to_section_dates: Option<bool>,
}

impl SectionForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("course_section[name]", &self.name)
            .push_opt("course_section[sis_section_id]", &self.sis_section_id)
            .push_opt("course_section[integration_id]", &self.integration_id)
            .push_opt("course_section[start_at]", &self.start_at)
            .push_opt("course_section[end_at]", &self.end_at)
            .push_opt(
                "course_section[restrict_enrollments_to_section_dates]",
                &self.restrict_enrollments_to_section_dates,
            );
    }
}

/// Lists the sections of a course.
#[derive(Debug, Clone, Default)]
pub struct ListCourseSections {
    pub course_id: String,
    /// Only `students`, `avatar_url`, `enrollments`, `total_students`
    /// and `passback_status` are understood.
    pub include: Vec<String>,
}

impl ListCourseSections {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListCourseSections {
    type Output = Vec<Section>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/sections", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Creates a section in a course.
#[derive(Debug, Clone, Default)]
pub struct CreateCourseSection {
    pub course_id: String,
    pub section: SectionForm,
    pub enable_sis_reactivation: Option<bool>,
}

impl CreateCourseSection {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateCourseSection {
    type Output = Section;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/sections", &[("course_id", &self.course_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.section.write(&mut form);
        form.push_opt("enable_sis_reactivation", &self.enable_sis_reactivation);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Gets details about a section of a course.
#[derive(Debug, Clone, Default)]
pub struct GetSectionInformationCourses {
    pub course_id: String,
    pub id: String,
}

impl GetSectionInformationCourses {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for GetSectionInformationCourses {
    type Output = Section;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/sections/{id}",
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

/// Modifies an existing section.
#[derive(Debug, Clone, Default)]
pub struct EditSection {
    pub id: String,
    pub section: SectionForm,
}

impl EditSection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for EditSection {
    type Output = Section;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand("sections/{id}", &[("id", &self.id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.section.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Deletes a section. Fails if the section still has enrollments.
#[derive(Debug, Clone, Default)]
pub struct DeleteSection {
    pub id: String,
}

impl DeleteSection {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for DeleteSection {
    type Output = Section;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand("sections/{id}", &[("id", &self.id)])
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Moves a section into another course.
#[derive(Debug, Clone, Default)]
pub struct CrossListSection {
    pub id: String,
    pub new_course_id: String,
    pub override_sis_stickiness: Option<bool>,
}

impl CrossListSection {
    pub fn new(id: impl Into<String>, new_course_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            new_course_id: new_course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CrossListSection {
    type Output = Section;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "sections/{id}/crosslist/{new_course_id}",
            &[("id", &self.id), ("new_course_id", &self.new_course_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("override_sis_stickiness", &self.override_sis_stickiness);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("id", &self.id)
            .require_segment("new_course_id", &self.new_course_id)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Client;
    use wiremock::{
        matchers::{body_string, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_create_course_section() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/1/sections"))
            .and(body_string(
                "course_section%5Bname%5D=Lab+A&course_section%5Bstart_at%5D=2024-01-08T00%3A00%3A00Z",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id": 20, "name": "Lab A", "course_id": 1}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let mut req = CreateCourseSection::new("1");
        req.section.name = Some("Lab A".to_string());
        req.section.start_at = Some("2024-01-08T00:00:00Z".to_string());
        let section = req.send(&client).await.unwrap();

        assert_eq!(section.id, 20);
        assert_eq!(section.course_id, Some(1));
    }

    #[tokio::test]
    async fn test_cross_list_section() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sections/20/crosslist/5"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id": 20, "name": "Lab A", "course_id": 5, "nonxlist_course_id": 1}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let section = CrossListSection::new("20", "5")
            .send(&client)
            .await
            .unwrap();

        assert_eq!(section.course_id, Some(5));
        assert_eq!(section.nonxlist_course_id, Some(1));
    }

    #[test]
    fn test_cross_list_section_validation() {
        let err = CrossListSection::default().has_errors().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid request: 'id' is required, 'new_course_id' is required"
        );
    }
}
