//! Wiki page APIs
use reqwest::Method;

use crate::{
    enums::{EditingRoles, PageSort, SortOrder},
    model::Page,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of a page, sent as `wiki_page[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageForm {
    pub title: Option<String>,
    pub body: Option<String>,
    /// Roles allowed to edit; joined with commas on the wire.
    pub editing_roles: Vec<EditingRoles>,
    pub notify_of_update: Option<bool>,
    pub published: Option<bool>,
    pub front_page: Option<bool>,
    pub publish_at: Option<String>,
}

impl PageForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("wiki_page[title]", &self.title)
            .push_opt("wiki_page[body]", &self.body);
        if !self.editing_roles.is_empty() {
            let roles = self
                .editing_roles
                .iter()
                .map(EditingRoles::as_str)
                .collect::<Vec<_>>()
                .join(",");
            form.push("wiki_page[editing_roles]", roles);
        }
        form.push_opt("wiki_page[notify_of_update]", &self.notify_of_update)
            .push_opt("wiki_page[published]", &self.published)
            .push_opt("wiki_page[front_page]", &self.front_page)
            .push_opt("wiki_page[publish_at]", &self.publish_at);
    }
}

/// Lists the wiki pages of a course.
#[derive(Debug, Clone, Default)]
pub struct ListPagesCourses {
    pub course_id: String,
    pub sort: Option<PageSort>,
    pub order: Option<SortOrder>,
    pub search_term: Option<String>,
    pub published: Option<bool>,
}

impl ListPagesCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListPagesCourses {
    type Output = Vec<Page>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/pages", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("sort", &self.sort)
            .push_opt("order", &self.order)
            .push_opt("search_term", &self.search_term)
            .push_opt("published", &self.published);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Retrieves the content of a page. `url` is the page slug or `page_id:<id>`.
#[derive(Debug, Clone, Default)]
pub struct ShowPageCourses {
    pub course_id: String,
    pub url: String,
}

impl ShowPageCourses {
    pub fn new(course_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            url: url.into(),
        }
    }
}

impl Request for ShowPageCourses {
    type Output = Page;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/pages/{url}",
            &[("course_id", &self.course_id), ("url", &self.url)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("url", &self.url)
            .finish()
    }
}

/// Creates a wiki page.
#[derive(Debug, Clone, Default)]
pub struct CreatePageCourses {
    pub course_id: String,
    pub wiki_page: PageForm,
}

impl CreatePageCourses {
    pub fn new(course_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            wiki_page: PageForm {
                title: Some(title.into()),
                ..Default::default()
            },
        }
    }
}

impl Request for CreatePageCourses {
    type Output = Page;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/pages", &[("course_id", &self.course_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.wiki_page.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_some("wiki_page[title]", &self.wiki_page.title)
            .finish()
    }
}

/// Updates a wiki page, creating it when no page exists at `url`.
#[derive(Debug, Clone, Default)]
pub struct UpdateCreatePageCourses {
    pub course_id: String,
    pub url: String,
    pub wiki_page: PageForm,
}

impl UpdateCreatePageCourses {
    pub fn new(course_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Request for UpdateCreatePageCourses {
    type Output = Page;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/pages/{url}",
            &[("course_id", &self.course_id), ("url", &self.url)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.wiki_page.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("url", &self.url)
            .finish()
    }
}

/// Deletes a wiki page and returns it.
#[derive(Debug, Clone, Default)]
pub struct DeletePageCourses {
    pub course_id: String,
    pub url: String,
}

impl DeletePageCourses {
    pub fn new(course_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            url: url.into(),
        }
    }
}

impl Request for DeletePageCourses {
    type Output = Page;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/pages/{url}",
            &[("course_id", &self.course_id), ("url", &self.url)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("url", &self.url)
            .finish()
    }
}
