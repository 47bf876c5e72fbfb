//! File and folder APIs
use reqwest::Method;

use crate::{
    enums::{FileSort, SortOrder},
    model::{File, Folder, Quota},
    params::Params,
    path,
    request::{Request, Validator},
    Error,
};

/// Lists the files of a course.
#[derive(Debug, Clone, Default)]
pub struct ListFilesCourses {
    pub course_id: String,
    /// Full or partial MIME types, e.g. `image` or `application/pdf`.
    pub content_types: Vec<String>,
    pub exclude_content_types: Vec<String>,
    pub search_term: Option<String>,
    /// Only `user` is understood.
    pub include: Vec<String>,
    pub sort: Option<FileSort>,
    pub order: Option<SortOrder>,
}

impl ListFilesCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListFilesCourses {
    type Output = Vec<File>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/files", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("content_types", &self.content_types)
            .push_list("exclude_content_types", &self.exclude_content_types)
            .push_opt("search_term", &self.search_term)
            .push_list("include", &self.include)
            .push_opt("sort", &self.sort)
            .push_opt("order", &self.order);
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

/// Returns the standard attachment json of a course file.
#[derive(Debug, Clone, Default)]
pub struct GetFileCourses {
    pub course_id: String,
    pub id: String,
    pub include: Vec<String>,
}

impl GetFileCourses {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetFileCourses {
    type Output = File;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/files/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
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
            .require_segment("id", &self.id)
            .finish()
    }
}

/// Lists every folder of a course.
#[derive(Debug, Clone, Default)]
pub struct ListFoldersCourses {
    pub course_id: String,
}

impl ListFoldersCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl Request for ListFoldersCourses {
    type Output = Vec<Folder>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/folders", &[("course_id", &self.course_id)])
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Returns the total and used storage quota of a course.
#[derive(Debug, Clone, Default)]
pub struct GetQuotaInformationCourses {
    pub course_id: String,
}

impl GetQuotaInformationCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
        }
    }
}

impl Request for GetQuotaInformationCourses {
    type Output = Quota;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/files/quota",
            &[("course_id", &self.course_id)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Removes a file and returns its last attachment json.
#[derive(Debug, Clone, Default)]
pub struct DeleteFile {
    pub id: String,
    /// Replaces the content with a placeholder, also for submission files.
    pub replace: Option<bool>,
}

impl DeleteFile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for DeleteFile {
    type Output = File;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand("files/{id}", &[("id", &self.id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("replace", &self.replace);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}
