//! Module-related APIs
use reqwest::Method;

use crate::{
    enums::ModuleInclude,
    model::{Module, ModuleItem},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Writable attributes of a module, sent as `module[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleForm {
    pub name: Option<String>,
    pub unlock_at: Option<String>,
    /// 1-based position of the module in the course.
    pub position: Option<i64>,
    pub require_sequential_progress: Option<bool>,
    pub prerequisite_module_ids: Vec<i64>,
    pub publish_final_grade: Option<bool>,
}

impl ModuleForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("module[name]", &self.name)
            .push_opt("module[unlock_at]", &self.unlock_at)
            .push_opt("module[position]", &self.position)
            .push_opt(
                "module[require_sequential_progress]",
                &self.require_sequential_progress,
            )
            .push_list(
                "module[prerequisite_module_ids]",
                &self.prerequisite_module_ids,
            )
            .push_opt("module[publish_final_grade]", &self.publish_final_grade);
    }

    fn validate(&self, v: &mut Validator) {
        v.check(
            self.position.map_or(true, |p| p >= 1),
            "'module[position]' must be at least 1",
        );
    }
}

/// Lists the modules of a course.
#[derive(Debug, Clone, Default)]
pub struct ListModules {
    pub course_id: String,
    pub include: Vec<ModuleInclude>,
    pub search_term: Option<String>,
    /// Returns module completion information for this student.
    pub student_id: Option<String>,
}

impl ListModules {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListModules {
    type Output = Vec<Module>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/modules", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("search_term", &self.search_term)
            .push_opt("student_id", &self.student_id);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Gets a single module.
#[derive(Debug, Clone, Default)]
pub struct ShowModule {
    pub course_id: String,
    pub id: String,
    pub include: Vec<ModuleInclude>,
    pub student_id: Option<String>,
}

impl ShowModule {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for ShowModule {
    type Output = Module;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/modules/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("student_id", &self.student_id);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("id", &self.id)
            .finish()
    }
}

/// Creates a module in a course.
#[derive(Debug, Clone, Default)]
pub struct CreateModule {
    pub course_id: String,
    pub module: ModuleForm,
}

impl CreateModule {
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            module: ModuleForm {
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }
}

impl Request for CreateModule {
    type Output = Module;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/modules", &[("course_id", &self.course_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.module.write(&mut form);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        let mut v = Validator::new();
        v.require_segment("course_id", &self.course_id)
            .require_some("module[name]", &self.module.name);
        self.module.validate(&mut v);
        v.finish()
    }
}

/// Updates and optionally publishes a module.
#[derive(Debug, Clone, Default)]
pub struct UpdateModule {
    pub course_id: String,
    pub id: String,
    pub module: ModuleForm,
    pub published: Option<bool>,
}

impl UpdateModule {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for UpdateModule {
    type Output = Module;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/modules/{id}",
            &[("course_id", &self.course_id), ("id", &self.id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.module.write(&mut form);
        form.push_opt("module[published]", &self.published);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        let mut v = Validator::new();
        v.require_segment("course_id", &self.course_id).require_segment("id", &self.id);
        self.module.validate(&mut v);
        v.finish()
    }
}

/// Deletes a module and returns it.
#[derive(Debug, Clone, Default)]
pub struct DeleteModule {
    pub course_id: String,
    pub id: String,
}

impl DeleteModule {
    pub fn new(course_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            id: id.into(),
        }
    }
}

impl Request for DeleteModule {
    type Output = Module;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/modules/{id}",
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

/// Lists the items of a module.
#[derive(Debug, Clone, Default)]
pub struct ListModuleItems {
    pub course_id: String,
    pub module_id: String,
    /// Only `content_details` is understood.
    pub include: Vec<String>,
    pub search_term: Option<String>,
    pub student_id: Option<String>,
}

impl ListModuleItems {
    pub fn new(course_id: impl Into<String>, module_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            module_id: module_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListModuleItems {
    type Output = Vec<ModuleItem>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/modules/{module_id}/items",
            &[("course_id", &self.course_id), ("module_id", &self.module_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("search_term", &self.search_term)
            .push_opt("student_id", &self.student_id);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("module_id", &self.module_id)
            .finish()
    }
}
