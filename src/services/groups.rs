//! Group-related APIs
use reqwest::Method;

use crate::{
    enums::{GroupContextType, GroupJoinLevel},
    model::{Group, User},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Lists the groups the current user belongs to.
#[derive(Debug, Clone, Default)]
pub struct ListYourGroups {
    pub context_type: Option<GroupContextType>,
    /// Only `tabs` is understood.
    pub include: Vec<String>,
}

impl Request for ListYourGroups {
    type Output = Vec<Group>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        "users/self/groups".to_owned()
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("context_type", &self.context_type)
            .push_list("include", &self.include);
        q
    }
}

/// Lists the groups available in a course.
#[derive(Debug, Clone, Default)]
pub struct ListGroupsAvailableInContextCourses {
    pub course_id: String,
    pub only_own_groups: Option<bool>,
    pub include: Vec<String>,
}

impl ListGroupsAvailableInContextCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListGroupsAvailableInContextCourses {
    type Output = Vec<Group>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("courses/{course_id}/groups", &[("course_id", &self.course_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("only_own_groups", &self.only_own_groups)
            .push_list("include", &self.include);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Returns the data of a single group.
#[derive(Debug, Clone, Default)]
pub struct GetSingleGroup {
    pub group_id: String,
    /// Only `permissions` and `tabs` are understood.
    pub include: Vec<String>,
}

impl GetSingleGroup {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetSingleGroup {
    type Output = Group;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("groups/{group_id}", &[("group_id", &self.group_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("group_id", &self.group_id)
            .finish()
    }
}

/// Creates a group in a group category.
#[derive(Debug, Clone, Default)]
pub struct CreateGroupGroupCategories {
    pub group_category_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub join_level: Option<GroupJoinLevel>,
    pub storage_quota_mb: Option<i64>,
    pub sis_group_id: Option<String>,
}

impl CreateGroupGroupCategories {
    pub fn new(group_category_id: impl Into<String>) -> Self {
        Self {
            group_category_id: group_category_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateGroupGroupCategories {
    type Output = Group;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "group_categories/{group_category_id}/groups",
            &[("group_category_id", &self.group_category_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("name", &self.name)
            .push_opt("description", &self.description)
            .push_opt("is_public", &self.is_public)
            .push_opt("join_level", &self.join_level)
            .push_opt("storage_quota_mb", &self.storage_quota_mb)
            .push_opt("sis_group_id", &self.sis_group_id);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("group_category_id", &self.group_category_id)
            .finish()
    }
}

/// Lists the users of a group.
#[derive(Debug, Clone, Default)]
pub struct ListGroupsUsers {
    pub group_id: String,
    pub search_term: Option<String>,
    /// Only `avatar_url` is understood.
    pub include: Vec<String>,
    pub exclude_inactive: Option<bool>,
}

impl ListGroupsUsers {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListGroupsUsers {
    type Output = Vec<User>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("groups/{group_id}/users", &[("group_id", &self.group_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("search_term", &self.search_term)
            .push_list("include", &self.include)
            .push_opt("exclude_inactive", &self.exclude_inactive);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("group_id", &self.group_id)
            .finish()
    }
}
