//! Account-related APIs
use reqwest::Method;

use crate::{
    enums::{CourseInclude, CourseSort, CourseState, SortOrder},
    model::{Account, Course},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Lists the accounts the current user can view or manage.
#[derive(Debug, Clone, Default)]
pub struct ListAccounts {
    /// Only `lti_guid`, `registration_settings` and `services` are understood.
    pub include: Vec<String>,
}

impl Request for ListAccounts {
    type Output = Vec<Account>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        "accounts".to_owned()
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include);
        q
    }
}

/// Retrieves information on an individual account.
#[derive(Debug, Clone, Default)]
pub struct GetSingleAccount {
    pub id: String,
}

impl GetSingleAccount {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetSingleAccount {
    type Output = Account;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("accounts/{id}", &[("id", &self.id)])
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Lists the sub-accounts of an account.
#[derive(Debug, Clone, Default)]
pub struct ListSubAccounts {
    pub account_id: String,
    /// Returns the whole sub-account tree instead of direct children only.
    pub recursive: Option<bool>,
}

impl ListSubAccounts {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListSubAccounts {
    type Output = Vec<Account>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "accounts/{account_id}/sub_accounts",
            &[("account_id", &self.account_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("recursive", &self.recursive);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .finish()
    }
}

/// Retrieves the courses of an account.
#[derive(Debug, Clone, Default)]
pub struct ListActiveCoursesInAccount {
    pub account_id: String,
    pub with_enrollments: Option<bool>,
    pub published: Option<bool>,
    pub completed: Option<bool>,
    pub blueprint: Option<bool>,
    pub by_teachers: Vec<i64>,
    pub by_subaccounts: Vec<i64>,
    pub state: Vec<CourseState>,
    pub enrollment_term_id: Option<i64>,
    /// Partial course name, code or full ID; at least 2 characters.
    pub search_term: Option<String>,
    pub include: Vec<CourseInclude>,
    pub sort: Option<CourseSort>,
    pub order: Option<SortOrder>,
}

impl ListActiveCoursesInAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListActiveCoursesInAccount {
    type Output = Vec<Course>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "accounts/{account_id}/courses",
            &[("account_id", &self.account_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("with_enrollments", &self.with_enrollments)
            .push_opt("published", &self.published)
            .push_opt("completed", &self.completed)
            .push_opt("blueprint", &self.blueprint)
            .push_list("by_teachers", &self.by_teachers)
            .push_list("by_subaccounts", &self.by_subaccounts)
            .push_list("state", &self.state)
            .push_opt("enrollment_term_id", &self.enrollment_term_id)
            .push_opt("search_term", &self.search_term)
            .push_list("include", &self.include)
            .push_opt("sort", &self.sort)
            .push_opt("order", &self.order);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .check(
                self.search_term.as_ref().map_or(true, |s| s.chars().count() >= 2),
                "'search_term' must be at least 2 characters",
            )
            .finish()
    }
}

/// Adds a new sub-account to an account.
#[derive(Debug, Clone, Default)]
pub struct CreateNewSubAccount {
    pub account_id: String,
    pub name: Option<String>,
    pub sis_account_id: Option<String>,
    pub default_storage_quota_mb: Option<i64>,
    pub default_user_storage_quota_mb: Option<i64>,
}

impl CreateNewSubAccount {
    pub fn new(account_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl Request for CreateNewSubAccount {
    type Output = Account;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "accounts/{account_id}/sub_accounts",
            &[("account_id", &self.account_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("account[name]", &self.name)
            .push_opt("account[sis_account_id]", &self.sis_account_id)
            .push_opt(
                "account[default_storage_quota_mb]",
                &self.default_storage_quota_mb,
            )
            .push_opt(
                "account[default_user_storage_quota_mb]",
                &self.default_user_storage_quota_mb,
            );

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .require_some("account[name]", &self.name)
            .finish()
    }
}
