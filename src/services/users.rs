//! User-related APIs
use reqwest::Method;

use crate::{
    enums::{SortOrder, UserInclude, UserSort},
    model::{Profile, User},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Shows information about a user. `id` may be `self`.
#[derive(Debug, Clone, Default)]
pub struct ShowUserDetails {
    pub id: String,
    pub include: Vec<UserInclude>,
}

impl ShowUserDetails {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for ShowUserDetails {
    type Output = User;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("users/{id}", &[("id", &self.id)])
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

/// Lists the users associated with an account.
#[derive(Debug, Clone, Default)]
pub struct ListUsersInAccount {
    pub account_id: String,
    pub search_term: Option<String>,
    pub sort: Option<UserSort>,
    pub order: Option<SortOrder>,
}

impl ListUsersInAccount {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListUsersInAccount {
    type Output = Vec<User>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("accounts/{account_id}/users", &[("account_id", &self.account_id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("search_term", &self.search_term)
            .push_opt("sort", &self.sort)
            .push_opt("order", &self.order);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .check(
                self.search_term.as_ref().map_or(true, |s| s.chars().count() >= 3),
                "'search_term' must be at least 3 characters",
            )
            .finish()
    }
}

/// Returns the profile of a user.
#[derive(Debug, Clone, Default)]
pub struct GetUserProfile {
    pub user_id: String,
}

impl GetUserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl Request for GetUserProfile {
    type Output = Profile;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("users/{user_id}/profile", &[("user_id", &self.user_id)])
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("user_id", &self.user_id).finish()
    }
}

/// Personal attributes of a user, sent as `user[...]` form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub sortable_name: Option<String>,
    pub time_zone: Option<String>,
    pub locale: Option<String>,
}

impl UserForm {
    fn write(&self, form: &mut Params) {
        form.push_opt("user[name]", &self.name)
            .push_opt("user[short_name]", &self.short_name)
            .push_opt("user[sortable_name]", &self.sortable_name)
            .push_opt("user[time_zone]", &self.time_zone)
            .push_opt("user[locale]", &self.locale);
    }
}

/// Creates a user and its login in an account.
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub account_id: String,
    pub user: UserForm,
    pub skip_registration: Option<bool>,
    /// Login of the new user.
    pub unique_id: String,
    pub password: Option<String>,
    pub sis_user_id: Option<String>,
    pub send_confirmation: Option<bool>,
}

impl CreateUser {
    pub fn new(account_id: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            unique_id: unique_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateUser {
    type Output = User;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand("accounts/{account_id}/users", &[("account_id", &self.account_id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.user.write(&mut form);
        form.push_opt("user[skip_registration]", &self.skip_registration)
            .push("pseudonym[unique_id]", &self.unique_id)
            .push_opt("pseudonym[password]", &self.password)
            .push_opt("pseudonym[sis_user_id]", &self.sis_user_id)
            .push_opt("pseudonym[send_confirmation]", &self.send_confirmation);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("account_id", &self.account_id)
            .require("pseudonym[unique_id]", &self.unique_id)
            .finish()
    }
}

/// Modifies an existing user.
#[derive(Debug, Clone, Default)]
pub struct EditUser {
    pub id: String,
    pub user: UserForm,
    pub email: Option<String>,
}

impl EditUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for EditUser {
    type Output = User;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn url_path(&self) -> String {
        path::expand("users/{id}", &[("id", &self.id)])
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        self.user.write(&mut form);
        form.push_opt("user[email]", &self.email);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}
