//! Conversation (inbox) APIs
use reqwest::Method;

use crate::{
    enums::ConversationScope,
    model::Conversation,
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Lists the conversations of the current user, most recent first.
#[derive(Debug, Clone, Default)]
pub struct ListConversations {
    pub scope: Option<ConversationScope>,
    /// Context codes or user ids, e.g. `course_1`.
    pub filter: Vec<String>,
    pub include_all_conversation_ids: Option<bool>,
}

impl Request for ListConversations {
    type Output = Vec<Conversation>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        "conversations".to_owned()
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("scope", &self.scope)
            .push_list("filter", &self.filter)
            .push_opt(
                "include_all_conversation_ids",
                &self.include_all_conversation_ids,
            );
        q
    }
}

/// Returns a conversation with all of its messages.
#[derive(Debug, Clone, Default)]
pub struct GetSingleConversation {
    pub id: String,
    pub auto_mark_as_read: Option<bool>,
}

impl GetSingleConversation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Request for GetSingleConversation {
    type Output = Conversation;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand("conversations/{id}", &[("id", &self.id)])
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_opt("auto_mark_as_read", &self.auto_mark_as_read);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new().require_segment("id", &self.id).finish()
    }
}

/// Starts a new conversation with one or more recipients.
#[derive(Debug, Clone, Default)]
pub struct CreateConversation {
    /// User ids or context codes such as `course_1_students`.
    pub recipients: Vec<String>,
    pub subject: Option<String>,
    pub body: String,
    /// Sends one shared conversation instead of one per recipient.
    pub group_conversation: Option<bool>,
    pub context_code: Option<String>,
    pub attachment_ids: Vec<i64>,
}

impl CreateConversation {
    pub fn new(recipients: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            recipients,
            body: body.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateConversation {
    /// Canvas answers with one conversation per created thread.
    type Output = Vec<Conversation>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        "conversations".to_owned()
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_list("recipients", &self.recipients)
            .push_opt("subject", &self.subject)
            .push("body", &self.body)
            .push_opt("group_conversation", &self.group_conversation)
            .push_opt("context_code", &self.context_code)
            .push_list("attachment_ids", &self.attachment_ids);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_non_empty("recipients", &self.recipients)
            .require("body", &self.body)
            .check(
                self.subject.as_ref().map_or(true, |s| s.chars().count() <= 255),
                "'subject' must be at most 255 characters",
            )
            .finish()
    }
}
