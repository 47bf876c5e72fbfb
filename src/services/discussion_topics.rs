//! Discussion topic and announcement APIs
use reqwest::Method;

use crate::{
    enums::{DiscussionOrderBy, DiscussionScope, DiscussionType},
    model::{DiscussionEntry, DiscussionTopic},
    params::Params,
    path,
    request::{Request, RequestBody, Validator},
    Error,
};

/// Lists the discussion topics of a course.
#[derive(Debug, Clone, Default)]
pub struct ListDiscussionTopicsCourses {
    pub course_id: String,
    /// Only `all_dates`, `sections`, `sections_user_count` and `overrides` are understood.
    pub include: Vec<String>,
    pub order_by: Option<DiscussionOrderBy>,
    pub scope: Option<DiscussionScope>,
    /// Lists announcements instead of discussions.
    pub only_announcements: Option<bool>,
    pub search_term: Option<String>,
}

impl ListDiscussionTopicsCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for ListDiscussionTopicsCourses {
    type Output = Vec<DiscussionTopic>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/discussion_topics",
            &[("course_id", &self.course_id)],
        )
    }

    fn query(&self) -> Params {
        let mut q = Params::new();
        q.push_list("include", &self.include)
            .push_opt("order_by", &self.order_by)
            .push_opt("scope", &self.scope)
            .push_opt("only_announcements", &self.only_announcements)
            .push_opt("search_term", &self.search_term);
        q
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Returns a single discussion topic.
#[derive(Debug, Clone, Default)]
pub struct GetSingleTopicCourses {
    pub course_id: String,
    pub topic_id: String,
}

impl GetSingleTopicCourses {
    pub fn new(course_id: impl Into<String>, topic_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            topic_id: topic_id.into(),
        }
    }
}

impl Request for GetSingleTopicCourses {
    type Output = DiscussionTopic;

    fn method(&self) -> Method {
        Method::GET
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/discussion_topics/{topic_id}",
            &[("course_id", &self.course_id), ("topic_id", &self.topic_id)],
        )
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("topic_id", &self.topic_id)
            .finish()
    }
}

/// Creates a discussion topic or announcement.
#[derive(Debug, Clone, Default)]
pub struct CreateNewDiscussionTopicsCourses {
    pub course_id: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub discussion_type: Option<DiscussionType>,
    pub published: Option<bool>,
    pub delayed_post_at: Option<String>,
    pub lock_at: Option<String>,
    pub require_initial_post: Option<bool>,
    pub is_announcement: Option<bool>,
    pub pinned: Option<bool>,
    pub specific_sections: Vec<i64>,
}

impl CreateNewDiscussionTopicsCourses {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            ..Default::default()
        }
    }
}

impl Request for CreateNewDiscussionTopicsCourses {
    type Output = DiscussionTopic;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/discussion_topics",
            &[("course_id", &self.course_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push_opt("title", &self.title)
            .push_opt("message", &self.message)
            .push_opt("discussion_type", &self.discussion_type)
            .push_opt("published", &self.published)
            .push_opt("delayed_post_at", &self.delayed_post_at)
            .push_opt("lock_at", &self.lock_at)
            .push_opt("require_initial_post", &self.require_initial_post)
            .push_opt("is_announcement", &self.is_announcement)
            .push_opt("pinned", &self.pinned);
        if !self.specific_sections.is_empty() {
            let sections = self
                .specific_sections
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            form.push("specific_sections", sections);
        }

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .finish()
    }
}

/// Posts a top-level entry to a discussion topic.
#[derive(Debug, Clone, Default)]
pub struct PostEntryCourses {
    pub course_id: String,
    pub topic_id: String,
    pub message: String,
}

impl PostEntryCourses {
    pub fn new(
        course_id: impl Into<String>,
        topic_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            topic_id: topic_id.into(),
            message: message.into(),
        }
    }
}

impl Request for PostEntryCourses {
    type Output = DiscussionEntry;

    fn method(&self) -> Method {
        Method::POST
    }

    fn url_path(&self) -> String {
        path::expand(
            "courses/{course_id}/discussion_topics/{topic_id}/entries",
            &[("course_id", &self.course_id), ("topic_id", &self.topic_id)],
        )
    }

    fn body(&self) -> Result<Option<RequestBody>, Error> {
        let mut form = Params::new();
        form.push("message", &self.message);

        Ok(Some(RequestBody::Form(form)))
    }

    fn has_errors(&self) -> Result<(), Error> {
        Validator::new()
            .require_segment("course_id", &self.course_id)
            .require_segment("topic_id", &self.topic_id)
            .require("message", &self.message)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Client;
    use wiremock::{
        matchers::{body_string, body_string_contains, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_list_announcements() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/discussion_topics"))
            .and(query_param("only_announcements", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id": 60, "title": "Welcome", "message": "<p>Hi</p>", "pinned": false}]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let req = ListDiscussionTopicsCourses {
            only_announcements: Some(true),
            ..ListDiscussionTopicsCourses::new("1")
        };
        let topics = req.send(&client).await.unwrap();

        assert_eq!(topics[0].title.as_deref(), Some("Welcome"));
    }

    #[tokio::test]
    async fn test_create_topic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/1/discussion_topics"))
            .and(body_string_contains("title=Week+1"))
            .and(body_string_contains("discussion_type=threaded"))
            .and(body_string_contains("specific_sections=3%2C4"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"id": 61, "title": "Week 1", "discussion_type": "threaded"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let req = CreateNewDiscussionTopicsCourses {
            title: Some("Week 1".to_string()),
            discussion_type: Some(DiscussionType::Threaded),
            specific_sections: vec![3, 4],
            ..CreateNewDiscussionTopicsCourses::new("1")
        };
        let topic = req.send(&client).await.unwrap();

        assert_eq!(topic.id, 61);
    }

    #[tokio::test]
    async fn test_post_entry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/1/discussion_topics/61/entries"))
            .and(body_string("message=I+agree"))
            .respond_with(ResponseTemplate::new(201).set_body_raw(
                r#"{"id": 800, "user_id": 7, "message": "I agree"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(&server.uri(), None).await.unwrap();
        let entry = PostEntryCourses::new("1", "61", "I agree")
            .send(&client)
            .await
            .unwrap();

        assert_eq!(entry.id, 800);
        assert_eq!(entry.message.as_deref(), Some("I agree"));
    }

    #[test]
    fn test_post_entry_requires_message() {
        let req = PostEntryCourses::new("1", "61", "");

        assert_eq!(
            req.has_errors().unwrap_err().to_string(),
            "Invalid request: 'message' is required"
        );
    }
}
