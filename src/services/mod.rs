//! One request type per Canvas endpoint, grouped by resource.
//!
//! Every type implements [`Request`](crate::Request): build it, then call
//! [`send`](crate::Request::send) or hand it to
//! [`Client::paginate`](crate::Client::paginate) for list endpoints.
pub mod accounts;
pub mod assignments;
pub mod conversations;
pub mod courses;
pub mod discussion_topics;
pub mod enrollments;
pub mod files;
pub mod groups;
pub mod modules;
pub mod pages;
pub mod quizzes;
pub mod sections;
pub mod submissions;
pub mod users;
