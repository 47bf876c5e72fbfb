//! Typed client for the Canvas LMS REST API.
//!
//! ```no_run
//! use canvas_lms::{services::courses::GetSingleCourse, Client, Request};
//!
//! # async fn run() -> Result<(), canvas_lms::Error> {
//! let client = Client::new("https://canvas.example.edu", Some("token")).await?;
//! let course = GetSingleCourse::new("42").send(&client).await?;
//! println!("{:?}", course.name);
//! # Ok(())
//! # }
//! ```
mod client;
pub mod enums;
pub mod model;
pub mod paging;
pub mod params;
pub mod path;
pub mod request;
pub mod services;

pub use client::{Client, Error};
pub use model::{
    Account, Assignment, Conversation, Course, DiscussionEntry, DiscussionTopic, Enrollment,
    File, Folder, Group, Module, ModuleItem, Page, Profile, Quiz, Quota, Section, Submission,
    Term, User,
};
pub use paging::{Paged, PagedResource};
pub use params::Params;
pub use request::{Request, RequestBody};
pub use services::{
    accounts, assignments, conversations, courses, discussion_topics, enrollments, files, groups,
    modules, pages, quizzes, sections, submissions, users,
};
