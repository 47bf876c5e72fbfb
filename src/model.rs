//! Data models of the Canvas REST API
//!
//! Timestamps are kept as the ISO8601 strings Canvas sends.
use serde::{Deserialize, Serialize};

use crate::enums::{
    CourseState, EnrollmentState, EnrollmentType, GradingType, ModuleItemType, QuizType,
    SubmissionType, WorkflowState,
};

/// An account (institution or sub-account) that owns courses and users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub uuid: Option<String>,
    pub parent_account_id: Option<i64>,
    pub root_account_id: Option<i64>,
    pub default_storage_quota_mb: Option<i64>,
    pub default_time_zone: Option<String>,
    pub sis_account_id: Option<String>,
    pub workflow_state: Option<String>,
}

/// An enrollment term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Term {
    pub id: i64,
    pub name: String,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
}

/// A course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    /// Absent when the caller may only see limited course data.
    pub name: Option<String>,
    pub course_code: Option<String>,
    pub uuid: Option<String>,
    pub sis_course_id: Option<String>,
    pub account_id: Option<i64>,
    pub root_account_id: Option<i64>,
    pub enrollment_term_id: Option<i64>,
    pub workflow_state: Option<CourseState>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub created_at: Option<String>,
    pub time_zone: Option<String>,
    pub default_view: Option<String>,
    pub syllabus_body: Option<String>,
    pub public_description: Option<String>,
    pub is_public: Option<bool>,
    pub license: Option<String>,
    pub total_students: Option<i64>,
    pub term: Option<Term>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub teachers: Vec<UserDisplay>,
}

/// Result of deleting or concluding a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCourseResult {
    pub delete: Option<bool>,
    pub conclude: Option<bool>,
}

/// A user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub sortable_name: Option<String>,
    pub short_name: Option<String>,
    pub sis_user_id: Option<String>,
    pub login_id: Option<String>,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
    pub locale: Option<String>,
    pub time_zone: Option<String>,
    pub bio: Option<String>,
    pub last_login: Option<String>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
}

/// Minimal user information embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDisplay {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub avatar_image_url: Option<String>,
    pub html_url: Option<String>,
}

/// Profile of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub sortable_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub primary_email: Option<String>,
    pub login_id: Option<String>,
    pub sis_user_id: Option<String>,
    pub avatar_url: Option<String>,
    pub time_zone: Option<String>,
    pub locale: Option<String>,
}

/// Grade summary of a student enrollment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grades {
    pub html_url: Option<String>,
    pub current_score: Option<f64>,
    pub final_score: Option<f64>,
    pub current_grade: Option<String>,
    pub final_grade: Option<String>,
}

/// Membership of a user in a course or section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: i64,
    pub course_id: Option<i64>,
    pub course_section_id: Option<i64>,
    pub user_id: Option<i64>,
    pub r#type: Option<EnrollmentType>,
    pub role: Option<String>,
    pub role_id: Option<i64>,
    pub enrollment_state: Option<EnrollmentState>,
    pub limit_privileges_to_course_section: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_activity_at: Option<String>,
    pub grades: Option<Grades>,
    pub html_url: Option<String>,
}

/// A course section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub sis_section_id: Option<String>,
    pub integration_id: Option<String>,
    pub course_id: Option<i64>,
    pub nonxlist_course_id: Option<i64>,
    pub start_at: Option<String>,
    pub end_at: Option<String>,
    pub restrict_enrollments_to_section_dates: Option<bool>,
    pub total_students: Option<i64>,
}

/// An assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<i64>,
    pub assignment_group_id: Option<i64>,
    pub position: Option<i64>,
    pub points_possible: Option<f64>,
    pub grading_type: Option<GradingType>,
    #[serde(default)]
    pub submission_types: Vec<SubmissionType>,
    pub due_at: Option<String>,
    pub lock_at: Option<String>,
    pub unlock_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published: Option<bool>,
    pub muted: Option<bool>,
    pub html_url: Option<String>,
    pub needs_grading_count: Option<i64>,
    pub submission: Option<Box<Submission>>,
}

/// A comment on a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionComment {
    pub id: i64,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub comment: String,
    pub created_at: Option<String>,
    pub edited_at: Option<String>,
}

/// A student's submission for an assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: Option<i64>,
    pub assignment_id: i64,
    pub user_id: i64,
    pub attempt: Option<i64>,
    pub body: Option<String>,
    pub url: Option<String>,
    pub grade: Option<String>,
    pub score: Option<f64>,
    pub entered_grade: Option<String>,
    pub grade_matches_current_submission: Option<bool>,
    pub submission_type: Option<SubmissionType>,
    pub submitted_at: Option<String>,
    pub graded_at: Option<String>,
    pub grader_id: Option<i64>,
    pub late: Option<bool>,
    pub missing: Option<bool>,
    pub excused: Option<bool>,
    pub workflow_state: Option<WorkflowState>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub submission_comments: Vec<SubmissionComment>,
}

/// A module of a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Module {
    pub id: i64,
    pub name: String,
    pub position: Option<i64>,
    pub workflow_state: Option<String>,
    pub unlock_at: Option<String>,
    pub require_sequential_progress: Option<bool>,
    #[serde(default)]
    pub prerequisite_module_ids: Vec<i64>,
    pub items_count: Option<i64>,
    pub items_url: Option<String>,
    pub state: Option<String>,
    pub completed_at: Option<String>,
    pub publish_final_grade: Option<bool>,
    pub published: Option<bool>,
    #[serde(default)]
    pub items: Vec<ModuleItem>,
}

/// An item of a [`Module`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleItem {
    pub id: i64,
    pub module_id: i64,
    pub position: Option<i64>,
    pub title: String,
    pub indent: Option<i64>,
    pub r#type: ModuleItemType,
    pub content_id: Option<i64>,
    pub html_url: Option<String>,
    pub url: Option<String>,
    pub page_url: Option<String>,
    pub external_url: Option<String>,
    pub new_tab: Option<bool>,
    pub published: Option<bool>,
}

/// A wiki page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub page_id: Option<i64>,
    pub url: String,
    pub title: String,
    pub body: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub editing_roles: Option<String>,
    pub published: Option<bool>,
    pub front_page: Option<bool>,
    pub locked_for_user: Option<bool>,
    pub last_edited_by: Option<UserDisplay>,
}

/// A discussion topic or announcement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscussionTopic {
    pub id: i64,
    pub title: Option<String>,
    pub message: Option<String>,
    pub html_url: Option<String>,
    pub posted_at: Option<String>,
    pub last_reply_at: Option<String>,
    pub delayed_post_at: Option<String>,
    pub discussion_subentry_count: Option<i64>,
    pub read_state: Option<String>,
    pub unread_count: Option<i64>,
    pub discussion_type: Option<String>,
    pub published: Option<bool>,
    pub pinned: Option<bool>,
    pub locked: Option<bool>,
    pub user_name: Option<String>,
    pub assignment_id: Option<i64>,
    pub author: Option<UserDisplay>,
}

/// An entry posted to a [`DiscussionTopic`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscussionEntry {
    pub id: i64,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub message: Option<String>,
    pub read_state: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub parent_id: Option<i64>,
}

/// A group of users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub followed_by_user: Option<bool>,
    pub join_level: Option<String>,
    pub members_count: Option<i64>,
    pub avatar_url: Option<String>,
    pub context_type: Option<String>,
    pub course_id: Option<i64>,
    pub account_id: Option<i64>,
    pub role: Option<String>,
    pub group_category_id: Option<i64>,
    pub sis_group_id: Option<String>,
    pub storage_quota_mb: Option<i64>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// A classic quiz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub quiz_type: Option<QuizType>,
    pub assignment_group_id: Option<i64>,
    pub time_limit: Option<i64>,
    pub shuffle_answers: Option<bool>,
    pub hide_results: Option<String>,
    pub show_correct_answers: Option<bool>,
    pub allowed_attempts: Option<i64>,
    pub one_question_at_a_time: Option<bool>,
    pub question_count: Option<i64>,
    pub points_possible: Option<f64>,
    pub due_at: Option<String>,
    pub lock_at: Option<String>,
    pub unlock_at: Option<String>,
    pub published: Option<bool>,
}

/// A file (attachment).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct File {
    pub id: i64,
    pub uuid: Option<String>,
    pub folder_id: Option<i64>,
    pub display_name: String,
    pub filename: Option<String>,
    #[serde(rename = "content-type")]
    pub content_type: Option<String>,
    pub url: Option<String>,
    pub size: Option<i64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub modified_at: Option<String>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub thumbnail_url: Option<String>,
    pub mime_class: Option<String>,
}

/// A folder of files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub full_name: Option<String>,
    pub context_id: Option<i64>,
    pub context_type: Option<String>,
    pub parent_folder_id: Option<i64>,
    pub files_count: Option<i64>,
    pub folders_count: Option<i64>,
    pub position: Option<i64>,
    pub locked: Option<bool>,
    pub hidden: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Storage quota of a context, in bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quota {
    pub quota: i64,
    pub quota_used: i64,
}

/// A conversation (inbox thread).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: i64,
    pub subject: Option<String>,
    pub workflow_state: Option<String>,
    pub last_message: Option<String>,
    pub last_message_at: Option<String>,
    pub message_count: Option<i64>,
    pub subscribed: Option<bool>,
    pub private: Option<bool>,
    pub starred: Option<bool>,
    pub context_name: Option<String>,
    #[serde(default)]
    pub audience: Vec<i64>,
    #[serde(default)]
    pub participants: Vec<ConversationParticipant>,
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationParticipant {
    pub id: i64,
    pub name: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub id: i64,
    pub created_at: Option<String>,
    pub body: String,
    pub author_id: Option<i64>,
    pub generated: Option<bool>,
}
