//! Enumerated string parameters and fields of the Canvas API.
use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            /// Wire representation of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Role of an enrollment, as used by enrollment endpoints.
    pub enum EnrollmentType {
        Student => "StudentEnrollment",
        Teacher => "TeacherEnrollment",
        Ta => "TaEnrollment",
        Observer => "ObserverEnrollment",
        Designer => "DesignerEnrollment",
    }
}

string_enum! {
    /// Short role names accepted by course listing filters.
    pub enum EnrollmentRole {
        Teacher => "teacher",
        Student => "student",
        StudentView => "student_view",
        Ta => "ta",
        Observer => "observer",
        Designer => "designer",
    }
}

string_enum! {
    pub enum EnrollmentState {
        Active => "active",
        Invited => "invited",
        InvitedOrPending => "invited_or_pending",
        CreationPending => "creation_pending",
        Deleted => "deleted",
        Rejected => "rejected",
        Completed => "completed",
        Inactive => "inactive",
        CurrentAndInvited => "current_and_invited",
        CurrentAndFuture => "current_and_future",
        CurrentAndConcluded => "current_and_concluded",
    }
}

string_enum! {
    /// Workflow state of a course.
    pub enum CourseState {
        Unpublished => "unpublished",
        Available => "available",
        Completed => "completed",
        Deleted => "deleted",
    }
}

string_enum! {
    /// Extra data that course endpoints can embed.
    pub enum CourseInclude {
        NeedsGradingCount => "needs_grading_count",
        SyllabusBody => "syllabus_body",
        PublicDescription => "public_description",
        TotalScores => "total_scores",
        CurrentGradingPeriodScores => "current_grading_period_scores",
        Term => "term",
        Account => "account",
        CourseProgress => "course_progress",
        Sections => "sections",
        StorageQuotaUsedMb => "storage_quota_used_mb",
        TotalStudents => "total_students",
        PassbackStatus => "passback_status",
        Favorites => "favorites",
        Teachers => "teachers",
        ObservedUsers => "observed_users",
        CourseImage => "course_image",
        Concluded => "concluded",
    }
}

string_enum! {
    /// What [`DeleteConcludeCourse`](crate::services::courses::DeleteConcludeCourse) does.
    pub enum CourseEvent {
        Delete => "delete",
        Conclude => "conclude",
    }
}

string_enum! {
    /// State transition applied by a course update.
    pub enum CourseUpdateEvent {
        Claim => "claim",
        Offer => "offer",
        Conclude => "conclude",
        Delete => "delete",
        Undelete => "undelete",
    }
}

string_enum! {
    pub enum EnrollmentTask {
        Conclude => "conclude",
        Delete => "delete",
        Inactivate => "inactivate",
        Deactivate => "deactivate",
    }
}

string_enum! {
    pub enum SubmissionType {
        OnlineQuiz => "online_quiz",
        None => "none",
        OnPaper => "on_paper",
        DiscussionTopic => "discussion_topic",
        ExternalTool => "external_tool",
        OnlineUpload => "online_upload",
        OnlineTextEntry => "online_text_entry",
        OnlineUrl => "online_url",
        MediaRecording => "media_recording",
        BasicLtiLaunch => "basic_lti_launch",
        StudentAnnotation => "student_annotation",
    }
}

string_enum! {
    pub enum GradingType {
        PassFail => "pass_fail",
        Percent => "percent",
        LetterGrade => "letter_grade",
        GpaScale => "gpa_scale",
        Points => "points",
        NotGraded => "not_graded",
    }
}

string_enum! {
    /// Filter buckets for assignment listings.
    pub enum AssignmentBucket {
        Past => "past",
        Overdue => "overdue",
        Undated => "undated",
        Ungraded => "ungraded",
        Unsubmitted => "unsubmitted",
        Upcoming => "upcoming",
        Future => "future",
    }
}

string_enum! {
    pub enum AssignmentOrderBy {
        Position => "position",
        Name => "name",
        DueAt => "due_at",
    }
}

string_enum! {
    pub enum AssignmentInclude {
        Submission => "submission",
        AssignmentVisibility => "assignment_visibility",
        AllDates => "all_dates",
        Overrides => "overrides",
        ObservedUsers => "observed_users",
        CanEdit => "can_edit",
        ScoreStatistics => "score_statistics",
    }
}

string_enum! {
    pub enum SubmissionInclude {
        SubmissionHistory => "submission_history",
        SubmissionComments => "submission_comments",
        RubricAssessment => "rubric_assessment",
        Assignment => "assignment",
        Visibility => "visibility",
        Course => "course",
        User => "user",
        Group => "group",
        ReadStatus => "read_status",
    }
}

string_enum! {
    pub enum WorkflowState {
        Active => "active",
        Unpublished => "unpublished",
        Published => "published",
        Deleted => "deleted",
        Submitted => "submitted",
        Unsubmitted => "unsubmitted",
        Graded => "graded",
        PendingReview => "pending_review",
        Available => "available",
        Locked => "locked",
        Completed => "completed",
    }
}

string_enum! {
    pub enum UserSort {
        Username => "username",
        Email => "email",
        SisId => "sis_id",
        LastLogin => "last_login",
    }
}

string_enum! {
    pub enum SortOrder {
        Asc => "asc",
        Desc => "desc",
    }
}

string_enum! {
    pub enum UserInclude {
        Email => "email",
        Enrollments => "enrollments",
        Locked => "locked",
        AvatarUrl => "avatar_url",
        TestStudent => "test_student",
        Bio => "bio",
        CustomLinks => "custom_links",
        CurrentGradingPeriodScores => "current_grading_period_scores",
        Uuid => "uuid",
    }
}

string_enum! {
    pub enum CourseSort {
        CourseName => "course_name",
        SisCourseId => "sis_course_id",
        Teacher => "teacher",
        AccountName => "account_name",
    }
}

string_enum! {
    pub enum ModuleInclude {
        Items => "items",
        ContentDetails => "content_details",
    }
}

string_enum! {
    /// Kind of content a module item points at.
    pub enum ModuleItemType {
        File => "File",
        Page => "Page",
        Discussion => "Discussion",
        Assignment => "Assignment",
        Quiz => "Quiz",
        SubHeader => "SubHeader",
        ExternalUrl => "ExternalUrl",
        ExternalTool => "ExternalTool",
    }
}

string_enum! {
    pub enum PageSort {
        Title => "title",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
    }
}

string_enum! {
    pub enum EditingRoles {
        Teachers => "teachers",
        Students => "students",
        Members => "members",
        Public => "public",
    }
}

string_enum! {
    pub enum DiscussionOrderBy {
        Position => "position",
        RecentActivity => "recent_activity",
        Title => "title",
    }
}

string_enum! {
    pub enum DiscussionScope {
        Locked => "locked",
        Unlocked => "unlocked",
        Pinned => "pinned",
        Unpinned => "unpinned",
    }
}

string_enum! {
    pub enum DiscussionType {
        SideComment => "side_comment",
        Threaded => "threaded",
    }
}

string_enum! {
    pub enum GroupContextType {
        Account => "Account",
        Course => "Course",
    }
}

string_enum! {
    pub enum GroupJoinLevel {
        ParentContextAutoJoin => "parent_context_auto_join",
        ParentContextRequest => "parent_context_request",
        InvitationOnly => "invitation_only",
    }
}

string_enum! {
    pub enum QuizType {
        PracticeQuiz => "practice_quiz",
        Assignment => "assignment",
        GradedSurvey => "graded_survey",
        Survey => "survey",
    }
}

string_enum! {
    pub enum HideResults {
        Always => "always",
        UntilAfterLastAttempt => "until_after_last_attempt",
    }
}

string_enum! {
    pub enum FileSort {
        Name => "name",
        Size => "size",
        CreatedAt => "created_at",
        UpdatedAt => "updated_at",
        ContentType => "content_type",
        User => "user",
    }
}

string_enum! {
    pub enum ConversationScope {
        Unread => "unread",
        Starred => "starred",
        Archived => "archived",
        Sent => "sent",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(EnrollmentType::Ta.as_str(), "TaEnrollment");
        assert_eq!(SubmissionType::OnlineUrl.to_string(), "online_url");
        assert_eq!(
            serde_json::to_string(&CourseInclude::TotalScores).unwrap(),
            r#""total_scores""#
        );

        let state: EnrollmentState = serde_json::from_str(r#""invited_or_pending""#).unwrap();
        assert_eq!(state, EnrollmentState::InvitedOrPending);
    }
}
