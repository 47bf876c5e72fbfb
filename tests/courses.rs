#[macro_use]
mod utils;

use canvas_lms as canvas;
use canvas::{
    courses::{CreateNewCourse, DeleteConcludeCourse, GetSingleCourse},
    enrollments::EnrollUserCourses,
    enums::{CourseEvent, EnrollmentState, EnrollmentType, SubmissionType},
    submissions::{GradeOrCommentOnSubmissionCourses, SubmitAssignmentCourses},
    Error, Request,
};

use anyhow::{bail, Context, Result};
use utils::{json_response, setup, TOKEN};
use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn test_course_lifecycle() -> Result<()> {
    let ctx = setup().await?;
    let auth = format!("Bearer {}", TOKEN);

    Mock::given(method("POST"))
        .and(path("/api/v1/accounts/1/courses"))
        .and(header("Authorization", auth.as_str()))
        .and(body_string_contains("course%5Bname%5D=Biology+101"))
        .and(body_string_contains("offer=true"))
        .respond_with(json_response(
            r#"{"id": 42, "name": "Biology 101", "workflow_state": "available"}"#,
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/courses/42/enrollments"))
        .and(body_string_contains("enrollment%5Btype%5D=StudentEnrollment"))
        .and(body_string_contains("enrollment%5Benrollment_state%5D=active"))
        .respond_with(json_response(
            r#"{"id": 500, "course_id": 42, "user_id": 7, "type": "StudentEnrollment", "enrollment_state": "active"}"#,
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/courses/42/assignments/9/submissions"))
        .and(body_string_contains(
            "submission%5Bsubmission_type%5D=online_text_entry",
        ))
        .respond_with(json_response(
            r#"{"id": 1000, "assignment_id": 9, "user_id": 7, "submission_type": "online_text_entry", "workflow_state": "submitted"}"#,
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/courses/42/assignments/9/submissions/7"))
        .and(body_string_contains("submission%5Bposted_grade%5D=A-"))
        .respond_with(json_response(
            r#"{"id": 1000, "assignment_id": 9, "user_id": 7, "grade": "A-", "score": 91.5, "workflow_state": "graded"}"#,
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/courses/42"))
        .and(query_param("event", "conclude"))
        .respond_with(json_response(r#"{"conclude": true}"#))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let mut create = CreateNewCourse::new("1");
    create.course.name = Some("Biology 101".to_string());
    create.offer = Some(true);
    let course = create
        .send(&ctx.client)
        .await
        .context(here!("Failed to create course"))?;
    if course.name.as_deref() != Some("Biology 101") {
        bail!(here!("Expect the created course name"));
    }
    let course_id = course.id.to_string();

    let mut enroll = EnrollUserCourses::new(&course_id, "7", EnrollmentType::Student);
    enroll.enrollment_state = Some(EnrollmentState::Active);
    let enrollment = enroll
        .send(&ctx.client)
        .await
        .context(here!("Failed to enroll student"))?;
    assert_eq!(enrollment.user_id, Some(7));
    assert_eq!(enrollment.enrollment_state, Some(EnrollmentState::Active));

    let mut submit = SubmitAssignmentCourses::new(&course_id, "9", SubmissionType::OnlineTextEntry);
    submit.body = Some("<p>Mitochondria</p>".to_string());
    let submission = submit
        .send(&ctx.client)
        .await
        .context(here!("Failed to submit assignment"))?;
    assert_eq!(submission.id, Some(1000));

    let grade = GradeOrCommentOnSubmissionCourses {
        posted_grade: Some("A-".to_string()),
        ..GradeOrCommentOnSubmissionCourses::new(&course_id, "9", "7")
    };
    let graded = grade
        .send(&ctx.client)
        .await
        .context(here!("Failed to grade submission"))?;
    assert_eq!(graded.grade.as_deref(), Some("A-"));
    assert_eq!(graded.score, Some(91.5));

    let concluded = DeleteConcludeCourse::new(&course_id, CourseEvent::Conclude)
        .send(&ctx.client)
        .await
        .context(here!("Failed to conclude course"))?;
    assert_eq!(concluded.conclude, Some(true));

    Ok(())
}

#[tokio::test]
async fn test_error_response_is_reported() -> Result<()> {
    let ctx = setup().await?;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses/404"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"errors": [{"message": "The specified resource does not exist."}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let result = GetSingleCourse::new("404").send(&ctx.client).await;

    match result {
        Err(Error::ErrorResponse(404, message)) => {
            assert_eq!(message, "The specified resource does not exist.");
        }
        other => bail!(here!(format!("Expect a 404 error, got {:?}", other))),
    }

    Ok(())
}

#[tokio::test]
async fn test_invalid_request_is_not_sent() -> Result<()> {
    let ctx = setup().await?;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let submit = SubmitAssignmentCourses::new("42", "9", SubmissionType::OnlineUrl);
    let result = submit.send(&ctx.client).await;

    match result {
        Err(Error::InvalidRequest(errors)) => {
            assert_eq!(errors, vec!["'submission[url]' is required".to_string()]);
        }
        other => bail!(here!(format!("Expect an invalid request, got {:?}", other))),
    }

    Ok(())
}
