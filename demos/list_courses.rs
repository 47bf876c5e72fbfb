use canvas_lms as canvas;
use anyhow::Result;
use canvas::{
    courses::{GetSingleCourse, ListYourCourses},
    enums::{CourseInclude, EnrollmentState},
    Course, Request,
};
use futures::TryStreamExt;

// CANVAS_BASE_URL=https://canvas.example.edu CANVAS_ACCESS_TOKEN=... cargo run --example list_courses
#[tokio::main]
async fn main() -> Result<()> {
    let client = canvas::Client::from_env().await?;

    let req = ListYourCourses {
        enrollment_state: Some(EnrollmentState::Active),
        include: vec![CourseInclude::Term, CourseInclude::TotalStudents],
        ..Default::default()
    };
    let courses: Vec<Course> = client.paginate(&req).try_collect().await?;
    println!("Active courses: {}", courses.len());

    for course in &courses {
        println!(
            "{:>8} {:<40} {:?}",
            course.id,
            course.name.as_deref().unwrap_or("<restricted>"),
            course.term.as_ref().map(|t| &t.name)
        );
    }

    if let Some(first) = courses.first() {
        let detail = GetSingleCourse::new(first.id.to_string()).send(&client).await;
        println!("First course detail: {:?}", detail);
    }

    Ok(())
}
