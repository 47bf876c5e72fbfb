#[macro_use]
mod utils;

use canvas_lms as canvas;
use canvas::{
    courses::ListYourCourses, enums::CourseInclude, users::ListUsersInAccount, Course, Error,
    User,
};

use anyhow::{bail, Context, Result};
use futures::{StreamExt, TryStreamExt};
use utils::{json_response, setup};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, ResponseTemplate,
};

fn link(uri: &str, path: &str, page: u32, rel: &str) -> String {
    format!("<{}{}?page={}&per_page=2>; rel=\"{}\"", uri, path, page, rel)
}

#[tokio::test]
async fn test_paginate_follows_next_links() -> Result<()> {
    let ctx = setup().await?;
    let uri = ctx.server.uri();
    let first_links = [
        link(&uri, "/api/v1/courses", 1, "current"),
        link(&uri, "/api/v1/courses", 2, "next"),
        link(&uri, "/api/v1/courses", 1, "first"),
        link(&uri, "/api/v1/courses", 2, "last"),
    ]
    .join(",");
    let last_links = [
        link(&uri, "/api/v1/courses", 2, "current"),
        link(&uri, "/api/v1/courses", 1, "prev"),
        link(&uri, "/api/v1/courses", 1, "first"),
        link(&uri, "/api/v1/courses", 2, "last"),
    ]
    .join(",");

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(query_param("include[]", "term"))
        .respond_with(
            json_response(r#"[{"id": 1, "name": "Algebra"}, {"id": 2, "name": "Botany"}]"#)
                .insert_header("Link", first_links.as_str()),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .and(query_param("page", "2"))
        .respond_with(
            json_response(r#"[{"id": 3, "name": "Chemistry"}]"#)
                .insert_header("Link", last_links.as_str()),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let req = ListYourCourses {
        include: vec![CourseInclude::Term],
        ..Default::default()
    };

    let first = ctx
        .client
        .send_paged(&req)
        .await
        .context(here!("Failed to fetch the first page"))?;
    assert_eq!(first.data.len(), 2);
    if first.links.next.is_none() || first.links.prev.is_some() {
        bail!(here!("Expect a next link and no prev link on page 1"));
    }

    let courses: Vec<Course> = ctx
        .client
        .paginate(&req)
        .try_collect()
        .await
        .context(here!("Failed to paginate courses"))?;
    let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_paginate_stops_at_first_error() -> Result<()> {
    let ctx = setup().await?;
    let uri = ctx.server.uri();
    let next = link(&uri, "/api/v1/accounts/1/users", 2, "next");

    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/1/users"))
        .and(query_param("search_term", "ada"))
        .respond_with(
            json_response(r#"[{"id": 7, "name": "Ada Lovelace"}]"#)
                .insert_header("Link", next.as_str()),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/1/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(401).set_body_raw(
            r#"{"status": "unauthenticated", "errors": [{"message": "user authorization required"}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let req = ListUsersInAccount {
        search_term: Some("ada".to_string()),
        ..ListUsersInAccount::new("1")
    };
    let results: Vec<Result<User, Error>> = ctx.client.paginate(&req).collect().await;

    assert_eq!(results.len(), 2);
    match &results[0] {
        Ok(user) => assert_eq!(user.name, "Ada Lovelace"),
        Err(e) => bail!(here!(format!("Expect the first user, got {}", e))),
    }
    match &results[1] {
        Err(Error::ErrorResponse(401, message)) => {
            assert_eq!(message, "user authorization required");
        }
        other => bail!(here!(format!("Expect a 401 error, got {:?}", other))),
    }

    Ok(())
}

#[tokio::test]
async fn test_paginate_reports_invalid_request() -> Result<()> {
    let ctx = setup().await?;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let req = ListUsersInAccount {
        search_term: Some("ad".to_string()),
        ..ListUsersInAccount::new("1")
    };
    let results: Vec<Result<User, Error>> = ctx.client.paginate(&req).collect().await;

    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(Error::InvalidRequest(_))));

    Ok(())
}

#[tokio::test]
async fn test_paginate_refuses_foreign_next_link() -> Result<()> {
    let ctx = setup().await?;
    let next = link("https://elsewhere.example.com", "/api/v1/courses", 2, "next");

    Mock::given(method("GET"))
        .and(path("/api/v1/courses"))
        .respond_with(
            json_response(r#"[{"id": 1, "name": "Algebra"}]"#).insert_header("Link", next.as_str()),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let results: Vec<Result<Course, Error>> = ctx
        .client
        .paginate(&ListYourCourses::default())
        .collect()
        .await;

    assert_eq!(results.len(), 2);
    assert!(matches!(&results[0], Ok(course) if course.id == 1));
    match &results[1] {
        Err(Error::ForeignPageLink(url)) => {
            assert_eq!(url.host_str(), Some("elsewhere.example.com"));
        }
        other => bail!(here!(format!("Expect a foreign link error, got {:?}", other))),
    }

    Ok(())
}
