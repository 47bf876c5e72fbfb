use canvas_lms as canvas;

use anyhow::{Context, Result};
use wiremock::MockServer;

#[macro_export]
macro_rules! here {
    ($e:expr) => {
        format!(
            "{}: {}",
            concat!("at ", file!(), ":", line!(), ":", column!()),
            $e
        )
    };
}

pub const TOKEN: &str = "test-token";

pub struct TestContext {
    pub server: MockServer,
    pub client: canvas::Client,
}

pub async fn setup() -> Result<TestContext> {
    let server = MockServer::start().await;
    let client = canvas::Client::new(&server.uri(), Some(TOKEN))
        .await
        .context(here!("Failed to create client"))?;

    Ok(TestContext { server, client })
}

pub fn json_response(body: &str) -> wiremock::ResponseTemplate {
    wiremock::ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json")
}
