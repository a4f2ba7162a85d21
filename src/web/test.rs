use httpmock::prelude::*;
use poem::http::StatusCode;
use poem::test::TestClient;
use poem::{Endpoint, EndpointExt};
use serde_json::json;

use crate::config::Config;
use crate::passkit::Client;
use crate::prelude::*;
use crate::web::create_app;
use crate::web::simulation::SimulatedOperation;

fn test_config(api_url: &str) -> Config {
    Config {
        api_key: "test-key".to_string(),
        base_url: "http://localhost:3000".to_string(),
        api_url: Some(api_url.to_string()),
    }
}

fn create_test_client(server: &MockServer) -> TestClient<impl Endpoint> {
    let config = test_config(&server.base_url());
    let client = Client::new(&config);
    TestClient::new(create_app().data(client).data(config))
}

#[tokio::test]
async fn simulation_redirects_for_every_operation() -> Result {
    let server = MockServer::start_async().await;
    server
        .mock_async(|_when, then| {
            then.status(400)
                .json_body(json!({"description": "simulated domain error"}));
        })
        .await;
    let client = create_test_client(&server);

    for operation in SimulatedOperation::ALL {
        let response = client
            .get(format!("/errors/{}", operation.as_str()))
            .send()
            .await;
        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        response.assert_header("location", format!("/errors?e={}", operation.as_str()));
    }
    Ok(())
}

#[tokio::test]
async fn simulation_redirects_even_when_the_call_succeeds() -> Result {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/pass/0");
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/errors/delete_pass").send().await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/errors?e=delete_pass");
    Ok(())
}

#[tokio::test]
async fn unknown_simulated_operation_is_a_server_error() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|_when, then| {
            then.status(400).json_body(json!({"description": "unreachable"}));
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/errors/not_a_real_op").send().await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    upstream.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn error_log_page_renders_without_upstream_calls() -> Result {
    let server = MockServer::start_async().await;
    let client = create_test_client(&server);

    let response = client.get("/errors").query("e", &"get_pass").send().await;
    response.assert_status_is_ok();
    Ok(())
}

#[tokio::test]
async fn template_list_page_renders() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(GET).path("/template/headers");
            then.status(200).json_body(json!({
                "count": 1,
                "templateHeaders": [
                    {"id": 7, "name": "Coupon", "createdAt": "2012-07-01T18:28:54Z"}
                ]
            }));
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/").send().await;
    response.assert_status_is_ok();
    upstream.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn pass_list_page_renders() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(GET).path("/pass");
            then.status(200).json_body(json!({
                "count": 2,
                "passes": [
                    {"id": 42, "templateId": 7, "url": "https://wallet.example.com/p/42", "createdAt": "2012-07-01T18:28:54Z"},
                    {"id": 43, "templateId": 7}
                ]
            }));
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/passes").send().await;
    response.assert_status_is_ok();
    upstream.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn delete_template_redirects_home() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/template/7");
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/template/7/delete").send().await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/");
    upstream.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn static_assets_are_served() -> Result {
    let server = MockServer::start_async().await;
    let client = create_test_client(&server);

    for (path, content_type) in [
        ("/favicon.ico", "image/vnd.microsoft.icon"),
        ("/theme.css", "text/css"),
        ("/robots.txt", "text/plain"),
    ] {
        let response = client.get(path).send().await;
        response.assert_status_is_ok();
        response.assert_header("content-type", content_type);
    }
    Ok(())
}

#[tokio::test]
async fn create_pass_seeds_the_fields_model_and_redirects() -> Result {
    let server = MockServer::start_async().await;
    let get_template = server
        .mock_async(|when, then| {
            when.method(GET).path("/template/7");
            then.status(200).json_body(json!({
                "templateHeader": {"id": 7, "name": "Coupon"},
                "fieldsModel": {"offer": {"value": "20% off"}}
            }));
        })
        .await;
    let create_pass = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/pass/7")
                .json_body(json!({"offer": {"value": "20% off"}}));
            then.status(200).json_body(json!({"id": 42, "templateId": 7}));
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/template/7/pass").send().await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/pass/42");
    get_template.assert_async().await;
    create_pass.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn update_pass_updates_then_pushes_before_redirecting() -> Result {
    let server = MockServer::start_async().await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/pass/5").json_body(json!({"foo": "bar"}));
            then.status(200).json_body(json!({"id": 5, "fields": {"foo": "bar"}}));
        })
        .await;
    let push = server
        .mock_async(|when, then| {
            when.method(PUT).path("/pass/5/push");
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client
        .get("/pass/5/update")
        .query("fields", &r#"{"foo": "bar"}"#)
        .send()
        .await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/pass/5");
    update.assert_async().await;
    push.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn malformed_update_fields_fail_without_touching_the_upstream() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|_when, then| {
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client
        .get("/pass/5/update")
        .query("fields", &"not json")
        .send()
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    upstream.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn delete_pass_redirects_home() -> Result {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/pass/5");
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/pass/5/delete").send().await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    response.assert_header("location", "/");
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_rejected_before_the_handler() -> Result {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|_when, then| {
            then.status(200);
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/pass/abc").send().await;
    response.assert_status(StatusCode::BAD_REQUEST);
    upstream.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn settings_page_shows_the_resolved_configuration() -> Result {
    let server = MockServer::start_async().await;
    let client = create_test_client(&server);

    let response = client.get("/settings").send().await;
    response.assert_status_is_ok();
    Ok(())
}

#[tokio::test]
async fn upstream_domain_error_outside_simulation_is_a_server_error() -> Result {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/pass/5");
            then.status(404).json_body(json!({"description": "No such pass"}));
        })
        .await;
    let client = create_test_client(&server);

    let response = client.get("/pass/5").send().await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
