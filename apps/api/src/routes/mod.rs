pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::prospects::handlers as prospect_handlers;
use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/industries",
            get(catalog_handlers::handle_list_industries),
        )
        .route(
            "/api/v1/prospects/search",
            post(prospect_handlers::handle_search),
        )
        // Two-step form
        .route("/api/v1/sessions", post(handlers::handle_start_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_reset_session),
        )
        .route(
            "/api/v1/sessions/:id/refinement",
            put(handlers::handle_refine_session),
        )
        .route(
            "/api/v1/sessions/:id/prospects/:index",
            get(handlers::handle_get_prospect),
        )
        .route(
            "/api/v1/sessions/:id/prospects/:index/follow-ups/:scenario",
            get(handlers::handle_get_follow_up),
        )
        .route(
            "/api/v1/sessions/:id/export",
            get(handlers::handle_export_session),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::catalog::IndustryCatalog;
    use crate::config::Config;

    fn app() -> Router {
        let config = Config::from_lookup(|_| None).unwrap();
        build_router(AppState::new(&config, IndustryCatalog::builtin()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let res = app.clone().oneshot(request).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn base_form() -> Value {
        json!({
            "location": "San Francisco Bay Area",
            "demographic": "C-level Executives",
            "industry": "Technology & Software"
        })
    }

    #[tokio::test]
    async fn test_health_and_industries() {
        let app = app();
        let (status, v) = send_json(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["status"], "ok");

        let (status, v) = send_json(&app, "GET", "/api/v1/industries", None).await;
        assert_eq!(status, StatusCode::OK);
        let first = &v["industries"][0];
        assert_eq!(first["name"], "Technology & Software");
        assert!(first["focus_options"].as_array().unwrap().contains(&json!("Enterprise")));
    }

    #[tokio::test]
    async fn test_stateless_search_returns_five_prospects() {
        let app = app();
        let mut body = base_form();
        body["industry_focus"] = json!("Enterprise");
        body["target_role"] = json!("CTO/CIO");

        let (status, v) = send_json(&app, "POST", "/api/v1/prospects/search", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let prospects = v["prospects"].as_array().unwrap();
        assert_eq!(prospects.len(), 5);
        for p in prospects {
            let email = p["email_template"].as_str().unwrap();
            assert!(email.contains("Enterprise initiatives"));
            let follow_ups = p["follow_up_templates"].as_object().unwrap();
            assert_eq!(follow_ups.len(), 3);
            assert!(p["profile_url"]
                .as_str()
                .unwrap()
                .starts_with("https://linkedin.com/in/"));
        }
    }

    #[tokio::test]
    async fn test_search_rejects_missing_required_field() {
        let app = app();
        let body = json!({ "location": "London", "industry": "Education" });
        let (status, v) = send_json(&app, "POST", "/api/v1/prospects/search", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
        assert!(v["error"]["message"].as_str().unwrap().contains("demographic"));
    }

    #[tokio::test]
    async fn test_mistyped_body_is_validation_error_envelope() {
        let app = app();
        let (status, v) = send_json(
            &app,
            "POST",
            "/api/v1/prospects/search",
            Some(json!({ "location": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
        assert!(v["error"]["message"].as_str().unwrap().contains("location"));

        let (status, v) = send_json(&app, "POST", "/api/v1/sessions", Some(json!([1, 2]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unparsable_path_segments_are_validation_errors() {
        let app = app();
        let (status, v) = send_json(&app, "GET", "/api/v1/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

        let id = uuid::Uuid::new_v4();
        let (status, v) = send_json(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/prospects/first"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_two_step_form_flow() {
        let app = app();

        // Step 1
        let (status, v) = send_json(&app, "POST", "/api/v1/sessions", Some(base_form())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(v["step"], "refinement");
        assert!(v["role_options"].as_array().unwrap().contains(&json!("CTO/CIO")));
        let id = v["session_id"].as_str().unwrap().to_string();

        // Navigation before step 2 is a conflict
        let (status, _) =
            send_json(&app, "GET", &format!("/api/v1/sessions/{id}/prospects/0"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}/export"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        // Step 2
        let refinement = json!({ "industry_focus": "Enterprise", "target_role": "CTO/CIO" });
        let (status, v) = send_json(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/refinement"),
            Some(refinement),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["step"], "results");
        assert_eq!(v["criteria"]["industry_focus"], "Enterprise");
        assert_eq!(v["prospects"].as_array().unwrap().len(), 5);
        assert_eq!(v["prospects"][4]["label"], "Prospect 5 of 5");
        assert_eq!(v["stats"]["total_prospects"], 5);
        assert_eq!(v["stats"]["location"], "San Francisco Bay Area");

        // Navigation
        let (status, card) =
            send_json(&app, "GET", &format!("/api/v1/sessions/{id}/prospects/2"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(card["label"], "Prospect 3 of 5");
        assert_eq!(card["follow_up_scenarios"].as_array().unwrap().len(), 3);
        let company = card["prospect"]["company"].as_str().unwrap().to_string();

        let (status, _) =
            send_json(&app, "GET", &format!("/api/v1/sessions/{id}/prospects/5"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Follow-ups
        for scenario in ["positive", "negative", "no-response"] {
            let (status, f) = send_json(
                &app,
                "GET",
                &format!("/api/v1/sessions/{id}/prospects/2/follow-ups/{scenario}"),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK, "scenario {scenario}");
            assert!(f["template"].as_str().unwrap().contains(&company));
        }
        let (status, v) = send_json(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/prospects/2/follow-ups/maybe"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

        // Reset
        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send_json(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_downloads_csv() {
        let app = app();
        let (_, v) = send_json(&app, "POST", "/api/v1/sessions", Some(base_form())).await;
        let id = v["session_id"].as_str().unwrap().to_string();
        send_json(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/refinement"),
            Some(json!({})),
        )
        .await;

        let request = Request::builder()
            .uri(format!("/api/v1/sessions/{id}/export"))
            .body(Body::empty())
            .unwrap();
        let res = app.clone().oneshot(request).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/csv"));
        assert!(res.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains("linkedin_prospects.csv"));

        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let mut reader = csv::Reader::from_reader(bytes.as_ref());
        assert_eq!(reader.records().count(), 5);
    }

    #[tokio::test]
    async fn test_unknown_industry_session_has_no_options_but_generates() {
        let app = app();
        let mut form = base_form();
        form["industry"] = json!("Unknown Sector");
        let (status, v) = send_json(&app, "POST", "/api/v1/sessions", Some(form)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(v["focus_options"].as_array().unwrap().is_empty());
        let id = v["session_id"].as_str().unwrap().to_string();

        let (status, v) = send_json(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/refinement"),
            Some(json!({ "industry_focus": "  ", "target_role": null })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(v["criteria"]["industry_focus"].is_null());
        assert_eq!(v["prospects"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = app();
        let id = uuid::Uuid::new_v4();
        let (status, v) = send_json(
            &app,
            "PUT",
            &format!("/api/v1/sessions/{id}/refinement"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(v["error"]["code"], "NOT_FOUND");
    }
}
