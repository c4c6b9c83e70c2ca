pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::dashboard::handlers as dashboard;
use crate::jobs::handlers as jobs;
use crate::state::AppState;
use crate::submissions::handlers as submissions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyze-resume",
            post(analysis::handle_analyze_resume),
        )
        .route(
            "/api/v1/submissions/:id",
            get(submissions::handle_get_submission),
        )
        // HR dashboard
        .route(
            "/api/v1/dashboard/stats",
            get(dashboard::handle_dashboard_stats),
        )
        .route(
            "/api/v1/hr/candidates",
            get(dashboard::handle_list_candidates),
        )
        // Job catalog
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::scorer::FixedJitter;
    use crate::config::Config;
    use crate::jobs::catalog::InMemoryJobCatalog;
    use crate::jobs::seed::default_job_postings;
    use crate::submissions::store::InMemorySubmissionLog;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                database_url: None,
                port: 0,
                rust_log: "debug".to_string(),
                ats_jitter_seed: None,
                recent_submissions_limit: 2,
                seed_default_jobs: true,
            },
            jobs: Arc::new(InMemoryJobCatalog::new(default_job_postings())),
            submissions: Arc::new(InMemorySubmissionLog::default()),
            jitter: Arc::new(FixedJitter(0.0)),
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_with_explicit_skills() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({
                "job_description": "Frontend Engineer\nShip UI.",
                "resume_text": "Shipped react apps with modern css.",
                "skills": ["React", "TypeScript", "CSS"]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_skills"], json!(["React", "CSS"]));
        assert_eq!(body["missing_skills"], json!(["TypeScript"]));
        assert_eq!(body["match_score"], 67);
        assert_eq!(body["ats_score"], 67);
        assert_eq!(body["feedback"].as_array().unwrap().len(), 3);
        assert_eq!(body["submission_id"].as_str().unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_analyze_by_job_id_then_fetch_submission() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({
                "job_id": "2",
                "job_description": "",
                "resume_text": "Python, Django and PostgreSQL on AWS"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], 50);
        let id = body["submission_id"].as_str().unwrap().to_string();

        let (status, detail) =
            send(&app, Method::GET, &format!("/api/v1/submissions/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["job_id"], "2");
        assert!(detail["job_description"]
            .as_str()
            .unwrap()
            .starts_with("We are seeking a Backend Developer"));

        let legacy = detail["legacy_id"].as_str().unwrap().to_string();
        let (status, by_legacy) =
            send(&app, Method::GET, &format!("/api/v1/submissions/{legacy}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_legacy["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_vocabulary_source() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({
                "job_description": "Unknown posting",
                "resume_text": "Rust"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_rejects_unknown_job_id_even_with_explicit_skills() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({
                "job_id": "nope",
                "job_description": "x",
                "resume_text": "rust",
                "skills": ["Rust"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (_, dashboard) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
        assert_eq!(dashboard["stats"]["total_submissions"], 0);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_resume() {
        let app = build_router(test_state());
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({ "job_id": "1", "job_description": "", "resume_text": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, dashboard) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
        assert_eq!(dashboard["stats"]["total_submissions"], 0);
    }

    #[tokio::test]
    async fn test_unknown_submission_is_404() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/submissions/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_empty_dashboard() {
        let app = build_router(test_state());
        let (status, body) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "recent_submissions": [],
                "stats": {
                    "avg_match_score": 0,
                    "avg_ats_score": 0,
                    "total_submissions": 0,
                    "common_missing_skills": []
                }
            })
        );
    }

    #[tokio::test]
    async fn test_dashboard_aggregates_full_history_and_limits_recent() {
        let app = build_router(test_state());
        for resume in [
            "Skills: A",       // missing B, C
            "Skills: A and B", // missing C
            "Skills: C",       // missing A, B
        ] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/v1/analyze-resume",
                Some(json!({
                    "job_description": format!("Letters job for {resume}"),
                    "resume_text": resume,
                    "skills": ["A", "B", "C"]
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_submissions"], 3);
        // (33 + 67 + 33) / 3
        assert_eq!(body["stats"]["avg_match_score"], 44);
        assert_eq!(
            body["stats"]["common_missing_skills"],
            json!([
                {"skill": "B", "count": 2},
                {"skill": "C", "count": 2},
                {"skill": "A", "count": 1}
            ])
        );
        let recent = body["recent_submissions"].as_array().unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0]["job_description"], "Letters job for Skills: C");
    }

    #[tokio::test]
    async fn test_candidates_filtered_and_sorted() {
        let app = build_router(test_state());
        for (job_id, resume) in [
            ("1", "React.js JavaScript HTML CSS"),
            ("1", "JavaScript only"),
            ("2", "Python"),
        ] {
            send(
                &app,
                Method::POST,
                "/api/v1/analyze-resume",
                Some(json!({ "job_id": job_id, "job_description": "", "resume_text": resume })),
            )
            .await;
        }

        let (status, body) =
            send(&app, Method::GET, "/api/v1/hr/candidates?job_id=1&min_score=20", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["analysis_result"]["match_score"], 50);
    }

    #[tokio::test]
    async fn test_candidates_ignore_unparsable_score_bounds() {
        let app = build_router(test_state());
        send(
            &app,
            Method::POST,
            "/api/v1/analyze-resume",
            Some(json!({ "job_id": "1", "job_description": "", "resume_text": "JavaScript" })),
        )
        .await;

        let (status, body) =
            send(&app, Method::GET, "/api/v1/hr/candidates?min_score=abc&max_score=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_identical_burst_is_fully_counted() {
        let app = build_router(test_state());
        for _ in 0..20 {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/v1/analyze-resume",
                Some(json!({
                    "job_id": "1",
                    "job_description": "",
                    "resume_text": "React.js and TypeScript"
                })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, dashboard) = send(&app, Method::GET, "/api/v1/dashboard/stats", None).await;
        assert_eq!(dashboard["stats"]["total_submissions"], 20);

        let (_, candidates) = send(&app, Method::GET, "/api/v1/hr/candidates", None).await;
        let ids: std::collections::HashSet<&str> = candidates
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_create_and_get_job() {
        let app = build_router(test_state());
        let (status, created) = send(
            &app,
            Method::POST,
            "/api/v1/jobs",
            Some(json!({
                "title": "Rust Engineer",
                "company": "Ferrous",
                "description": "Systems work.",
                "skills": ["Rust", "Tokio", " "]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["skills"], json!(["Rust", "Tokio"]));

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/jobs/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["title"], "Rust Engineer");

        let (_, jobs) = send(&app, Method::GET, "/api/v1/jobs", None).await;
        assert_eq!(jobs.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_create_job_without_skills_is_rejected() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs",
            Some(json!({
                "title": "Rust Engineer",
                "company": "Ferrous",
                "description": "Systems work.",
                "skills": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
