use axum::{Router, http::Method};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health_check,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition_detail,
    ),
    components(
        schemas(
            records::dto::health::HealthResponse,
            records::models::Competition,
            records::models::StatusFlags,
            records::models::CompetitionDetail,
            records::models::Race,
            records::models::Run,
            records::models::RaceResult,
            records::models::TechnicalDelegate,
            records::models::Broadcaster,
            records::models::Discipline,
            records::models::Gender,
        )
    ),
    tags(
        (name = "health", description = "Service liveness"),
        (name = "competitions", description = "FIS alpine calendar and event details"),
    )
)]
pub struct ApiDoc;

pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::health::routes::routes())
        .nest(
            "/api/v1/competitions",
            features::competitions::routes::routes(),
        )
        .with_state(state)
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use collector::{CollectorError, CompetitionSource, FetchError};
    use records::models::{
        Competition, CompetitionDetail, Discipline, Gender, StatusFlags,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    /// In-memory calendar; `slow` makes every detail lookup outlast any deadline.
    struct FakeSource {
        competitions: Vec<Competition>,
        slow: bool,
    }

    fn competition(event_id: &str, category: &str, location: &str, gender: Gender) -> Competition {
        Competition {
            event_id: event_id.to_string(),
            date: "26-27 Oct 2024".to_string(),
            location: location.to_string(),
            country: "AUT".to_string(),
            discipline: vec![Discipline::GiantSlalom],
            category: category.to_string(),
            gender,
            cancelled: false,
            status: StatusFlags::from_positions([true; 4]),
            url: None,
            is_live: false,
        }
    }

    #[async_trait::async_trait]
    impl CompetitionSource for FakeSource {
        async fn list_competitions(&self, category: &str) -> collector::Result<Vec<Competition>> {
            Ok(self
                .competitions
                .iter()
                .filter(|c| c.category == category)
                .cloned()
                .collect())
        }

        async fn competition_detail(&self, event_id: &str) -> collector::Result<CompetitionDetail> {
            if self.slow {
                tokio::time::sleep(Duration::from_secs(600)).await;
            }
            if event_id == "503" {
                return Err(CollectorError::Fetch(FetchError::Status {
                    status: 503,
                    url: "https://www.fis-ski.com/DB/general/event-details.html".to_string(),
                }));
            }

            let competition = self
                .competitions
                .iter()
                .find(|c| c.event_id == event_id)
                .cloned()
                .ok_or_else(|| CollectorError::NotFound(event_id.to_string()))?;

            Ok(CompetitionDetail {
                competition: Some(competition),
                races: Vec::new(),
                technical_delegates: Vec::new(),
                broadcasters: Vec::new(),
                documents: BTreeMap::new(),
            })
        }
    }

    fn app(slow: bool) -> Router {
        let source = FakeSource {
            competitions: vec![
                competition("55579", "WC", "Soelden", Gender::Men),
                competition("55580", "WC", "Soelden", Gender::Women),
                competition("55600", "WC", "Levi", Gender::Women),
                competition("56000", "WSC", "Saalbach", Gender::Both),
            ],
            slow,
        };
        build_app(AppState::new(Arc::new(source), Duration::from_secs(120)))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    fn event_ids(body: &Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|c| c["event_id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(app(false), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_defaults_to_world_cup() {
        let (status, body) = get(app(false), "/api/v1/competitions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(event_ids(&body), vec!["55579", "55580", "55600"]);
        assert_eq!(body[0]["gender"], "M");
        assert_eq!(body[0]["discipline"][0], "GS");
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (_, body) = get(app(false), "/api/v1/competitions?gender=W&location=sOeL").await;
        assert_eq!(event_ids(&body), vec!["55580"]);

        let (_, body) = get(app(false), "/api/v1/competitions?discipline=SL").await;
        assert!(event_ids(&body).is_empty());

        let (_, body) = get(app(false), "/api/v1/competitions?category=WSC").await;
        assert_eq!(event_ids(&body), vec!["56000"]);
    }

    #[tokio::test]
    async fn test_unknown_filter_codes_return_empty_list() {
        let (status, body) = get(app(false), "/api/v1/competitions?gender=X").await;
        assert_eq!(status, StatusCode::OK);
        assert!(event_ids(&body).is_empty());

        let (status, body) = get(app(false), "/api/v1/competitions?discipline=gs").await;
        assert_eq!(status, StatusCode::OK);
        assert!(event_ids(&body).is_empty());

        let (status, body) = get(app(false), "/api/v1/competitions?discipline=GS&gender=M").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(event_ids(&body), vec!["55579"]);
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_category() {
        let (status, body) = get(app(false), "/api/v1/competitions?category=W%2FC").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Validation failed");
    }

    #[tokio::test]
    async fn test_detail() {
        let (status, body) = get(app(false), "/api/v1/competitions/56000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["competition"]["category"], "WSC");
        assert_eq!(body["races"], Value::Array(Vec::new()));
    }

    #[tokio::test]
    async fn test_detail_not_found_is_404() {
        let (status, body) = get(app(false), "/api/v1/competitions/1").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Competition not found: 1");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_message() {
        let (status, body) = get(app(false), "/api/v1/competitions/503").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["detail"].as_str().unwrap().starts_with("HTTP error 503"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_upstream_hits_deadline() {
        let (status, body) = get(app(true), "/api/v1/competitions/55579").await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["detail"], "Upstream request timed out");
    }
}
