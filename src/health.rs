use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

use crate::content::application::ports::incoming::{ContentStore, LoadState};
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessResponse {
    status: &'static str,
    content: LoadState,
    /// Absent for the local backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Content loaded
/// - Database reachable, when one is configured
#[get("/ready")]
pub async fn readiness(
    data: web::Data<AppState>,
    db: Option<web::Data<Arc<DatabaseConnection>>>,
) -> impl Responder {
    let content = data.content.load_state().await;

    let database = match db {
        Some(db) => Some(
            match db
                .execute(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1",
                ))
                .await
            {
                Ok(_) => "ok",
                Err(_) => "unhealthy",
            },
        ),
        None => None,
    };

    let ready = content == LoadState::Ready && database.unwrap_or("ok") == "ok";

    if ready {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            content,
            database,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            content,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::Value;

    use crate::content::application::ports::outgoing::ContentRepositories;
    use crate::content::application::service::RemoteContentStore;
    use crate::content::adapter::outgoing::{
        ExperienceRepositoryPostgres, MediaRepositoryPostgres, ProjectRepositoryPostgres,
        ReviewRepositoryPostgres, SettingsRepositoryPostgres,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_health_is_always_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_local_store_is_ready_without_database() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["content"], "ready");
        assert!(body.get("database").is_none());
    }

    #[actix_web::test]
    async fn test_unloaded_remote_store_is_not_ready() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }])
                .into_connection(),
        );
        let store = RemoteContentStore::new(ContentRepositories {
            projects: Arc::new(ProjectRepositoryPostgres::new(db.clone())),
            experience: Arc::new(ExperienceRepositoryPostgres::new(db.clone())),
            reviews: Arc::new(ReviewRepositoryPostgres::new(db.clone())),
            media: Arc::new(MediaRepositoryPostgres::new(db.clone())),
            settings: Arc::new(SettingsRepositoryPostgres::new(db.clone())),
        });

        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_content_store(Arc::new(store))
                        .build(),
                )
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["content"], "uninitialized");
        assert_eq!(body["database"], "ok");
    }

    #[actix_web::test]
    async fn test_database_failure_is_not_ready() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_errors([DbErr::Custom("connection refused".to_string())])
                .into_connection(),
        );

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(db))
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["database"], "unhealthy");
    }
}
