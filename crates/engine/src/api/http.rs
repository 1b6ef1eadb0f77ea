//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use larder_domain::InventorySnapshot;

use crate::app::App;
use crate::use_cases::InventoryError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/inventory", get(list_inventory))
        .route("/api/inventory/filter", put(set_filter))
        .route("/api/inventory/items/{name}", post(add_item))
        .route("/api/inventory/items/{name}/increment", post(increment_item))
        .route("/api/inventory/items/{name}/decrement", post(remove_item))
        .route("/api/inventory/items/{name}/favorite", post(toggle_favorite))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_inventory(State(app): State<Arc<App>>) -> Json<InventorySnapshot> {
    Json(app.inventory.visible_records().await)
}

#[derive(serde::Deserialize)]
struct FilterBody {
    filter: String,
}

async fn set_filter(
    State(app): State<Arc<App>>,
    Json(body): Json<FilterBody>,
) -> Json<InventorySnapshot> {
    app.inventory.set_filter(body.filter).await;
    Json(app.inventory.visible_records().await)
}

async fn add_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventorySnapshot>, ApiError> {
    app.inventory.add_item(&name).await?;
    Ok(Json(app.inventory.visible_records().await))
}

async fn increment_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventorySnapshot>, ApiError> {
    app.inventory.increment_item(&name).await?;
    Ok(Json(app.inventory.visible_records().await))
}

async fn remove_item(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<InventorySnapshot>, ApiError> {
    app.inventory.remove_item(&name).await?;
    Ok(Json(app.inventory.visible_records().await))
}

#[derive(serde::Deserialize)]
struct FavoriteBody {
    /// The favorite value currently displayed to the user; the tracker
    /// writes its negation.
    favorite: bool,
}

async fn toggle_favorite(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
    Json(body): Json<FavoriteBody>,
) -> Result<Json<InventorySnapshot>, ApiError> {
    app.inventory.toggle_favorite(&name, body.favorite).await?;
    Ok(Json(app.inventory.visible_records().await))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    StoreUnavailable(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::StoreUnavailable(_) => (
                axum::http::StatusCode::BAD_GATEWAY,
                "Record store unavailable",
            )
                .into_response(),
            ApiError::Internal(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::Validation(e) => ApiError::BadRequest(e.to_string()),
            InventoryError::Store(e) if e.is_unavailable() => {
                ApiError::StoreUnavailable(e.to_string())
            }
            InventoryError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemoryRecordStore;
    use crate::infrastructure::ports::StoreError;
    use crate::use_cases::InventoryTracker;
    use axum::response::IntoResponse;
    use larder_domain::DomainError;

    fn test_app() -> Arc<App> {
        let store = Arc::new(InMemoryRecordStore::new());
        Arc::new(App::new(Arc::new(InventoryTracker::new(store))))
    }

    #[tokio::test]
    async fn add_then_list_round_trip() {
        let app = test_app();

        let Json(records) = add_item(State(app.clone()), Path("egg".to_string()))
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_str(), "egg");
        assert_eq!(records[0].quantity.get(), 1);

        let Json(listed) = list_inventory(State(app)).await;
        assert_eq!(listed, records);
    }

    #[tokio::test]
    async fn decrement_to_zero_empties_inventory() {
        let app = test_app();
        add_item(State(app.clone()), Path("egg".to_string()))
            .await
            .unwrap();

        let Json(records) = remove_item(State(app), Path("egg".to_string()))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn favorite_round_trip() {
        let app = test_app();
        add_item(State(app.clone()), Path("egg".to_string()))
            .await
            .unwrap();

        let Json(records) = toggle_favorite(
            State(app),
            Path("egg".to_string()),
            Json(FavoriteBody { favorite: false }),
        )
        .await
        .unwrap();
        assert!(records[0].favorite);
        assert_eq!(records[0].quantity.get(), 1);
    }

    #[tokio::test]
    async fn filter_narrows_listing() {
        let app = test_app();
        for item in ["Apple", "Banana", "Grape"] {
            add_item(State(app.clone()), Path(item.to_string()))
                .await
                .unwrap();
        }

        let Json(records) = set_filter(
            State(app),
            Json(FilterBody {
                filter: "ap".to_string(),
            }),
        )
        .await;

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Grape"]);
    }

    #[tokio::test]
    async fn blank_name_is_a_bad_request() {
        let app = test_app();
        let result = add_item(State(app), Path("   ".to_string())).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn error_status_codes() {
        let bad = ApiError::from(InventoryError::Validation(DomainError::validation("nope")));
        assert_eq!(
            bad.into_response().status(),
            axum::http::StatusCode::BAD_REQUEST
        );

        let gone = ApiError::from(InventoryError::Store(StoreError::unavailable(
            "fetch_all",
            "connection refused",
        )));
        assert_eq!(
            gone.into_response().status(),
            axum::http::StatusCode::BAD_GATEWAY
        );

        let internal = ApiError::from(InventoryError::Store(StoreError::serialization("bad")));
        assert_eq!(
            internal.into_response().status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
