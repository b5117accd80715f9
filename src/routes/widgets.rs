use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderName, StatusCode},
    routing::get,
};

use crate::{
    extract::{ApiPath, ApiQuery, ValidatedJson},
    response::ApiResult,
    schemas::{ListWidgetsQuery, WidgetInput, WidgetPatch, WidgetResponse},
    services::{ServiceContext, WidgetService},
    state::AppState,
};

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/widgets", get(list_widgets).post(create_widget))
        .route("/widgets/", get(list_widgets).post(create_widget))
        .route(
            "/widgets/{id}",
            get(get_widget)
                .put(update_widget)
                .patch(patch_widget)
                .delete(delete_widget),
        )
        .with_state(state)
}

fn widget_service(state: &AppState) -> WidgetService {
    ServiceContext::from_state(state).widget()
}

async fn create_widget(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<WidgetInput>,
) -> ApiResult<(StatusCode, Json<WidgetResponse>)> {
    let widget = widget_service(state.as_ref()).create(&body).await?;
    Ok((StatusCode::CREATED, Json(widget.into())))
}

async fn list_widgets(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ListWidgetsQuery>,
) -> ApiResult<([(HeaderName, String); 1], Json<Vec<WidgetResponse>>)> {
    let (widgets, total) = widget_service(state.as_ref())
        .list(query.offset(), query.limit(), query.order())
        .await?;
    let body = widgets.into_iter().map(WidgetResponse::from).collect();
    Ok(([(TOTAL_COUNT_HEADER, total.to_string())], Json(body)))
}

async fn get_widget(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget = widget_service(state.as_ref()).get(id).await?;
    Ok(Json(widget.into()))
}

async fn update_widget(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(body): ValidatedJson<WidgetInput>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget = widget_service(state.as_ref()).update(id, &body).await?;
    Ok(Json(widget.into()))
}

async fn patch_widget(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(body): ValidatedJson<WidgetPatch>,
) -> ApiResult<Json<WidgetResponse>> {
    let widget = widget_service(state.as_ref()).patch(id, body).await?;
    Ok(Json(widget.into()))
}

async fn delete_widget(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    widget_service(state.as_ref()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
