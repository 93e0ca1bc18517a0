use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{JsonText, Quote, QuoteObject},
};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get, post, put},
    Json, Router,
};
use quotebook_core::quotes::PageRequest;

pub const WELCOME: &str = "Welcome to Willy Moore's RESTful Web Service Landing Page!";

#[utoipa::path(get, path = "/quotes", responses((status = 200, description = "Landing page", body = String, content_type = "text/plain")))]
pub async fn landing() -> &'static str {
    WELCOME
}

/// One JSON object per line, each terminated by `\n`.
#[utoipa::path(
    get,
    path = "/quotes/getAllQuotes",
    params(
        ("page" = Option<i32>, Query, description = "1-based page, defaults to 1"),
        ("per_page" = Option<i32>, Query, description = "Page size, defaults to 5"),
    ),
    responses(
        (status = 200, description = "Newline-terminated quote objects", body = String, content_type = "application/json"),
        (status = 404, description = "Page or page size is not an integer"),
        (status = 500, description = "Page window outside the collection"),
    )
)]
pub async fn get_all_quotes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> ApiResult<JsonText> {
    let Query(request) = query?;
    let quotes = state.quote_service.get_quotes_page(request)?;
    let mut body = String::new();
    for quote in quotes {
        body.push_str(&serde_json::to_string(&Quote::from(quote))?);
        body.push('\n');
    }
    Ok(JsonText(body))
}

#[utoipa::path(
    get,
    path = "/quotes/getQuote/{id}",
    params(("id" = i32, Path, description = "Quote id")),
    responses(
        (status = 200, body = QuoteObject),
        (status = 400, description = "Quote Not Found"),
        (status = 404, description = "Id is not an integer"),
    )
)]
pub async fn get_quote(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuoteObject>> {
    let Path(id) = path?;
    let quote = state.quote_service.get_quote(id)?;
    Ok(Json(QuoteObject::from(quote)))
}

#[utoipa::path(
    post,
    path = "/quotes/addQuote/{quote}",
    params(("quote" = String, Path, description = "Quote text, percent-encoded")),
    responses((status = 200, body = QuoteObject))
)]
pub async fn add_quote(
    path: Result<Path<String>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuoteObject>> {
    let Path(text) = path?;
    let created = state.quote_service.create_quote(text).await?;
    Ok(Json(QuoteObject::from(created)))
}

#[utoipa::path(
    put,
    path = "/quotes/updateQuote/{id}/{quote}",
    params(
        ("id" = i32, Path, description = "Quote id"),
        ("quote" = String, Path, description = "Replacement text, percent-encoded"),
    ),
    responses(
        (status = 200, body = QuoteObject),
        (status = 400, description = "Quote Not Found"),
        (status = 404, description = "Id is not an integer"),
    )
)]
pub async fn update_quote(
    path: Result<Path<(i32, String)>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuoteObject>> {
    let Path((id, text)) = path?;
    let updated = state.quote_service.update_quote(id, text).await?;
    Ok(Json(QuoteObject::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/quotes/deleteQuote/{id}",
    params(("id" = i32, Path, description = "Quote id")),
    responses(
        (status = 200, description = "Removal confirmation", body = String),
        (status = 400, description = "Quote Not Found"),
        (status = 404, description = "Id is not an integer"),
    )
)]
pub async fn delete_quote(
    path: Result<Path<i32>, PathRejection>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<JsonText> {
    let Path(id) = path?;
    state.quote_service.delete_quote(id).await?;
    Ok(JsonText(format!("Quote {id}successfully removed!")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(landing))
        .route("/quotes/getAllQuotes", get(get_all_quotes))
        .route("/quotes/getQuote/{id}", get(get_quote))
        .route("/quotes/addQuote/{quote}", post(add_quote))
        .route("/quotes/updateQuote/{id}/{quote}", put(update_quote))
        .route("/quotes/deleteQuote/{id}", delete(delete_quote))
}
