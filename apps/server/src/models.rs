use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use quotebook_core::quotes as core_quotes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: i32,
    pub quote: String,
}

impl From<core_quotes::Quote> for Quote {
    fn from(q: core_quotes::Quote) -> Self {
        Self {
            id: q.id,
            quote: q.text,
        }
    }
}

/// A single quote under its `QuoteObject` root name.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct QuoteObject {
    #[serde(rename = "QuoteObject")]
    pub quote_object: Quote,
}

impl From<core_quotes::Quote> for QuoteObject {
    fn from(q: core_quotes::Quote) -> Self {
        Self {
            quote_object: q.into(),
        }
    }
}

/// Pre-rendered text sent with an `application/json` content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonText(pub String);

impl IntoResponse for JsonText {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}
