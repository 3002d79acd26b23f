use axum::extract::{FromRequest, FromRequestParts};

pub(crate) mod budget;
pub(crate) mod daily_logs;
pub(crate) mod dashboard;
pub(crate) mod equipment;
pub(crate) mod error;
pub(crate) mod expenses;
pub(crate) mod materials;
pub(crate) mod projects;
pub(crate) mod reports;
pub(crate) mod suppliers;
pub(crate) mod workers;

pub(crate) use error::ApiError;

/// `axum::Json` with rejections rendered as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub(crate) struct JsonBody<T>(pub T);

/// `axum::extract::Query` with rejections rendered as [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub(crate) struct QueryParams<T>(pub T);
