//! Success envelope helpers for handlers.
//!
//! Every response body is an [`ApiResponse`]; handlers build success bodies
//! through [`ok`] and [`ok_with_message`] and let [`AppError`](crate::error::AppError)
//! produce the failure shape.

use axum::Json;
use imagiq_core::envelope::ApiResponse;
use serde::Serialize;

pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok_with_message(data, message))
}
