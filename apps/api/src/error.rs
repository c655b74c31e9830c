//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## 設計方針
//!
//! - **RFC 9457 準拠**: レスポンスボディは `todoflow_shared::ErrorResponse`
//! - **5xx の詳細は返さない**: 内部エラーの内容はログにのみ出力する
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + JSON)
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status | detail |
//! |----------|-------------|--------|
//! | InvalidIdentifier | 400 | `Invalid todo ID` |
//! | Validation | 400 | 検証メッセージ |
//! | InvalidBody | 400 | `Invalid request body` |
//! | NoFieldsToUpdate | 400 | `No valid fields to update` |
//! | NotFound | 404 | `Todo not found or failed to update` |
//! | Decode / LookupFailed / Storage | 500 | 固定メッセージ |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_domain::DomainError;
use todoflow_infra::InfraError;
use todoflow_shared::ErrorResponse;

pub const INVALID_ID_MESSAGE: &str = "Invalid todo ID";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const NO_FIELDS_MESSAGE: &str = "No valid fields to update";
pub const NOT_FOUND_MESSAGE: &str = "Todo not found or failed to update";

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// パスの ID が ObjectId として解釈できない
    #[error("不正な Todo ID: {0}")]
    InvalidIdentifier(String),

    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 更新リクエストのボディがデコードできない（400）
    #[error("リクエストボディが不正です: {0}")]
    InvalidBody(String),

    #[error("更新対象のフィールドがありません")]
    NoFieldsToUpdate,

    /// 更新対象が存在しない（404）
    #[error("Todo が見つかりません")]
    NotFound,

    /// 作成リクエストのボディがデコードできない（500）
    ///
    /// 更新時の [`InvalidBody`](ApiError::InvalidBody) とは扱いが異なる。
    #[error("リクエストボディのデコードに失敗しました: {0}")]
    Decode(String),

    /// ID 指定の取得で対象が存在しない（500）
    #[error("Todo の取得に失敗しました: {0}")]
    LookupFailed(String),

    #[error("ストレージエラー: {0}")]
    Storage(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidIdentifier(value) => Self::InvalidIdentifier(value),
            DomainError::NoFieldsToUpdate => Self::NoFieldsToUpdate,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidIdentifier(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("invalid-id", "Bad Request", 400, INVALID_ID_MESSAGE),
            ),
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(msg),
            ),
            ApiError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(INVALID_BODY_MESSAGE),
            ),
            ApiError::NoFieldsToUpdate => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(NO_FIELDS_MESSAGE),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(NOT_FOUND_MESSAGE),
            ),
            ApiError::Decode(msg) => {
                tracing::error!(error = %msg, "リクエストボディのデコードに失敗しました");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            ApiError::LookupFailed(msg) => {
                tracing::warn!(error = %msg, "Todo の取得に失敗しました");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
            ApiError::Storage(err) => {
                tracing::error!(
                    error = %err,
                    span_trace = %err.span_trace(),
                    "ストレージエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
