//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! API 共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務
//! - よく使うエラー種別は便利コンストラクタで提供し、URI のハードコードを排除

use serde::{Deserialize, Serialize};

/// error_type URI のベースパス
const ERROR_TYPE_BASE: &str = "https://todoflow.example.com/errors";

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    ///
    /// `error_type_suffix` はベース URI に付加される（例: `"invalid-id"`）。
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("bad-request", "Bad Request", 400, detail)
    }

    /// 404 Not Found
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not-found", "Not Found", 404, detail)
    }

    /// 400 Validation Error
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new("validation-error", "Validation Error", 400, detail)
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定値（内部情報を漏らさないため）。
    pub fn internal_error() -> Self {
        Self::new(
            "internal-error",
            "Internal Server Error",
            500,
            "内部エラーが発生しました",
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_で全フィールドが正しく設定される() {
        let error = ErrorResponse::new("invalid-id", "Invalid Identifier", 400, "Invalid todo ID");

        assert_eq!(
            error.error_type,
            "https://todoflow.example.com/errors/invalid-id"
        );
        assert_eq!(error.title, "Invalid Identifier");
        assert_eq!(error.status, 400);
        assert_eq!(error.detail, "Invalid todo ID");
    }

    #[test]
    fn test_internal_error_が500と固定detailを返す() {
        let error = ErrorResponse::internal_error();

        assert_eq!(
            error.error_type,
            "https://todoflow.example.com/errors/internal-error"
        );
        assert_eq!(error.status, 500);
        assert_eq!(error.detail, "内部エラーが発生しました");
    }

    #[test]
    fn test_jsonシリアライズでtypeフィールド名が正しい() {
        let error = ErrorResponse::bad_request("Invalid request body");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json["type"],
            "https://todoflow.example.com/errors/bad-request"
        );
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["status"], 400);
        assert_eq!(json["detail"], "Invalid request body");
        assert!(json.get("error_type").is_none());
    }

    #[test]
    fn test_全便利コンストラクタのstatusが正しい() {
        assert_eq!(ErrorResponse::bad_request("").status, 400);
        assert_eq!(ErrorResponse::not_found("").status, 404);
        assert_eq!(ErrorResponse::validation_error("").status, 400);
        assert_eq!(ErrorResponse::internal_error().status, 500);
    }
}
