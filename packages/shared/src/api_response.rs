//! # API レスポンスエンベロープ
//!
//! 公開 API のレスポンス形式 `{ "data": T, "message": "..." }` と
//! `{ "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// データ付きレスポンス
///
/// `message` は省略可能で、`None` の場合は JSON に出力しない。
///
/// ## 使用例
///
/// ```
/// use todoflow_shared::ApiResponse;
///
/// let response = ApiResponse::with_message("hello", "Todo Created Successfully");
/// assert_eq!(response.data, "hello");
/// assert_eq!(response.message.as_deref(), Some("Todo Created Successfully"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data:    T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// データのみの `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// メッセージ付きの `ApiResponse` を作成する
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// メッセージのみのレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_newはmessageを出力しない() {
        let response = ApiResponse::new("hello");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": "hello" }));
    }

    #[test]
    fn test_with_messageはdataとmessageを出力する() {
        let response = ApiResponse::with_message(vec![1, 2], "done");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": [1, 2], "message": "done" }));
    }

    #[test]
    fn test_message欠落のjsonをデシリアライズできる() {
        let response: ApiResponse<String> = serde_json::from_str(r#"{"data": "world"}"#).unwrap();

        assert_eq!(response, ApiResponse::new("world".to_string()));
    }

    #[test]
    fn test_message_responseのjson形状() {
        let json = serde_json::to_value(MessageResponse::new("deleted")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "deleted" }));
    }
}
