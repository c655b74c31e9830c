//! # ヘルスチェック共通型
//!
//! 死活監視エンドポイントで使用されるレスポンス型を提供する。
//!
//! - [`LivenessResponse`]: ルート `GET /` の固定ペイロード
//! - [`HealthResponse`]: `GET /health`
//! - [`ReadinessResponse`]: `GET /health/ready`（依存サービスの接続確認）

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// ルートの死活確認メッセージ
pub const LIVENESS_MESSAGE: &str = "Backend is Live 🎉🎉🎉";

/// ルート `GET /` の固定ペイロード
///
/// 既存クライアントとの互換のため、キーは大文字始まりの `Status`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessResponse {
    #[serde(rename = "Status")]
    pub status: String,
}

impl LivenessResponse {
    pub fn live() -> Self {
        Self {
            status: LIVENESS_MESSAGE.to_string(),
        }
    }
}

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use todoflow_shared::HealthResponse;
///
/// let response = HealthResponse {
///     status:  "healthy".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"` または `"unhealthy"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

/// 個別チェックの結果ステータス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// チェック成功
    Ok,
    /// チェック失敗
    Error,
}

/// Readiness 全体のステータス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    /// 全依存サービスが利用可能
    Ready,
    /// 一部の依存サービスが利用不可
    NotReady,
}

/// Readiness Check レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// 全体のステータス
    pub status: ReadinessStatus,
    /// 個別チェック結果（キー: チェック名、値: ステータス）
    pub checks: HashMap<String, CheckStatus>,
}

impl ReadinessResponse {
    /// 個別チェック結果から全体のステータスを決めて組み立てる
    pub fn from_checks(checks: HashMap<String, CheckStatus>) -> Self {
        let status = if checks.values().all(|s| *s == CheckStatus::Ok) {
            ReadinessStatus::Ready
        } else {
            ReadinessStatus::NotReady
        };
        Self { status, checks }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_liveness_responseはstatusキーを大文字で出力する() {
        let json = serde_json::to_value(LivenessResponse::live()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "Status": "Backend is Live 🎉🎉🎉" })
        );
    }

    #[test]
    fn test_health_responseのserializeで正しいjson形状にする() {
        let response = HealthResponse {
            status:  "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "version": "0.1.0"
            })
        );
    }

    #[test]
    fn test_from_checks_全て成功ならready() {
        let mut checks = HashMap::new();
        checks.insert("database".to_string(), CheckStatus::Ok);

        let response = ReadinessResponse::from_checks(checks);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "ready");
        assert_eq!(json["checks"]["database"], "ok");
    }

    #[test]
    fn test_from_checks_失敗を含むならnot_ready() {
        let mut checks = HashMap::new();
        checks.insert("database".to_string(), CheckStatus::Error);

        let response = ReadinessResponse::from_checks(checks);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "not_ready");
        assert_eq!(json["checks"]["database"], "error");
    }
}
