//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /              固定ペイロード（既存クライアント互換）
//! GET /health        プロセスの稼働確認
//! GET /health/ready  MongoDB への疎通確認
//! ```

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use todoflow_infra::repository::TodoRepository;
use todoflow_shared::{
    CheckStatus,
    HealthResponse,
    LivenessResponse,
    ReadinessResponse,
    ReadinessStatus,
};

/// 疎通確認のタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// ルートの死活確認エンドポイント
///
/// 依存サービスを確認せず、常に `{"Status": "Backend is Live 🎉🎉🎉"}` を返す。
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse::live())
}

/// ヘルスチェックエンドポイント
///
/// データベースへの接続は確認せず、アプリケーション自体の起動状態のみを返す。
///
/// ```text
/// $ curl http://localhost:5000/health
/// {"status":"healthy","version":"0.1.0"}
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub repository: Arc<dyn TodoRepository>,
}

/// Readiness Check エンドポイント
///
/// MongoDB に ping を送り、成功なら 200、失敗またはタイムアウトなら 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let mut checks = HashMap::new();
    checks.insert(
        "database".to_string(),
        check_database(state.repository.as_ref()).await,
    );

    let response = ReadinessResponse::from_checks(checks);
    let http_status = match response.status {
        ReadinessStatus::Ready => StatusCode::OK,
        ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
    };

    (http_status, Json(response))
}

async fn check_database(repository: &dyn TodoRepository) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, repository.ping()).await {
        Ok(Ok(())) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: database ping failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: database check timed out");
            CheckStatus::Error
        }
    }
}
