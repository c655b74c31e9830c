//! # TodoFlow 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API クレートの責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::{ApiResponse, MessageResponse};
pub use error_response::ErrorResponse;
pub use health::{
    CheckStatus,
    HealthResponse,
    LivenessResponse,
    ReadinessResponse,
    ReadinessStatus,
};
