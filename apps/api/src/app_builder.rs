//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use todoflow_infra::repository::TodoRepository;
use todoflow_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    ReadinessState,
    TodoState,
    create_todo,
    delete_todo,
    get_todo,
    health_check,
    liveness,
    list_todos,
    readiness_check,
    update_todo,
};

/// State の構築とルーター定義を行う
///
/// リポジトリは起動時に一度だけ作成し、各 State で共有する。
pub fn build_app(repository: Arc<dyn TodoRepository>) -> Router {
    let todo_state = Arc::new(TodoState {
        repository: repository.clone(),
    });
    let readiness_state = Arc::new(ReadinessState { repository });

    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state)
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(todo_state)
        .layer(cors_layer())
        // Request ID レイヤー（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: スパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// CORS 設定
///
/// 任意のオリジンから資格情報付きで呼び出せるようにする。
/// 資格情報を許可する場合はワイルドカードを使えないため、
/// オリジンはリクエストの値をそのまま返し、メソッドとヘッダーは列挙する。
/// メソッドはルーティングしているものに限る。
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}
