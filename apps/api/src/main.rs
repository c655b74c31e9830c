//! # TodoFlow API サーバー
//!
//! Todo の CRUD を提供する HTTP サーバーのエントリーポイント。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! cargo run -p todoflow-api
//!
//! # 本番環境（.env を読み込まない）
//! ENV=production PORT=5000 MONGODB_URI=mongodb+srv://... cargo run -p todoflow-api --release
//! ```
//!
//! 環境変数の一覧は [`todoflow_api::config`] を参照。

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todoflow_api::{
    app_builder::build_app,
    config::{AppConfig, Environment},
};
use todoflow_infra::{db, repository::MongoTodoRepository};
use todoflow_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "todoflow-api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番以外では .env を読み込む（存在しなければ起動しない）
    Environment::from_env().load_dotenv()?;

    // トレーシング初期化
    init_tracing(TracingConfig::from_env(SERVICE_NAME));
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    // 設定読み込み
    let config = AppConfig::from_env()?;

    tracing::info!(
        "API サーバーを起動します: {}:{} ({:?})",
        config.server.host,
        config.server.port,
        config.environment
    );

    // MongoDB 接続
    let client = db::create_client(&config.database.uri)
        .await
        .context("MongoDB クライアントの作成に失敗しました")?;
    let database = client.database(&config.database.database);
    db::ping(&database)
        .await
        .context("MongoDB への接続に失敗しました")?;
    tracing::info!(
        database = %config.database.database,
        collection = %config.database.collection,
        "MongoDB に接続しました"
    );

    let repository = Arc::new(MongoTodoRepository::new(
        database,
        &config.database.collection,
    ));
    let app = build_app(repository);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("MongoDB クライアントを終了します");
    client.shutdown().await;

    Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンを開始します");
}
