//! # TodoFlow インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ドメイン層の型を MongoDB のドキュメントと相互変換し、永続化の詳細を
//! リポジトリトレイトの背後に隠す。API 層はトレイト経由でのみ永続化を行う。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘
//!     shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - MongoDB クライアントの作成と疎通確認
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todoflow_infra::{db, repository::MongoTodoRepository};
//!
//! async fn setup() -> Result<(), todoflow_infra::InfraError> {
//!     let client = db::create_client("mongodb://localhost:27017").await?;
//!     let database = client.database("golang_db");
//!     db::ping(&database).await?;
//!
//!     let repository = MongoTodoRepository::new(database, "todos");
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::InfraError;
