//! # TodoFlow API サーバー
//!
//! Todo リソースを JSON over HTTP で公開する API サーバーのライブラリ部分。
//! バイナリ `todoflow-api`（`main.rs`）と統合テストの両方から使用する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Client    │────▶│ todoflow-api│────▶│   MongoDB   │
//! │             │     │ (PORT)      │     │ (todos)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の初期化とルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todoflow_api::app_builder::build_app;
//! use todoflow_infra::mock::InMemoryTodoRepository;
//!
//! let app = build_app(Arc::new(InMemoryTodoRepository::new()));
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
