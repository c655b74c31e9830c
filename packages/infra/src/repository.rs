//! # リポジトリ実装
//!
//! ドメイン型の永続化を担当するリポジトリを提供する。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: API 層は `dyn TodoRepository` のみを扱う
//! - **テスタビリティ**: インメモリ実装に差し替えてハンドラをテストできる

pub mod todo_repository;

pub use todo_repository::{MongoTodoRepository, TodoDocument, TodoRepository};
