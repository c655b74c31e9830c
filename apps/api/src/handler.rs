//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証はドメイン型、永続化はリポジトリに委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # 死活監視（/, /health, /health/ready）
//!     └── todo.rs     # Todo CRUD（/api/todos）
//! ```

pub mod health;
pub mod todo;

pub use health::{ReadinessState, health_check, liveness, readiness_check};
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
