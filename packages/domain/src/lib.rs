//! # TodoFlow ドメイン層
//!
//! Todo リソースのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（MongoDB ドライバ、HTTP）には依存しない。
//! 識別子の表現として BSON の ObjectId のみを借用する。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use todoflow_domain::{DomainError, todo::TodoId};
//!
//! let id = TodoId::parse("65f1a2b3c4d5e6f708192a3b").unwrap();
//! assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708192a3b");
//!
//! let err = TodoId::parse("not-an-id").unwrap_err();
//! assert!(matches!(err, DomainError::InvalidIdentifier(_)));
//! ```

pub mod error;
pub mod todo;

pub use error::DomainError;
