//! # Todo
//!
//! Todo リソースのドメインモデル。
//!
//! ## 構成
//!
//! - [`TodoId`]: ストレージ層が採番する ObjectId の Newtype
//! - [`TodoDescription`]: 空文字を許さない説明文（値オブジェクト）
//! - [`Todo`]: 採番済みのエンティティ
//! - [`NewTodo`]: 採番前の作成入力
//! - [`TodoPatch`]: 部分更新の入力（フィールドごとに「指定あり / なし」を保持）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::todo::{NewTodo, TodoDescription, TodoId, TodoPatch};
//!
//! let new_todo = NewTodo::new(TodoDescription::new("buy milk")?, None);
//! let todo = new_todo.into_todo(TodoId::new());
//! assert!(!todo.completed());
//!
//! let patch = TodoPatch::new(Some(true), None)?;
//! let updated = todo.apply(&patch);
//! assert!(updated.completed());
//! assert_eq!(updated.description().as_str(), "buy milk");
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use bson::oid::ObjectId;
use derive_more::Display;

use crate::DomainError;

/// 説明文が空のときのエラーメッセージ
pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Todo Description cannot be empty";

// =========================================================================
// TodoId
// =========================================================================

/// Todo の一意識別子
///
/// MongoDB の ObjectId（12 バイト、16 進数 24 桁で表記）をラップする。
/// 作成時にストレージ層が採番し、以後変更されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct TodoId(ObjectId);

impl TodoId {
    /// 新しい ID を生成する
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// 16 進数文字列から ID を復元する
    ///
    /// 24 桁の 16 進数以外は [`DomainError::InvalidIdentifier`] を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidIdentifier(value.to_string()))
    }

    /// 既存の ObjectId から ID を作成する
    pub fn from_object_id(oid: ObjectId) -> Self {
        Self(oid)
    }

    /// 内部の ObjectId 参照を取得する
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TodoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =========================================================================
// TodoDescription
// =========================================================================

/// Todo の説明文（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない（入力は加工せずに保持する）
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct TodoDescription(String);

impl TodoDescription {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                EMPTY_DESCRIPTION_MESSAGE.to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

// =========================================================================
// Todo
// =========================================================================

/// Todo エンティティ
///
/// 永続化済み（ID 採番済み）の Todo を表す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:          TodoId,
    completed:   bool,
    description: TodoDescription,
}

impl Todo {
    /// 永続化済みの値から復元する
    pub fn from_db(id: TodoId, completed: bool, description: TodoDescription) -> Self {
        Self {
            id,
            completed,
            description,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn description(&self) -> &TodoDescription {
        &self.description
    }

    /// 部分更新を適用した新しい状態を返す
    ///
    /// パッチで指定されていないフィールドは元の値を保持する。
    pub fn apply(&self, patch: &TodoPatch) -> Self {
        Self {
            id:          self.id,
            completed:   patch.completed().unwrap_or(self.completed),
            description: patch
                .description()
                .cloned()
                .unwrap_or_else(|| self.description.clone()),
        }
    }
}

// =========================================================================
// NewTodo
// =========================================================================

/// 作成入力（ID 採番前の Todo）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: TodoDescription,
    pub completed:   bool,
}

impl NewTodo {
    /// 作成入力を組み立てる
    ///
    /// `completed` 未指定時は `false`。
    pub fn new(description: TodoDescription, completed: Option<bool>) -> Self {
        Self {
            description,
            completed: completed.unwrap_or(false),
        }
    }

    /// 採番された ID を付与してエンティティにする
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo::from_db(id, self.completed, self.description)
    }
}

// =========================================================================
// TodoPatch
// =========================================================================

/// 部分更新の入力
///
/// 各フィールドは `None` なら「変更なし」、`Some` なら置換する値。
///
/// # 不変条件
///
/// - 少なくとも 1 つのフィールドが `Some`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    completed:   Option<bool>,
    description: Option<TodoDescription>,
}

impl TodoPatch {
    pub fn new(
        completed: Option<bool>,
        description: Option<TodoDescription>,
    ) -> Result<Self, DomainError> {
        if completed.is_none() && description.is_none() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        Ok(Self {
            completed,
            description,
        })
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }

    pub fn description(&self) -> Option<&TodoDescription> {
        self.description.as_ref()
    }
}
