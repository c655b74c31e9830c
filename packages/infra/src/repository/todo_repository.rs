//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 コマンド**: 各メソッドは MongoDB コマンドを 1 回だけ発行する。
//!   単一ドキュメントの原子性は MongoDB に委ねる
//! - **採番はストレージ層**: 挿入時に `_id` を送らず、ドライバが付与した
//!   ObjectId を `InsertOneResult` から受け取る
//! - **更新は更新前を返す**: `findOneAndUpdate` の `ReturnDocument::Before`
//!
//! ## 保存形式
//!
//! ```json
//! { "_id": ObjectId("..."), "completed": false, "desc": "buy milk" }
//! ```

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{NewTodo, Todo, TodoDescription, TodoId, TodoPatch};

use crate::{db, error::InfraError};

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件をストレージの既定順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// ID で検索する
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

    /// 挿入し、採番済みの Todo を返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError>;

    /// 指定フィールドのみ置換し、**更新前**の状態を返す
    ///
    /// 対象が存在しない場合は `Ok(None)`。
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError>;

    /// 削除し、削除件数を返す（存在しなければ 0）
    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError>;

    /// ストレージへの疎通を確認する
    async fn ping(&self) -> Result<(), InfraError>;
}

// =========================================================================
// 保存形式（BSON ドキュメント）
// =========================================================================

/// コレクションに保存される Todo ドキュメント
///
/// フィールド名は既存コレクションとの互換のため `desc` を使用する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id:        Option<ObjectId>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub desc:      String,
}

impl From<&NewTodo> for TodoDocument {
    fn from(new_todo: &NewTodo) -> Self {
        Self {
            id:        None,
            completed: new_todo.completed,
            desc:      new_todo.description.as_str().to_string(),
        }
    }
}

impl TryFrom<TodoDocument> for Todo {
    type Error = InfraError;

    fn try_from(document: TodoDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| InfraError::unexpected("_id のないドキュメントを読み込みました"))?;
        let description = TodoDescription::new(document.desc).map_err(|e| {
            InfraError::unexpected(format!("不正な desc を持つドキュメント(_id={id}): {e}"))
        })?;

        Ok(Todo::from_db(
            TodoId::from_object_id(id),
            document.completed,
            description,
        ))
    }
}

/// ID 一致のフィルタを作成する
fn id_filter(id: &TodoId) -> Document {
    doc! { "_id": *id.as_object_id() }
}

/// 部分更新の `$set` ドキュメントを作成する
///
/// パッチで指定されたフィールドのみを含める。
pub fn update_document(patch: &TodoPatch) -> Document {
    let mut fields = Document::new();
    if let Some(completed) = patch.completed() {
        fields.insert("completed", completed);
    }
    if let Some(description) = patch.description() {
        fields.insert("desc", description.as_str());
    }
    doc! { "$set": fields }
}

// =========================================================================
// MongoDB 実装
// =========================================================================

/// MongoDB 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct MongoTodoRepository {
    database:   Database,
    collection: Collection<TodoDocument>,
}

impl MongoTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection::<TodoDocument>(collection_name);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl TodoRepository for MongoTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let documents: Vec<TodoDocument> = self.collection.find(doc! {}).await?.try_collect().await?;

        documents.into_iter().map(Todo::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        self.collection
            .find_one(id_filter(id))
            .await?
            .map(Todo::try_from)
            .transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let result = self
            .collection
            .insert_one(TodoDocument::from(new_todo))
            .await?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            InfraError::unexpected(format!(
                "採番された _id が ObjectId ではありません: {}",
                result.inserted_id
            ))
        })?;

        Ok(new_todo.clone().into_todo(TodoId::from_object_id(oid)))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError> {
        self.collection
            .find_one_and_update(id_filter(id), update_document(patch))
            .return_document(ReturnDocument::Before)
            .await?
            .map(Todo::try_from)
            .transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), InfraError> {
        db::ping(&self.database).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn description(value: &str) -> TodoDescription {
        TodoDescription::new(value).unwrap()
    }

    #[test]
    fn test_new_todoから作るドキュメントは_idを含まない() {
        let new_todo = NewTodo::new(description("buy milk"), None);

        let document = bson::to_document(&TodoDocument::from(&new_todo)).unwrap();

        assert_eq!(document, doc! { "completed": false, "desc": "buy milk" });
    }

    #[test]
    fn test_保存済みドキュメントからtodoを復元する() {
        let oid = ObjectId::new();
        let document = TodoDocument {
            id:        Some(oid),
            completed: true,
            desc:      "buy milk".to_string(),
        };

        let todo = Todo::try_from(document).unwrap();

        assert_eq!(todo.id(), &TodoId::from_object_id(oid));
        assert!(todo.completed());
        assert_eq!(todo.description().as_str(), "buy milk");
    }

    #[test]
    fn test_completed欠落のドキュメントはfalseとして読む() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "desc": "legacy" };

        let document: TodoDocument = bson::from_document(raw).unwrap();
        let todo = Todo::try_from(document).unwrap();

        assert!(!todo.completed());
    }

    #[test]
    fn test_descが空のドキュメントは復元できない() {
        let document = TodoDocument {
            id:        Some(ObjectId::new()),
            completed: false,
            desc:      String::new(),
        };

        assert!(Todo::try_from(document).is_err());
    }

    #[test]
    fn test__idのないドキュメントは復元できない() {
        let document = TodoDocument {
            id:        None,
            completed: false,
            desc:      "a".to_string(),
        };

        assert!(Todo::try_from(document).is_err());
    }

    #[test]
    fn test_update_documentはcompletedのみを含む() {
        let patch = TodoPatch::new(Some(true), None).unwrap();

        assert_eq!(
            update_document(&patch),
            doc! { "$set": { "completed": true } }
        );
    }

    #[test]
    fn test_update_documentは両フィールドを含む() {
        let patch = TodoPatch::new(Some(false), Some(description("buy eggs"))).unwrap();

        assert_eq!(
            update_document(&patch),
            doc! { "$set": { "completed": false, "desc": "buy eggs" } }
        );
    }
}
