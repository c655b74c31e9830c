//! # Todo ハンドラ
//!
//! `/api/todos` 配下の CRUD エンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET    /api/todos        一覧（0 件なら {"data": "Todos Not Available"}）
//! POST   /api/todos        作成
//! GET    /api/todos/{id}   1 件取得
//! PATCH  /api/todos/{id}   部分更新（更新前の状態を返す）
//! DELETE /api/todos/{id}   削除（存在しなくても成功）
//! ```
//!
//! ボディのデコード失敗は、作成では 500、更新では 400 として扱う。
//! そのため `Json` 抽出は `Result` で受け取り、ハンドラ側でエラーに変換する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use todoflow_domain::todo::{NewTodo, Todo, TodoDescription, TodoId, TodoPatch};
use todoflow_infra::repository::TodoRepository;
use todoflow_shared::{ApiResponse, MessageResponse};

use crate::error::ApiError;

pub const NO_TODOS_MESSAGE: &str = "Todos Not Available";
pub const CREATED_MESSAGE: &str = "Todo Created Successfully";
pub const UPDATED_MESSAGE: &str = "Todo Updated Successfully";
pub const DELETED_MESSAGE: &str = "Todo Deleted Successfully";

/// Todo API の共有状態
pub struct TodoState {
    pub repository: Arc<dyn TodoRepository>,
}

// --- リクエスト/レスポンス型 ---

/// Todo DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoDto {
    pub id:          String,
    pub completed:   bool,
    pub description: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:          todo.id().to_string(),
            completed:   todo.completed(),
            description: todo.description().as_str().to_string(),
        }
    }
}

/// Todo 作成リクエスト
///
/// `id` や `desc` などの未知のフィールドは無視する（ID は常にストレージ層が採番）。
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed:   Option<bool>,
}

/// Todo 更新リクエスト
///
/// 認識するのは `completed` と `description` のみで、他のキーは無視する。
/// `null` は未指定と同じ扱い。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub completed:   Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

// --- ハンドラ ---

/// GET /api/todos
///
/// 全件をストレージの既定順で返す。0 件の場合は配列ではなく
/// `{"data": "Todos Not Available"}` を返す。
#[tracing::instrument(skip_all)]
pub async fn list_todos(State(state): State<Arc<TodoState>>) -> Result<Response, ApiError> {
    let todos = state.repository.find_all().await?;

    if todos.is_empty() {
        return Ok((StatusCode::OK, Json(ApiResponse::new(NO_TODOS_MESSAGE))).into_response());
    }

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
    Ok((StatusCode::OK, Json(items)).into_response())
}

/// GET /api/todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: Todo
/// - `400 Bad Request`: ID が不正
/// - `500 Internal Server Error`: 存在しない、またはストレージエラー
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = TodoId::parse(&id)?;

    let todo = state
        .repository
        .find_by_id(&todo_id)
        .await?
        .ok_or_else(|| ApiError::LookupFailed(format!("_id={todo_id} のドキュメントが存在しません")))?;

    Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// POST /api/todos
///
/// ## レスポンス
///
/// - `201 Created`: 採番済みの Todo とメッセージ
/// - `400 Bad Request`: description が空または未指定
/// - `500 Internal Server Error`: ボディのデコード失敗、ストレージエラー
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Decode(e.body_text()))?;

    let description = TodoDescription::new(req.description.unwrap_or_default())?;
    let new_todo = NewTodo::new(description, req.completed);

    let todo = state.repository.insert(&new_todo).await?;
    tracing::info!(id = %todo.id(), "Todo を作成しました");

    let response = ApiResponse::with_message(TodoDto::from(&todo), CREATED_MESSAGE);
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /api/todos/{id}
///
/// 指定されたフィールドのみ置換し、**更新前**の Todo を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 更新前の Todo とメッセージ
/// - `400 Bad Request`: ID 不正、ボディ不正、更新項目なし、description が空
/// - `404 Not Found`: 対象が存在しない
/// - `500 Internal Server Error`: ストレージエラー
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = TodoId::parse(&id)?;
    let Json(req) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let description = req.description.map(TodoDescription::new).transpose()?;
    let patch = TodoPatch::new(req.completed, description)?;

    let previous = state
        .repository
        .update(&todo_id, &patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    let response = ApiResponse::with_message(TodoDto::from(&previous), UPDATED_MESSAGE);
    Ok((StatusCode::OK, Json(response)))
}

/// DELETE /api/todos/{id}
///
/// 対象が存在しなくても成功を返す。
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let todo_id = TodoId::parse(&id)?;

    let deleted = state.repository.delete(&todo_id).await?;
    tracing::debug!(deleted, "Todo を削除しました");

    Ok((StatusCode::OK, Json(MessageResponse::new(DELETED_MESSAGE))))
}
