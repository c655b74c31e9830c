//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todoflow-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 挿入順を保持するため、一覧はコレクションの自然順と同じく作成順になる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todoflow_domain::todo::{NewTodo, Todo, TodoId, TodoPatch};

use crate::{error::InfraError, repository::TodoRepository};

// ===== InMemoryTodoRepository =====

#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みの状態を直接追加する
    pub fn add_todo(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    /// 現在の保存内容を取得する
    pub fn snapshot(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(&self, new_todo: &NewTodo) -> Result<Todo, InfraError> {
        let todo = new_todo.clone().into_todo(TodoId::new());
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> Result<Option<Todo>, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let Some(stored) = todos.iter_mut().find(|t| t.id() == id) else {
            return Ok(None);
        };

        let previous = stored.clone();
        *stored = previous.apply(patch);
        Ok(Some(previous))
    }

    async fn delete(&self, id: &TodoId) -> Result<u64, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok((before - todos.len()) as u64)
    }

    async fn ping(&self) -> Result<(), InfraError> {
        Ok(())
    }
}
