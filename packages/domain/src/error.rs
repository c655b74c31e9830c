//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗など、ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 説明文が空 |
//! | `InvalidIdentifier` | 400 Bad Request | ObjectId として解釈できない ID |
//! | `NoFieldsToUpdate` | 400 Bad Request | 更新対象フィールドが 1 つもない |
//!
//! HTTP ステータスへの変換は API 層の責務。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 必須フィールドの未入力など、入力値がルールに違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 不正な識別子
    ///
    /// 文字列を ObjectId（24 桁の 16 進数）として解釈できなかった場合に使用する。
    /// 保持する値はクライアントから受け取った元の文字列。
    #[error("不正な識別子です: {0}")]
    InvalidIdentifier(String),

    /// 更新対象フィールドなし
    ///
    /// 部分更新リクエストに認識できるフィールドが 1 つも含まれていない。
    #[error("更新対象のフィールドがありません")]
    NoFieldsToUpdate,
}
