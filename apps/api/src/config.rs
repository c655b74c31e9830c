//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。
//! 本番以外の環境では、起動時に `.env` ファイルを環境変数へ展開する。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `ENV` | No | `development` | `production` 以外なら `.env` を読み込む |
//! | `MONGODB_URI` | **Yes** | - | MongoDB 接続文字列 |
//! | `MONGODB_DATABASE` | No | `golang_db` | データベース名 |
//! | `MONGODB_COLLECTION` | No | `todos` | コレクション名 |
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | **Yes** | - | ポート番号 |
//!
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は `todoflow_shared::observability` が読む。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todoflow_api::config::{AppConfig, Environment};
//!
//! let environment = Environment::from_env();
//! environment.load_dotenv()?;
//! let config = AppConfig::from_env()?;
//! ```

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATABASE: &str = "golang_db";
const DEFAULT_COLLECTION: &str = "todos";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// ポート番号として解釈できない
    #[error("PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),

    /// 本番以外で `.env` を読み込めなかった
    #[error(".env ファイルの読み込みに失敗しました: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// 実行環境
///
/// `ENV=production` のときのみ本番扱い。それ以外の値はすべて開発環境として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        if value == "production" {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// 環境変数 `ENV` から読み取る
    pub fn from_env() -> Self {
        env::var("ENV")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    /// 本番以外なら `.env` を読み込む
    ///
    /// 本番以外で `.env` が存在しない場合はエラー。本番では何もしない。
    pub fn load_dotenv(self) -> Result<(), ConfigError> {
        if self.is_production() {
            return Ok(());
        }
        dotenvy::dotenv()?;
        Ok(())
    }
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host: String,
    /// ポート番号
    pub port: u16,
}

/// MongoDB 接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 接続文字列（資格情報を含みうるためログに出さない）
    pub uri:        String,
    pub database:   String,
    pub collection: String,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server:      ServerConfig,
    pub database:    DatabaseConfig,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// `from_env` の実体。テストではプロセス環境を書き換えずに値を渡す。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let optional = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port_raw = required("PORT")?;
        let port = port_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        Ok(Self {
            environment: lookup("ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or_default(),
            server:      ServerConfig {
                host: optional("HOST", DEFAULT_HOST),
                port,
            },
            database:    DatabaseConfig {
                uri:        required("MONGODB_URI")?,
                database:   optional("MONGODB_DATABASE", DEFAULT_DATABASE),
                collection: optional("MONGODB_COLLECTION", DEFAULT_COLLECTION),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_必須項目のみでデフォルト値が使われる() {
        let lookup = lookup_from(&[("PORT", "5000"), ("MONGODB_URI", "mongodb://localhost")]);

        let config = AppConfig::from_lookup(lookup).unwrap();

        assert_eq!(
            config,
            AppConfig {
                environment: Environment::Development,
                server:      ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 5000,
                },
                database:    DatabaseConfig {
                    uri:        "mongodb://localhost".to_string(),
                    database:   "golang_db".to_string(),
                    collection: "todos".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_任意項目を上書きできる() {
        let lookup = lookup_from(&[
            ("ENV", "production"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("MONGODB_URI", "mongodb://db"),
            ("MONGODB_DATABASE", "app"),
            ("MONGODB_COLLECTION", "items"),
        ]);

        let config = AppConfig::from_lookup(lookup).unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.database, "app");
        assert_eq!(config.database.collection, "items");
    }

    #[test]
    fn test_portが未設定ならエラー() {
        let lookup = lookup_from(&[("MONGODB_URI", "mongodb://localhost")]);

        let err = AppConfig::from_lookup(lookup).unwrap_err();

        assert!(matches!(err, ConfigError::Missing("PORT")));
    }

    #[test]
    fn test_mongodb_uriが未設定ならエラー() {
        let lookup = lookup_from(&[("PORT", "5000")]);

        let err = AppConfig::from_lookup(lookup).unwrap_err();

        assert!(matches!(err, ConfigError::Missing("MONGODB_URI")));
    }

    #[rstest]
    #[case::数値以外("abc")]
    #[case::範囲外("70000")]
    #[case::空文字("")]
    fn test_不正なportはエラー(#[case] port: &str) {
        let lookup = lookup_from(&[("PORT", port), ("MONGODB_URI", "mongodb://localhost")]);

        let err = AppConfig::from_lookup(lookup).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[rstest]
    #[case::本番("production", Environment::Production)]
    #[case::開発("development", Environment::Development)]
    #[case::大文字は本番扱いしない("PRODUCTION", Environment::Development)]
    #[case::空文字("", Environment::Development)]
    fn test_environmentのparse(#[case] input: &str, #[case] expected: Environment) {
        assert_eq!(Environment::parse(input), expected);
    }

    #[test]
    fn test_本番ではenvファイルを読み込まない() {
        assert!(Environment::Production.load_dotenv().is_ok());
    }
}
