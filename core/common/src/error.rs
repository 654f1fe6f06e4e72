//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits に合わせる。

use thiserror::Error;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 引数不正（64）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・設定の不備（64）
    #[error("{0}")]
    Env(String),
    /// HTTP 通信の失敗（74）
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析の失敗（74）
    #[error("{0}")]
    Json(String),
    /// I/O エラー（74）
    #[error("{0}")]
    Io(String),
    /// その他の内部エラー（70）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::System(_) => 70,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
        }
    }

    /// 使い方の表示が必要なエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
