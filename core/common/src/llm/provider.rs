//! チャット完了のトレイト定義

use crate::domain::ModelName;
use crate::error::Error;

/// メッセージの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    Human,
}

impl Role {
    /// Chat Completions API 上の role 名
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Human => "user",
        }
    }
}

/// メッセージ構造体
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self {
            role: Role::Human,
            content: content.into(),
        }
    }
}

/// 1 回分の完了リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: ModelName,
    pub temperature: f32,
    /// 順序付き（system, human）
    pub messages: Vec<ChatMessage>,
}

/// チャット完了プロバイダのトレイト
///
/// 実装は `OpenAiCompatCompletion`（HTTP）やテスト用のスタブなど。
/// リトライ・タイムアウト上書きは行わない。失敗はそのまま呼び出し側へ返す。
pub trait ChatCompletion: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストを送り、応答テキスト（message.content）を返す
    fn complete(&self, request: &ChatRequest) -> Result<String, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let sys = ChatMessage::system("You are a Data Engineer.");
        assert_eq!(sys.role, Role::System);
        let human = ChatMessage::human("Messy Data:\nx");
        assert_eq!(human.role, Role::Human);
        assert_eq!(human.content, "Messy Data:\nx");
    }

    #[test]
    fn test_role_api_names() {
        assert_eq!(Role::System.as_api_str(), "system");
        assert_eq!(Role::Human.as_api_str(), "user");
    }
}
