//! チャット完了 API
//!
//! system + human の 2 メッセージを送り、応答テキストを 1 回で受け取る。

pub mod openai_compat;
pub mod provider;

pub use openai_compat::OpenAiCompatCompletion;
pub use provider::{ChatCompletion, ChatMessage, ChatRequest, Role};
