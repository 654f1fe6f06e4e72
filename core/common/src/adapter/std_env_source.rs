//! 標準環境変数実装（std::env を委譲）と、テスト用のマップ実装

use crate::ports::outbound::EnvSource;
use std::collections::HashMap;
use std::env;

/// 標準環境変数実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok().filter(|s| !s.trim().is_empty())
    }
}

/// 固定マップから読む実装（テスト・埋め込み用）
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn var(&self, name: &str) -> Option<String> {
        self.vars
            .get(name)
            .filter(|s| !s.trim().is_empty())
            .cloned()
    }
}
