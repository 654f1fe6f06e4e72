//! エージェント種別（8 種固定）

use std::fmt;
use std::str::FromStr;

use common::error::Error;

/// エージェント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Research,
    Email,
    Minutes,
    Resume,
    Social,
    Contract,
    BugHunt,
    DataClean,
}

impl Variant {
    /// メニュー表示順
    pub const ALL: [Variant; 8] = [
        Variant::Research,
        Variant::Email,
        Variant::Minutes,
        Variant::Resume,
        Variant::Social,
        Variant::Contract,
        Variant::BugHunt,
        Variant::DataClean,
    ];

    /// CLI で指定する識別子
    pub fn id(&self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Email => "email",
            Self::Minutes => "minutes",
            Self::Resume => "resume",
            Self::Social => "social",
            Self::Contract => "contract",
            Self::BugHunt => "bug-hunt",
            Self::DataClean => "data-clean",
        }
    }

    /// メニュー上の表示名
    pub fn label(&self) -> &'static str {
        match self {
            Self::Research => "Market Researcher",
            Self::Email => "Email Auto-Drafter",
            Self::Minutes => "Meeting Minutes",
            Self::Resume => "Resume Screener",
            Self::Social => "Social Media Engine",
            Self::Contract => "Contract Simplifier",
            Self::BugHunt => "Code Bug Hunter",
            Self::DataClean => "Data Cleaner",
        }
    }

    /// 担当部署
    pub fn department(&self) -> &'static str {
        match self {
            Self::Research => "Marketing",
            Self::Email => "Admin",
            Self::Minutes => "Ops",
            Self::Resume => "HR",
            Self::Social => "Content",
            Self::Contract => "Legal",
            Self::BugHunt => "IT",
            Self::DataClean => "Finance",
        }
    }

    /// 2 つ目の入力（求人票）を取るか
    pub fn takes_job_description(&self) -> bool {
        matches!(self, Self::Resume)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.id() == wanted || v.id().replace('-', "_") == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = Variant::ALL.iter().map(|v| v.id()).collect();
                Error::invalid_argument(format!(
                    "Unknown agent: {}. Available agents: {}",
                    s,
                    ids.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_parse_back() {
        for v in Variant::ALL {
            assert_eq!(v.id().parse::<Variant>().unwrap(), v);
        }
        let mut ids: Vec<&str> = Variant::ALL.iter().map(|v| v.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_parse_accepts_case_and_underscore() {
        assert_eq!("Bug_Hunt".parse::<Variant>().unwrap(), Variant::BugHunt);
        assert_eq!(" DATA-CLEAN ".parse::<Variant>().unwrap(), Variant::DataClean);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "astrology".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("Unknown agent: astrology"));
        assert!(err.to_string().contains("data-clean"));
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_only_resume_takes_job_description() {
        let with_job: Vec<Variant> = Variant::ALL
            .iter()
            .copied()
            .filter(|v| v.takes_job_description())
            .collect();
        assert_eq!(with_job, vec![Variant::Resume]);
    }
}
