//! リクエスト（種別ごとの入力ペイロード）
//!
//! 生成後は不変。空文字チェックは CLI 側で行い、ここでは検証しない。

use crate::domain::Variant;
use common::error::Error;

/// 1 回分の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Research { topic: String },
    Email { email_body: String },
    Minutes { transcript: String },
    Resume { resume: String, job_description: String },
    Social { announcement: String },
    Contract { legal_text: String },
    BugHunt { code_snippet: String },
    DataClean { messy_data: String },
}

impl Request {
    /// 種別と入力文字列から組み立てる
    ///
    /// `secondary` は Resume の求人票のみ。それ以外で渡されたらエラー。
    pub fn new(variant: Variant, primary: String, secondary: Option<String>) -> Result<Self, Error> {
        match (variant, secondary) {
            (Variant::Resume, Some(job_description)) => Ok(Self::Resume {
                resume: primary,
                job_description,
            }),
            (Variant::Resume, None) => Err(Error::invalid_argument(
                "resume requires a job description (--job or --job-file)",
            )),
            (other, Some(_)) => Err(Error::invalid_argument(format!(
                "{} does not take a job description",
                other.id()
            ))),
            (Variant::Research, None) => Ok(Self::Research { topic: primary }),
            (Variant::Email, None) => Ok(Self::Email { email_body: primary }),
            (Variant::Minutes, None) => Ok(Self::Minutes { transcript: primary }),
            (Variant::Social, None) => Ok(Self::Social { announcement: primary }),
            (Variant::Contract, None) => Ok(Self::Contract { legal_text: primary }),
            (Variant::BugHunt, None) => Ok(Self::BugHunt { code_snippet: primary }),
            (Variant::DataClean, None) => Ok(Self::DataClean { messy_data: primary }),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Research { .. } => Variant::Research,
            Self::Email { .. } => Variant::Email,
            Self::Minutes { .. } => Variant::Minutes,
            Self::Resume { .. } => Variant::Resume,
            Self::Social { .. } => Variant::Social,
            Self::Contract { .. } => Variant::Contract,
            Self::BugHunt { .. } => Variant::BugHunt,
            Self::DataClean { .. } => Variant::DataClean,
        }
    }

    /// 主入力（Resume なら履歴書本文）
    pub fn primary(&self) -> &str {
        match self {
            Self::Research { topic } => topic,
            Self::Email { email_body } => email_body,
            Self::Minutes { transcript } => transcript,
            Self::Resume { resume, .. } => resume,
            Self::Social { announcement } => announcement,
            Self::Contract { legal_text } => legal_text,
            Self::BugHunt { code_snippet } => code_snippet,
            Self::DataClean { messy_data } => messy_data,
        }
    }

    /// テンプレートへ差し込む値の一覧（プレースホルダ名, 値）
    pub fn bindings(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Resume {
                resume,
                job_description,
            } => vec![
                ("resume", resume.as_str()),
                ("job_description", job_description.as_str()),
            ],
            other => vec![("input", other.primary())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maps_each_variant() {
        for v in Variant::ALL {
            let secondary = v.takes_job_description().then(|| "JD".to_string());
            let req = Request::new(v, "text".to_string(), secondary).unwrap();
            assert_eq!(req.variant(), v);
            assert_eq!(req.primary(), "text");
        }
    }

    #[test]
    fn test_resume_requires_job_description() {
        let err = Request::new(Variant::Resume, "cv".to_string(), None).unwrap_err();
        assert!(err.to_string().contains("job description"));
        assert!(err.is_usage());
    }

    #[test]
    fn test_job_description_rejected_elsewhere() {
        let err = Request::new(Variant::Email, "hi".to_string(), Some("JD".to_string())).unwrap_err();
        assert!(err.to_string().contains("email does not take"));
    }

    #[test]
    fn test_bindings() {
        let req = Request::new(Variant::Resume, "cv".to_string(), Some("jd".to_string())).unwrap();
        assert_eq!(req.bindings(), vec![("resume", "cv"), ("job_description", "jd")]);
        let req = Request::new(Variant::Minutes, "t".to_string(), None).unwrap();
        assert_eq!(req.bindings(), vec![("input", "t")]);
    }
}
