//! 入力テキストの取得（引数・ファイル・標準入力）

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use common::error::Error;

/// 主入力の取り出し元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 位置引数をスペースで連結したもの
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// 位置引数から決める。空か "-" 1 つなら標準入力
    pub fn from_args(file: Option<PathBuf>, words: Vec<String>) -> Result<Self, Error> {
        match (file, words.as_slice()) {
            (Some(_), [_, ..]) => Err(Error::invalid_argument(
                "give the input either as text or with --file, not both",
            )),
            (Some(path), []) => Ok(Self::File(path)),
            (None, []) => Ok(Self::Stdin),
            (None, [only]) if only == "-" => Ok(Self::Stdin),
            (None, _) => Ok(Self::Args(words)),
        }
    }
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path)
        .map_err(|e| Error::io_msg(format!("{}: {}", path.display(), e)))
}

/// 入力を読み出し、空白のみなら usage エラーにする
pub fn read_input(source: &InputSource, stdin: &mut dyn Read, what: &str) -> Result<String, Error> {
    let text = match source {
        InputSource::Args(words) => words.join(" "),
        InputSource::File(path) => read_file(path)?,
        InputSource::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
            buf
        }
    };
    non_blank(text, what)
}

/// 求人票（--job / --job-file）を読み出す
pub fn read_job_description(text: Option<String>, file: Option<PathBuf>) -> Result<Option<String>, Error> {
    let raw = match (text, file) {
        (Some(_), Some(_)) => {
            return Err(Error::invalid_argument(
                "--job and --job-file cannot be used together",
            ))
        }
        (Some(t), None) => t,
        (None, Some(path)) => read_file(&path)?,
        (None, None) => return Ok(None),
    };
    non_blank(raw, "job description").map(Some)
}

fn non_blank(text: String, what: &str) -> Result<String, Error> {
    if text.trim().is_empty() {
        return Err(Error::invalid_argument(format!("No {} provided.", what)));
    }
    Ok(text)
}
