//! データ整形エージェントの CSV を表として表示する
//!
//! カンマ区切り・ダブルクォート（`""` でエスケープ）・LF / CRLF 改行に対応する小さなリーダ。
//! 解析に失敗しても致命的ではなく、呼び出し側は警告を出して生の CSV を残す。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("empty CSV")]
    Empty,
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
    #[error("unexpected character after closing quote on line {line}")]
    TrailingAfterQuote { line: usize },
    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// 解析済みの表（1 行目がヘッダ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

fn parse_records(text: &str) -> Result<Vec<(usize, Vec<String>)>, CsvError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut state = State::FieldStart;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (state, c) {
            (State::Quoted, '"') => state = State::QuoteInQuoted,
            (State::Quoted, ch) => {
                if ch == '\n' {
                    line += 1;
                }
                field.push(ch);
            }
            (State::QuoteInQuoted, '"') => {
                field.push('"');
                state = State::Quoted;
            }
            (State::FieldStart, '"') => {
                state = State::Quoted;
                quote_line = line;
            }
            (_, ',') => {
                record.push(std::mem::take(&mut field));
                state = State::FieldStart;
            }
            (_, '\r') if chars.peek() == Some(&'\n') => {}
            (_, '\n') => {
                record.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut record)));
                line += 1;
                record_line = line;
                state = State::FieldStart;
            }
            (State::QuoteInQuoted, _) => return Err(CsvError::TrailingAfterQuote { line }),
            (_, ch) => {
                field.push(ch);
                state = State::Unquoted;
            }
        }
    }

    match state {
        State::Quoted => return Err(CsvError::UnterminatedQuote { line: quote_line }),
        // 末尾改行のみで終わった場合は空レコードを作らない
        State::FieldStart if record.is_empty() && field.is_empty() => {}
        _ => {
            record.push(field);
            records.push((record_line, record));
        }
    }
    Ok(records)
}

/// CSV 文字列を表に解析する
///
/// 空行は読み飛ばす。すべての行がヘッダと同じ列数でなければエラー。
pub fn parse_csv(text: &str) -> Result<CsvTable, CsvError> {
    let mut records = parse_records(text)?
        .into_iter()
        .filter(|(_, r)| !(r.len() == 1 && r[0].trim().is_empty()));

    let (_, header) = records.next().ok_or(CsvError::Empty)?;
    let expected = header.len();
    let mut rows = Vec::new();
    for (line, record) in records {
        if record.len() != expected {
            return Err(CsvError::RaggedRow {
                line,
                expected,
                found: record.len(),
            });
        }
        rows.push(record);
    }
    Ok(CsvTable { header, rows })
}

/// 列幅をそろえたテキスト表にする
pub fn render_table(table: &CsvTable) -> String {
    let width = |s: &str| s.chars().count();
    let mut widths: Vec<usize> = table.header.iter().map(|h| width(h)).collect();
    for row in &table.rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{}{}", cell, " ".repeat(w.saturating_sub(width(cell)))))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = format_row(&table.header);
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &table.rows {
        out.push('\n');
        out.push_str(&format_row(row));
    }
    out
}
