//! 結果の表示
//!
//! stdout には結果だけを書く。表を描けなかった旨の警告は stderr 側へ返す。

use std::io::Write;

use common::error::Error;

use crate::domain::{profile_for, Variant};
use crate::usecase::csv_table::{parse_csv, render_table};

pub const TABLE_WARNING: &str = "Could not render table, but CSV is valid above.";

/// 結果を書き出す。戻り値は stderr に出すべき警告
pub fn write_result(out: &mut dyn Write, variant: Variant, result: &str) -> Result<Option<&'static str>, Error> {
    let profile = profile_for(variant);
    writeln!(out, "✅ {}", profile.status.result_title)?;
    writeln!(out)?;
    writeln!(out, "{}", result)?;

    if variant != Variant::DataClean {
        return Ok(None);
    }
    let warning = match parse_csv(result) {
        Ok(table) => {
            writeln!(out)?;
            writeln!(out, "{}", render_table(&table))?;
            None
        }
        Err(_) => Some(TABLE_WARNING),
    };
    Ok(warning)
}

/// エージェント一覧（id・表示名・部署）
pub fn write_agent_list(out: &mut dyn Write) -> Result<(), Error> {
    let width = Variant::ALL.iter().map(|v| v.id().len()).max().unwrap_or(0);
    for v in Variant::ALL {
        writeln!(
            out,
            "{:<width$}  {} ({})",
            v.id(),
            v.label(),
            v.department(),
            width = width
        )?;
    }
    Ok(())
}
