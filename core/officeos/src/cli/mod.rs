//! CLI 層: 引数解析・OfficeCommand への変換・結果表示

mod args;
mod output;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
#[cfg(test)]
pub use args::parse_args_from;
pub use output::{write_agent_list, write_result};
