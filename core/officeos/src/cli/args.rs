use std::io::{self, Read};
use std::path::PathBuf;

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

use crate::adapter::{read_input, read_job_description, InputSource};
use crate::domain::{OfficeCommand, Request, Variant};

pub const BIN_NAME: &str = "officeos";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -L / --list: エージェント一覧を表示
    pub list: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    /// -f / --file: 主入力をファイルから読む
    pub file: Option<PathBuf>,
    /// --job: 求人票（resume のみ）
    pub job: Option<String>,
    /// --job-file: 求人票をファイルから読む（resume のみ）
    pub job_file: Option<PathBuf>,
    pub agent: Option<String>,
    pub text_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Run one of the OfficeOS office agents on a piece of text")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list")
                .short('L')
                .long("list")
                .help("List available agents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit structured logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("file")
                .short('f')
                .long("file")
                .value_name("path")
                .help("Read the input text from a file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("job")
                .long("job")
                .value_name("text")
                .help("Job description (resume only)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("job-file")
                .long("job-file")
                .value_name("path")
                .help("Read the job description from a file (resume only)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("agent")
                .index(1)
                .value_name("agent")
                .help("Agent id (research, email, minutes, resume, social, contract, bug-hunt, data-clean)"),
        )
        .arg(
            clap::Arg::new("text")
                .index(2)
                .value_name("text")
                .help("Input text; omit or use - to read stdin")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list: matches.get_flag("list"),
        verbose: matches.get_flag("verbose"),
        file: matches.get_one::<PathBuf>("file").cloned(),
        job: matches.get_one::<String>("job").cloned(),
        job_file: matches.get_one::<PathBuf>("job-file").cloned(),
        agent: matches.get_one::<String>("agent").cloned(),
        text_args: matches
            .get_many::<String>("text")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
}

/// 入力の呼び名（空入力のエラー文言用）
fn input_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Research => "topic",
        Variant::Email => "email",
        Variant::Minutes => "transcript",
        Variant::Resume => "resume",
        Variant::Social => "announcement",
        Variant::Contract => "legal text",
        Variant::BugHunt => "code",
        Variant::DataClean => "data",
    }
}

/// Config を OfficeCommand に変換する（入力テキストの読み込みを含む）
pub fn config_to_command(config: Config, stdin: &mut dyn Read) -> Result<OfficeCommand, Error> {
    if config.help {
        return Ok(OfficeCommand::Help);
    }

    if config.list {
        return Ok(OfficeCommand::ListAgents);
    }

    let variant: Variant = config
        .agent
        .as_deref()
        .ok_or_else(|| Error::invalid_argument("No agent given. Use -L to list agents."))?
        .parse()?;

    // 求人票の有無は入力を読む前に検査する（stdin を待たせない）
    let has_job = config.job.is_some() || config.job_file.is_some();
    match (variant.takes_job_description(), has_job) {
        (true, false) => {
            return Err(Error::invalid_argument(format!(
                "{} requires a job description (--job or --job-file)",
                variant.id()
            )))
        }
        (false, true) => {
            return Err(Error::invalid_argument(format!(
                "{} does not take a job description",
                variant.id()
            )))
        }
        _ => {}
    }

    let source = InputSource::from_args(config.file, config.text_args)?;
    let primary = read_input(&source, stdin, input_name(variant))?;
    let job = read_job_description(config.job, config.job_file)?;
    let request = Request::new(variant, primary, job)?;
    Ok(OfficeCommand::Run { request })
}
