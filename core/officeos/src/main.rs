mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;

use common::adapter::StdEnvSource;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use adapter::load_app_config;
use cli::{config_to_command, parse_args, print_completion, write_agent_list, write_result, Config, ParseOutcome};
use domain::{OfficeCommand, Request};
use usecase::PipelineError;
use wiring::{wire_officeos, App};

/// 1 回分の実行結果（表示済みかどうかを main に伝える）
enum Outcome {
    Done,
    Failed(PipelineError),
}

/// Run コマンドを実行する Runner（設定が揃ってから組み立てる）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record);
    }

    fn run(&self, request: &Request) -> Result<Outcome, Error> {
        let variant = request.variant();
        self.log(
            LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started")
                .field("variant", variant.id()),
        );

        let outcome = match self.app.agent.run(request) {
            Ok(result) => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                if let Some(warning) = write_result(&mut out, variant, &result)? {
                    eprintln!("{}", warning);
                }
                Outcome::Done
            }
            Err(e) => {
                self.log(
                    LogRecord::new(LogLevel::Error, "cli", "error", e.to_string())
                        .field("variant", variant.id()),
                );
                Outcome::Failed(e)
            }
        };

        let code = match &outcome {
            Outcome::Done => 0,
            Outcome::Failed(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command finished")
                .field("variant", variant.id())
                .field("exit_code", code),
        );
        Ok(outcome)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("officeos: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config: Config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let verbose = config.verbose;

    let request = match config_to_command(config, &mut io::stdin().lock())? {
        OfficeCommand::Help => {
            print_help();
            return Ok(0);
        }
        OfficeCommand::ListAgents => {
            write_agent_list(&mut io::stdout().lock())?;
            return Ok(0);
        }
        OfficeCommand::Run { request } => request,
    };

    // 資格情報はリクエストを投げる前に確定させる
    let app_config = load_app_config(&StdEnvSource)?;
    let runner = Runner {
        app: wire_officeos(&app_config, verbose),
    };
    match runner.run(&request)? {
        Outcome::Done => Ok(0),
        Outcome::Failed(e) => {
            eprintln!("{}", e);
            Ok(e.exit_code())
        }
    }
}

fn print_usage() {
    eprintln!("Usage: officeos [options] <agent> [text...]");
}

fn print_help() {
    println!("Usage: officeos [options] <agent> [text...]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -L, --list                 List available agents");
    println!("  -f, --file <path>          Read the input text from a file");
    println!("  --job <text>               Job description (resume only)");
    println!("  --job-file <path>          Read the job description from a file (resume only)");
    println!("  -v, --verbose              Emit structured logs to stderr");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Agents:");
    println!("  research, email, minutes, resume, social, contract, bug-hunt, data-clean");
    println!("  With no text (or -), the input is read from stdin.");
    println!();
    println!("Environment:");
    println!("  GROQ_API_KEY             Chat completion key (required)");
    println!("  SERPER_API_KEY           Web search key (required)");
    println!("  OFFICEOS_MODEL           Model name. Default: llama-3.3-70b-versatile");
    println!("  OFFICEOS_COMPLETION_URL  OpenAI compatible base URL. Default: https://api.groq.com/openai/v1");
    println!("  OFFICEOS_SEARCH_URL      Search endpoint. Default: https://google.serper.dev/search");
    println!("  OFFICEOS_LOG_FILE        Append JSONL logs to this file");
    println!();
    println!("Examples:");
    println!("  officeos research AI chip market 2025");
    println!("  officeos email -f complaint.txt");
    println!("  officeos resume -f cv.txt --job-file job.txt");
    println!("  cat sales.csv | officeos data-clean");
}
