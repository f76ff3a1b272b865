//! keyprompt CLI binary.
//!
//! Subcommands: `serve` (HTTP API), `generate` (one generate round, JSON to stdout),
//! `test-prompt` (run a prompt against the LLM client).

mod log_format;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::ServerSettings;

#[derive(Parser, Debug)]
#[command(name = "keyprompt")]
#[command(about = "keyprompt: turn keywords into LLM prompts, asking clarifying questions first")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Debug logging (same as DEBUG=true)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (HOST:PORT, default 0.0.0.0:8000)
    Serve(ServeArgs),
    /// Run one generate round and print the JSON response
    Generate(GenerateArgs),
    /// Run a prompt against the LLM client and print the JSON response
    TestPrompt(TestPromptArgs),
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Listen host (overrides HOST)
    #[arg(long, value_name = "HOST")]
    host: Option<String>,
    /// Listen port (overrides PORT)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
    /// Prompt catalog directory (overrides PROMPTS_DIR)
    #[arg(long, value_name = "DIR")]
    prompts_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Free-text keywords
    #[arg(short, long, value_name = "TEXT")]
    keywords: String,
    /// Context entry, repeatable: --context tone=friendly --context goal=educate
    #[arg(short, long = "context", value_name = "KEY=VALUE")]
    context: Vec<String>,
    /// Target model label (sent as `model`)
    #[arg(short, long, value_name = "MODEL")]
    model: Option<String>,
    /// Prompt catalog directory
    #[arg(long, value_name = "DIR", env = "PROMPTS_DIR")]
    prompts_dir: Option<PathBuf>,
    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(clap::Args, Debug)]
struct TestPromptArgs {
    /// Prompt text
    #[arg(short, long, value_name = "TEXT")]
    prompt: String,
    /// Model label
    #[arg(short, long, value_name = "MODEL")]
    model: Option<String>,
    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("keyprompt", None) {
        eprintln!("keyprompt: config: {}", e);
    }
    let args = Args::parse();
    let mut settings = ServerSettings::from_env();
    settings.debug |= args.debug;
    logging::init(settings.debug)?;

    match args.cmd {
        Command::Serve(sa) => {
            if let Some(host) = sa.host {
                settings.host = host;
            }
            if let Some(port) = sa.port {
                settings.port = port;
            }
            if sa.prompts_dir.is_some() {
                settings.prompts_dir = sa.prompts_dir;
            }
            if let Err(e) = serve::run_serve(&settings).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Generate(ga) => print_or_exit(generate(ga).await),
        Command::TestPrompt(ta) => print_or_exit(test_prompt(ta).await),
    }
    Ok(())
}

async fn generate(ga: GenerateArgs) -> Result<String, cli::CliError> {
    let ctx = cli::build_context(&ga.context)?;
    let pipeline = cli::pipeline_for(ga.prompts_dir.as_deref());
    let resp = cli::run_generate(&pipeline, &ga.keywords, ga.model, ctx).await?;
    cli::to_json(&resp, ga.pretty)
}

async fn test_prompt(ta: TestPromptArgs) -> Result<String, cli::CliError> {
    let llm = cli::default_llm();
    let resp = cli::run_test_prompt(&llm, &ta.prompt, ta.model.as_deref()).await?;
    cli::to_json(&resp, ta.pretty)
}

fn print_or_exit(out: Result<String, cli::CliError>) {
    match out {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("keyprompt: {}", e);
            std::process::exit(1);
        }
    }
}
