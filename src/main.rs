//! Command-line client: runs one statement and prints the rows as JSON.

use clap::Parser;
use cypherlink::{ClientConfig, ClientError, Statement};
use serde_json::Value;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Connection URL (http://host[:port] or bolt://host:port), overrides NEO4J_URL
    #[arg(short, long)]
    url: Option<String>,

    /// Username, overrides NEO4J_USER
    #[arg(long)]
    user: Option<String>,

    /// Password, overrides NEO4J_PASSWORD
    #[arg(long)]
    password: Option<String>,

    /// Statement parameter as name=<json>; bare strings are accepted
    #[arg(short, long = "param", value_parser = parse_param)]
    params: Vec<(String, Value)>,

    /// Cypher statement
    statement: String,
}

fn parse_param(s: &str) -> Result<(String, Value), String> {
    let (name, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}

fn resolve_config(args: &Args) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &args.url {
        config.url = url.clone();
    }
    if let Some(user) = &args.user {
        config = config.with_user(user.clone());
    }
    if let Some(password) = &args.password {
        config = config.with_password(password.clone());
    }
    config
}

async fn execute(args: Args) -> Result<String, ClientError> {
    let config = resolve_config(&args);
    let transport = config.connect()?;

    let statement = args
        .params
        .into_iter()
        .fold(Statement::new(args.statement), |stmt, (name, value)| {
            stmt.with_parameter(name, value)
        });

    log::info!("Running statement against {}", transport.params());
    let results = transport.run(&statement).await?;
    log::info!("{} rows returned", results.len());

    serde_json::to_string_pretty(&results)
        .map_err(|e| ClientError::Transport(e.into()))
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match execute(args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error [{}]: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}
