use std::env;
use std::error::Error;
use std::path::PathBuf;

use tracing::{debug, info};

use opt::Option;

use crate::config::DemoConfig;
use crate::logging::DemoTracingBuilder;

mod config;
mod logging;

fn main() -> Result<(), Box<dyn Error>> {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.
  let log_file_path: Option<PathBuf> = env::var_os("OPT_LOG_FILE").map(PathBuf::from).into();
  let _tracing = DemoTracingBuilder::default()
    .with_console_directives_opt(env::var("OPT_LOG").ok().into())
    .with_file_directives_opt(env::var("OPT_FILE_LOG").ok().into())
    .with_log_file_path_opt(log_file_path)
    .build();

  let config = DemoConfig::from_env()?;
  info!(?config, "running demo pipeline");
  for input in env::args().skip(1) {
    println!("{} -> {}", input, run_pipeline(&input, &config));
  }
  Ok(())
}

/// Parse `input`, keep it if it exceeds the threshold, scale it, and fall back when any step produced `None`.
fn run_pipeline(input: &str, config: &DemoConfig) -> i64 {
  let parsed: Option<i64> = input.trim().parse::<i64>().ok().into();
  debug!(input, ?parsed, "parsed input");
  let kept = parsed.filter(|x| *x > config.threshold);
  debug!(?kept, threshold = config.threshold, "filtered");
  let scaled: Option<i64> = kept.and_then(|x| x.checked_mul(config.factor).into());
  debug!(?scaled, factor = config.factor, "scaled");
  scaled.unwrap_or(config.fallback)
}
