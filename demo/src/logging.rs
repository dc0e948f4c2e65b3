use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use opt::Option;

pub const CONSOLE_DEFAULT_DIRECTIVES: &str = "info";
pub const FILE_DEFAULT_DIRECTIVES: &str = "debug";

#[derive(Default)]
pub struct DemoTracingBuilder {
  console_directives: Option<String>,
  file_directives: Option<String>,
  log_file_path: Option<PathBuf>,
}
impl DemoTracingBuilder {
  pub fn with_console_directives_opt(mut self, console_directives: Option<String>) -> Self {
    self.console_directives = console_directives;
    self
  }
  pub fn with_file_directives_opt(mut self, file_directives: Option<String>) -> Self {
    self.file_directives = file_directives;
    self
  }
  pub fn with_log_file_path_opt(mut self, log_file_path: Option<PathBuf>) -> Self {
    self.log_file_path = log_file_path;
    self
  }

  pub fn build(self) -> DemoTracing {
    let console_filter = filter_from_directives(self.console_directives, CONSOLE_DEFAULT_DIRECTIVES);
    let file = self.log_file_path
      .map(|path| (path, filter_from_directives(self.file_directives, FILE_DEFAULT_DIRECTIVES)));
    DemoTracing::install(console_filter, file)
  }
}

/// Parse `directives` into a filter; absent, blank, or malformed directives use `default_directives`.
pub fn filter_from_directives(directives: Option<String>, default_directives: &str) -> EnvFilter {
  directives
    .filter(|d| !d.trim().is_empty())
    .and_then(|d| Option::<EnvFilter>::from(EnvFilter::try_new(d).ok()))
    .unwrap_or_else(|| EnvFilter::new(default_directives))
}

/// Keeps the non-blocking file writer alive; dropping this flushes and stops file logging.
pub struct DemoTracing {
  _guard: Option<WorkerGuard>,
}
impl DemoTracing {
  fn install(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Self {
    let console = tracing_subscriber::fmt::layer()
      .with_writer(io::stderr)
      .with_filter(console_filter);
    let registry = tracing_subscriber::registry().with(console);

    let Option::Some((log_file_path, file_filter)) = file else {
      registry.init();
      return Self { _guard: Option::None };
    };
    let log_file = match create_log_file(&log_file_path) {
      Ok(log_file) => log_file,
      Err(cause) => {
        registry.init();
        tracing::warn!(%cause, path = %log_file_path.display(), "demo log file unavailable; logging to stderr only");
        return Self { _guard: Option::None };
      }
    };
    let (writer, guard) = tracing_appender::non_blocking(BufWriter::new(log_file));
    let file_layer = tracing_subscriber::fmt::layer()
      .with_writer(writer)
      .with_ansi(false)
      .with_filter(file_filter);
    registry.with(file_layer).init();
    Self { _guard: Option::Some(guard) }
  }
}

fn create_log_file(log_file_path: &Path) -> Result<File, io::Error> {
  if let Some(parent) = log_file_path.parent() {
    create_dir_all(parent)?;
  }
  File::create(log_file_path)
}
