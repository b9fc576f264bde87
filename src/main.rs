use {
  anyhow::Context,
  clap::{ArgAction, Parser},
  crossterm::style::Stylize,
  hn_sources::{Client, Config, WebSource},
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal},
    process,
    time::Duration,
  },
  tracing_subscriber::EnvFilter,
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Search Hacker News and print each matching story's comment thread.
#[derive(Debug, Parser)]
#[command(name = "hn-sources", version)]
struct Arguments {
  /// Item requests allowed in flight at once
  #[arg(long, value_name = "N")]
  concurrency: Option<usize>,
  /// Print a JSON array instead of plain text
  #[arg(long)]
  json: bool,
  /// Maximum number of stories to fetch
  #[arg(short, long, default_value_t = Client::DEFAULT_LIMIT)]
  limit: usize,
  /// Text to search for
  #[arg(value_name = "QUERY")]
  query: String,
  /// Only log errors
  #[arg(short, long, conflicts_with = "verbose")]
  quiet: bool,
  /// Per-request timeout in seconds
  #[arg(long, value_name = "SECS")]
  timeout: Option<u64>,
  /// Increase logging verbosity (-v, -vv)
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,
}

impl Arguments {
  fn config(&self) -> Result<Config> {
    let mut config =
      Config::from_env().context("could not read configuration")?;

    if let Some(concurrency) = self.concurrency {
      config.concurrency = concurrency;
    }

    if let Some(secs) = self.timeout {
      config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
  }

  fn filter(&self) -> EnvFilter {
    if self.quiet {
      return EnvFilter::new("error");
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(match self.verbose {
        0 => "hn_sources=warn",
        1 => "hn_sources=info,warn",
        2 => "hn_sources=debug,info",
        _ => "trace",
      })
    })
  }
}

fn print_sources(sources: &[WebSource], json: bool) -> Result {
  if json {
    println!("{}", serde_json::to_string_pretty(sources)?);
    return Ok(());
  }

  for source in sources {
    print!("{source}");
  }

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  tracing_subscriber::fmt()
    .with_env_filter(arguments.filter())
    .with_target(false)
    .with_writer(io::stderr)
    .init();

  let client = Client::new(arguments.config()?)?;

  let sources = client
    .fetch_sources(&arguments.query, arguments.limit)
    .await
    .with_context(|| format!("failed to fetch sources for `{}`", arguments.query))?;

  print_sources(&sources, arguments.json)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
