use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use gatormath::{evaluator::dispatch::function_names, interpret, interpret_json};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Log filter used when RUST_LOG is unset (e.g. "debug")
  #[arg(long, global = true, default_value = "warn")]
  log_level: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an expression, e.g. "round_to_digits(2.5, method = half_up)"
  Calculate {
    /// The expression to evaluate
    expression: String,
    /// Print the result or error as a JSON object
    #[arg(long)]
    json: bool,
  },
  /// Show package information and the available functions
  Info,
  /// Show the version
  Version,
}

fn init_logging(default_level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(&cli.log_level);

  match cli.command {
    Commands::Calculate { expression, json } => {
      tracing::info!(%expression, "calculate");
      if json {
        let value = interpret_json(&expression);
        println!("{value}");
        if value.get("error").is_some() {
          std::process::exit(1);
        }
        return Ok(());
      }
      match interpret(&expression) {
        Ok(result) => println!("{result}"),
        Err(e) => bail!(e),
      }
    }
    Commands::Info => {
      println!("gatormath {}", gatormath::VERSION);
      println!("{}", gatormath::DESCRIPTION);
      println!();
      println!("Functions:");
      for name in function_names() {
        println!("  {name}");
      }
    }
    Commands::Version => {
      println!("gatormath version {}", gatormath::VERSION);
    }
  }
  Ok(())
}
