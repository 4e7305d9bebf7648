// src/bin/twirl.rs
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::{self, Command};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use twirl::charsets::CHAR_SETS;
use twirl::config::SpinnerConfig;
use twirl::Spinner;

#[derive(Parser)]
#[command(name = "twirl", version, about = "Show a spinner while something runs")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    spin: SpinArgs,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every character set with its index
    List,
}

#[derive(Args)]
struct SpinArgs {
    /// Read settings from a TOML file (default: ./twirl.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Character set index (see `twirl list`)
    #[arg(long)]
    charset: Option<usize>,
    /// Milliseconds between frames
    #[arg(long)]
    delay: Option<u64>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    prefix: Option<String>,
    #[arg(long)]
    suffix: Option<String>,
    /// Printed once the spinner stops
    #[arg(long, value_name = "TEXT")]
    final_msg: Option<String>,
    /// Seconds to spin when no command is given
    #[arg(long, default_value = "3")]
    duration: u64,
    /// Play the character set backwards
    #[arg(long)]
    reverse: bool,
    #[arg(long)]
    hide_cursor: bool,
    /// Command to run while spinning
    #[arg(last = true, value_name = "COMMAND")]
    exec: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "twirl=debug" } else { "twirl=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Commands::List) => {
            list_char_sets();
            Ok(0)
        }
        None => spin(cli.spin),
    }
}

fn list_char_sets() {
    for (i, set) in CHAR_SETS.iter().enumerate() {
        println!("{} {}", format!("{i:>2}").dimmed(), set.join(" "));
    }
}

fn load_config(args: &SpinArgs) -> Result<SpinnerConfig> {
    let mut config = match &args.config {
        Some(path) => SpinnerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SpinnerConfig::load_local(&std::env::current_dir()?)?,
    };

    if let Some(charset) = args.charset {
        config.charset = charset;
        config.frames = None;
    }
    if let Some(delay) = args.delay {
        config.delay_ms = delay;
    }
    if let Some(color) = &args.color {
        config.color = Some(color.clone());
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        config.suffix = suffix.clone();
    }
    if let Some(msg) = &args.final_msg {
        config.final_message = Some(msg.clone());
    }
    config.hide_cursor |= args.hide_cursor;
    Ok(config)
}

fn spin(args: SpinArgs) -> Result<i32> {
    let config = load_config(&args)?;
    let final_message = config.final_message.clone();
    let spinner = config.into_spinner(io::stdout())?;
    if args.reverse {
        spinner.reverse();
    }

    // Frames on a pipe or file are noise; only animate on a terminal.
    let interactive = io::stdout().is_terminal();
    if interactive {
        spinner.start()?;
    } else {
        debug!("stdout is not a terminal; spinner not started");
    }

    let outcome = if args.exec.is_empty() {
        thread::sleep(Duration::from_secs(args.duration));
        Ok((0, Vec::new(), Vec::new()))
    } else {
        run_command(&args.exec)
    };

    spinner.stop();
    if !interactive {
        if let Some(msg) = final_message {
            print!("{msg}");
        }
    }

    let (code, stdout, stderr) = outcome?;
    let mut out = io::stdout().lock();
    out.write_all(&stdout)?;
    out.flush()?;
    io::stderr().write_all(&stderr)?;
    Ok(code)
}

fn run_command(exec: &[String]) -> Result<(i32, Vec<u8>, Vec<u8>)> {
    let (prog, rest) = exec.split_first().context("empty command")?;
    debug!(command = %exec.join(" "), "running");
    let output = Command::new(prog)
        .args(rest)
        .output()
        .with_context(|| format!("Failed to spawn {prog}"))?;
    Ok((output.status.code().unwrap_or(1), output.stdout, output.stderr))
}
