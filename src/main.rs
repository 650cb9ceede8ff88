//! Terminal front-end for the guessing game.
//!
//! Reads one command per line from stdin and writes responses to stdout,
//! either as colored text or, with `--json`, one JSON object per line.
//! Logs go to stderr.
//!
//! Run with: cargo run -- --level easy --attempts 3

use clap::Parser;
use crossterm::style::Stylize;
use magic_number::config::{OutputFormat, SessionConfig};
use magic_number::game::Tone;
use magic_number::level::Level;
use magic_number::session::{Response, Session, SessionError, HELP};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "magic-number", version, about = "Guess the magic number")]
struct Cli {
    /// Level to select on startup: easy, medium, hard, very-hard
    #[arg(short, long)]
    level: Option<Level>,

    /// Attempts for the first round (needs --level)
    #[arg(short, long)]
    attempts: Option<u32>,

    /// Seed for reproducible targets
    #[arg(long)]
    seed: Option<u64>,

    /// Write responses as JSON lines
    #[arg(long)]
    json: bool,

    /// Log filter such as "debug" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            level: self.level,
            attempts: self.attempts,
            seed: self.seed,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

struct Renderer<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> Renderer<W> {
    fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    fn banner(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{}", "GUESS THE MAGIC NUMBER".bold().yellow())?;
            writeln!(self.out, "{HELP}")?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Text {
            write!(self.out, "> ")?;
        }
        self.out.flush()
    }

    fn response(&mut self, response: &Response) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, response)?;
                writeln!(self.out)
            }
            OutputFormat::Text => {
                let message = response.message();
                match response {
                    Response::Help => writeln!(self.out, "{message}")?,
                    _ => writeln!(self.out, "{}", paint(message, response.tone()))?,
                }
                if let Some(counter) = response.counter() {
                    writeln!(self.out, "{}", counter.cyan())?;
                }
                if response.ends_round() {
                    writeln!(
                        self.out,
                        "Type 'start <n>' to play again or 'restart' to pick another level."
                    )?;
                }
                Ok(())
            }
        }
    }

    fn error(&mut self, err: &SessionError) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({ "kind": "error", "message": err.to_string() });
                serde_json::to_writer(&mut self.out, &value)?;
                writeln!(self.out)
            }
            OutputFormat::Text => writeln!(self.out, "{}", err.to_string().yellow()),
        }
    }
}

fn paint(message: String, tone: Tone) -> String {
    match tone {
        Tone::Warning => message.yellow().to_string(),
        Tone::Success => message.green().to_string(),
        Tone::Failure => message.red().to_string(),
    }
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let config = cli.into_config();
    let mut session = Session::from_config(&config);
    let mut renderer = Renderer::new(config.output, io::stdout().lock());

    match session.apply_config(&config) {
        Ok(responses) if responses.is_empty() => renderer.banner()?,
        Ok(responses) => {
            for response in &responses {
                renderer.response(response)?;
            }
        }
        Err(err) => {
            tracing::error!(%err, "invalid startup configuration");
            renderer.error(&err)?;
            return Ok(ExitCode::from(2));
        }
    }

    renderer.prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            renderer.prompt()?;
            continue;
        }

        match session.handle_line(&line) {
            Ok(Response::Quit) => {
                renderer.response(&Response::Quit)?;
                return Ok(ExitCode::SUCCESS);
            }
            Ok(response) => renderer.response(&response)?,
            Err(err) => renderer.error(&err)?,
        }
        renderer.prompt()?;
    }

    Ok(ExitCode::SUCCESS)
}
