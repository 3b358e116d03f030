//! Terminal front end for the change maker.
//!
//! Draws the change one coin at a time, or prints it as JSON. With
//! `--interactive` it reads commands from stdin:
//! - empty line: make change for the current input
//! - `r`: reset the input and re-enable every denomination
//! - `+dime` / `-dime`: enable or disable a denomination
//! - `mode greedy` / `mode random`: switch decomposer
//! - `q`: quit
//! - anything else: becomes the new input and is submitted

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use serde_json::json;
use tracing::warn;

use make_change::config::{DEFAULT_ANIMATION_DELAY_MS, DEFAULT_INPUT};
use make_change::logger::init_cli_logger;
use make_change::models::{ChangeResult, DecomposeMode, Denomination, EnablementSet};
use make_change::render::{glyph, label, AnimationPlan};
use make_change::ChangeEngine;

#[derive(Parser, Debug)]
#[command(name = "make-change", version, about = "Make change in dollars and coins")]
struct Cli {
    /// Amount to make change for, e.g. 1.41 or $12.30
    #[arg(default_value = DEFAULT_INPUT)]
    amount: String,

    /// Decomposer to use: greedy or random
    #[arg(short, long, default_value_t = DecomposeMode::Greedy)]
    mode: DecomposeMode,

    /// Denomination not to hand out (repeatable)
    #[arg(short = 'x', long = "disable", value_name = "DENOMINATION")]
    disabled: Vec<Denomination>,

    /// Seed for the random decomposer
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print every coin at once
    #[arg(long)]
    no_animate: bool,

    /// Time budget for drawing one denomination's coins
    #[arg(long, default_value_t = DEFAULT_ANIMATION_DELAY_MS)]
    delay_ms: u64,

    /// Read commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Presentation state: owned here, handed to the engine per call.
struct Session {
    engine: ChangeEngine,
    input: String,
    mode: DecomposeMode,
    enabled: EnablementSet,
    json: bool,
    delay_ms: Option<u64>,
}

impl Session {
    fn submit(&mut self) -> anyhow::Result<()> {
        match self.engine.decompose(&self.input, self.mode, &self.enabled) {
            Ok(change) => self.show(&change),
            Err(e) => {
                warn!(input = %self.input, error = %e, "could not make change");
                eprintln!("error: {e}");
                Ok(())
            }
        }
    }

    fn reset(&mut self) {
        self.input = DEFAULT_INPUT.to_string();
        self.enabled.reset();
    }

    fn show(&self, change: &ChangeResult) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            let payload = json!({
                "amount": change.total().to_string(),
                "mode": self.mode,
                "enabled": self.enabled,
                "change": change,
                "coins": change.coin_count(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            return Ok(());
        }

        let plan = AnimationPlan::new(change, self.delay_ms.unwrap_or(0));
        let start = Instant::now();
        for (denomination, count) in change.iter().filter(|&(_, n)| n > 0) {
            write!(out, "{:<9}", denomination.plural())?;
            for frame in plan.row(denomination) {
                if self.delay_ms.is_some() {
                    let due = Duration::from_millis(frame.at_ms);
                    if let Some(wait) = due.checked_sub(start.elapsed()) {
                        out.flush()?;
                        thread::sleep(wait);
                    }
                }
                write!(out, "{}", glyph(denomination))?;
            }
            writeln!(out, " {}", label(count).unwrap_or_default())?;
        }
        writeln!(out, "{} coins for ${}", change.coin_count(), change.total())?;
        Ok(())
    }

    /// Handle one interactive line. Returns false when the user quits.
    fn command(&mut self, line: &str) -> anyhow::Result<bool> {
        let line = line.trim();
        match line {
            "q" | "quit" => return Ok(false),
            "" => self.submit()?,
            "r" => {
                self.reset();
                println!("input reset to {}", self.input);
            }
            _ if line.starts_with("mode ") => match line["mode ".len()..].parse() {
                Ok(mode) => {
                    self.mode = mode;
                    println!("mode: {mode}");
                }
                Err(e) => eprintln!("error: {e}"),
            },
            _ if line.starts_with('+') || line.starts_with('-') => {
                let enable = line.starts_with('+');
                match line[1..].parse::<Denomination>() {
                    Ok(denomination) => {
                        self.enabled.set(denomination, enable);
                        let names: Vec<&str> = self.enabled.enabled().map(|d| d.plural()).collect();
                        println!("enabled: {}", names.join(", "));
                    }
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            amount => {
                self.input = amount.to_string();
                self.submit()?;
            }
        }
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let engine = match cli.seed {
        Some(seed) => ChangeEngine::seeded(seed),
        None => ChangeEngine::new(),
    };
    let mut session = Session {
        engine,
        input: cli.amount,
        mode: cli.mode,
        enabled: EnablementSet::without(&cli.disabled),
        json: cli.json,
        delay_ms: (!cli.no_animate).then_some(cli.delay_ms),
    };

    if !cli.interactive {
        let change = session
            .engine
            .decompose(&session.input, session.mode, &session.enabled)?;
        return session.show(&change);
    }

    println!("make-change {}: Enter submits, r resets, +/-name toggles, q quits", make_change::version());
    println!("input: {}", session.input);
    for line in io::stdin().lock().lines() {
        if !session.command(&line?)? {
            break;
        }
    }
    Ok(())
}
