mod keys;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};

use phasetone_core::{ToneEngine, DEFAULT_FREQ_HZ, DEFAULT_SAMPLE_RATE_HZ};

use keys::{handle_key, push_all, status_line, Controls, KeyOutcome};

/// Two-channel sine generator for acoustic interference experiments.
#[derive(Debug, Parser)]
#[command(name = "phasetone", version, about)]
struct Cli {
    /// Left channel frequency in Hz
    #[arg(long, default_value_t = DEFAULT_FREQ_HZ)]
    left: f64,

    /// Right channel frequency in Hz
    #[arg(long, default_value_t = DEFAULT_FREQ_HZ)]
    right: f64,

    /// Right channel phase offset in degrees
    #[arg(long, default_value_t = 0.0)]
    phase: f64,

    /// Start with the left channel muted
    #[arg(long)]
    mute_left: bool,

    /// Start with the right channel muted
    #[arg(long)]
    mute_right: bool,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: u32,
}

fn main() -> Result<()> {
    // Logs share the terminal with the status line, so default to warnings;
    // RUST_LOG opens it up.
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let mut controls = Controls {
        freq_left_hz: keys::clamp_freq(cli.left),
        freq_right_hz: keys::clamp_freq(cli.right),
        phase_offset_deg: keys::wrap_phase_deg(cli.phase),
        mute_left: cli.mute_left,
        mute_right: cli.mute_right,
    };

    let mut engine = ToneEngine::new(cli.sample_rate);
    push_all(&controls, &engine);
    engine.start().context("failed to open audio output")?;

    println!(
        "space play/stop | z/x left ,/. right: 1 Hz steps (shifted: 10) | \
         arrows: phase 5 deg (shift: 45) | l/r mute | 0 zero phase | q quit"
    );

    enable_raw_mode().context("failed to enter raw mode")?;
    let run_result = run_loop(&mut controls, &mut engine);
    disable_raw_mode().ok();
    engine.stop();
    println!();
    run_result
}

fn run_loop(controls: &mut Controls, engine: &mut ToneEngine) -> Result<()> {
    // Redraw only when something changed; a poll timeout leaves the line alone.
    draw_status(controls, engine.is_running(), "")?;
    loop {
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match handle_key(&key, controls, engine) {
            KeyOutcome::Idle => {}
            KeyOutcome::Changed(note) => draw_status(controls, engine.is_running(), &note)?,
            KeyOutcome::Quit => return Ok(()),
        }
    }
}

fn draw_status(controls: &Controls, running: bool, note: &str) -> Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(status_line(controls, running)),
        Print(note),
    )?;
    stdout.flush()?;
    Ok(())
}
