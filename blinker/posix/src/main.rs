//! `blinker-sim`: the blinker engine on a host, with a thread as the timer
//! interrupt, a scripted switch sequence and the display on the log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use blinker_core::{EngineConfig, IntervalMs, TickPeriod};
use blinker_engine::{Foreground, RateSelector, RateTable, TimerState, TimingMachine};
use blinker_posix::{logger, parse_script, ConsoleDisplay, HostYield, ScriptedInputs, SimLine, ThreadTicker};
use clap::Parser;
use log::{info, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the blinker timing engine on the host")]
struct Opts {
    /// Tick period in milliseconds
    #[arg(long = "tick-ms", default_value_t = 1)]
    tick_ms: u32,

    /// Interval in force until a switch selects another one
    #[arg(long = "default-ms", default_value_t = 500)]
    default_ms: u32,

    /// Shortest interval a switch may select
    #[arg(long = "min-ms", default_value_t = 1)]
    min_ms: u32,

    /// Comma separated switch masks, looped
    #[arg(long, default_value = "0b0001,0,0b0010,0,0b0100,0,0b1000,0")]
    script: String,

    /// How long each script step is held, in milliseconds
    #[arg(long = "hold-ms", default_value_t = 3000)]
    hold_ms: u64,

    /// Foreground pause per iteration, in microseconds (0 = yield only)
    #[arg(long = "poll-us", default_value_t = 500)]
    poll_us: u64,

    /// Stop after this many seconds (runs until Ctrl-C otherwise)
    #[arg(long = "duration-secs")]
    duration_secs: Option<u64>,

    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    logger::init(opts.log_level).context("installing logger")?;

    let config = EngineConfig::new()
        .with_tick_period(TickPeriod::from_millis(opts.tick_ms)?)
        .with_default_interval(IntervalMs::new(opts.default_ms)?)
        .with_min_interval(IntervalMs::new(opts.min_ms)?);

    let steps = parse_script(&opts.script)?;
    if steps.is_empty() {
        bail!("input script is empty");
    }

    // The tick thread needs 'static access; both live until exit.
    let state: &'static TimerState = Box::leak(Box::new(TimerState::new(&config)));
    let (line, probe) = SimLine::new();
    let machine: &'static TimingMachine<'static, SimLine> =
        Box::leak(Box::new(TimingMachine::new(state, line)));

    let mut ticker = ThreadTicker::new();
    machine
        .attach(&mut ticker, config.tick_period)
        .context("starting tick source")?;

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .context("installing Ctrl-C handler")?;
    }
    let deadline = opts
        .duration_secs
        .map(|secs| Instant::now() + Duration::from_secs(secs));

    let inputs = ScriptedInputs::new(steps, Duration::from_millis(opts.hold_ms));
    let selector = RateSelector::new(RateTable::edubase(), config);
    let mut foreground = Foreground::new(state, selector, inputs, ConsoleDisplay::new())
        .with_yield(HostYield::sleeping(Duration::from_micros(opts.poll_us)));

    let iterations = foreground.run_until(|| {
        stop.load(Ordering::SeqCst) || deadline.is_some_and(|at| Instant::now() >= at)
    });
    ticker.stop();

    info!(
        "stopped: {} iterations, {}, {} toggle events, led {}",
        iterations,
        state.uptime(),
        state.toggle_count(),
        if probe.level() { "on" } else { "off" }
    );
    if probe.toggles() != state.toggle_count() {
        bail!(
            "output line saw {} toggles, state machine fired {}",
            probe.toggles(),
            state.toggle_count()
        );
    }
    Ok(())
}
