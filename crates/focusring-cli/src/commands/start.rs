use clap::{Args, ValueEnum};
use focusring_core::{FileBackend, Mode, SettingsStore, TickDriver, TimerEngine};
use tracing::debug;

use crate::render::{BellNotifier, TerminalPresenter};

#[derive(Args)]
pub struct StartArgs {
    /// Mode to begin in (defaults to work)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Work,
    ShortBreak,
    LongBreak,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Work => Mode::Work,
            ModeArg::ShortBreak => Mode::ShortBreak,
            ModeArg::LongBreak => Mode::LongBreak,
        }
    }
}

pub fn run(args: StartArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::new(FileBackend::new()?);
    let settings = store.load();
    debug!(?settings, "loaded settings");

    let mut engine = TimerEngine::new(
        settings,
        Box::new(TerminalPresenter::new()),
        Box::new(BellNotifier),
    );
    if let Some(mode) = args.mode {
        engine.switch_mode(mode.into());
    }
    engine.start();

    // Sessions auto-chain until Ctrl+C; dropping the drive future is the
    // synchronous cancellation, pause() just records it.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let driver = TickDriver::default();
        tokio::select! {
            _ = driver.drive(&mut engine) => {}
            _ = tokio::signal::ctrl_c() => {}
        }
    });

    engine.pause();
    let snapshot = engine.snapshot();
    println!();
    println!(
        "stopped in {} at {} with {} completed work session(s)",
        snapshot.mode.label(),
        snapshot.clock(),
        snapshot.completed_work_sessions
    );
    Ok(())
}
