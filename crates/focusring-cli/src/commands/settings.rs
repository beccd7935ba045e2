use clap::Subcommand;
use focusring_core::{FileBackend, SettingsStore, SettingsUpdate};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print effective settings as JSON
    Show,
    /// Update one or more fields; values are clamped into range
    Set {
        /// Work session length in minutes (1-180)
        #[arg(long)]
        work: Option<f64>,
        /// Short break length in minutes (1-60)
        #[arg(long)]
        short_break: Option<f64>,
        /// Long break length in minutes (1-60)
        #[arg(long)]
        long_break: Option<f64>,
        /// Work sessions between long breaks (1-8)
        #[arg(long)]
        rounds: Option<f64>,
    },
    /// Delete the persisted record and restore defaults
    Reset,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::new(FileBackend::new()?);
    match action {
        SettingsAction::Show => {
            let settings = store.load();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Set {
            work,
            short_break,
            long_break,
            rounds,
        } => {
            let update = SettingsUpdate {
                work_minutes: work,
                short_break_minutes: short_break,
                long_break_minutes: long_break,
                rounds_per_long_break: rounds,
            };
            let saved = store.save(store.load(), &update)?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        SettingsAction::Reset => {
            let restored = store.reset()?;
            println!("{}", serde_json::to_string_pretty(&restored)?);
        }
    }
    Ok(())
}
