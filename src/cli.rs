//! Command definitions and handlers

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use lm_cheats::{BuiltinCheatDir, BuiltinCheats, CheatFile};
use lm_core::settings::overrides::builtin_overrides;
use lm_core::{
    DirectoryHost, ProgramId, SectionName, Setting, SettingValue, Settings, SettingsHost, ToolConfig,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lemonade", version, about = "Settings and cheat tooling for the 3DS core")]
pub struct Cli {
    /// Tool configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// User directory holding config/, GameSettings/ and cheats/
    #[arg(long, global = true)]
    pub user_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect or edit settings
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// Inspect or edit a title's cheat list
    #[command(subcommand)]
    Cheats(CheatsCommand),

    /// Show the built-in compatibility hacks for a title
    Overrides { program_id: ProgramId },
}

#[derive(Args, Debug)]
pub struct GameArg {
    /// Work on the per-game layer of this title
    #[arg(long = "game")]
    pub game_id: Option<ProgramId>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the merged settings
    Show {
        #[command(flatten)]
        game: GameArg,
        /// Include built-in compatibility hacks
        #[arg(long)]
        builtin: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print one value
    Get {
        section: SectionName,
        key: String,
        #[command(flatten)]
        game: GameArg,
    },
    /// Set one value and save
    Set {
        section: SectionName,
        key: String,
        value: String,
        #[command(flatten)]
        game: GameArg,
    },
}

#[derive(Subcommand, Debug)]
pub enum CheatsCommand {
    /// List cheats with their state
    List {
        program_id: ProgramId,
        #[arg(long)]
        json: bool,
    },
    /// Switch one cheat on or off
    Toggle { program_id: ProgramId, index: usize },
    /// Rewrite the cheat file in canonical form
    Normalize { program_id: ProgramId },
}

#[derive(Serialize)]
struct CheatSummary<'a> {
    index: usize,
    name: &'a str,
    enabled: bool,
    codes: usize,
}

pub fn run(command: Command, config: &ToolConfig) -> Result<()> {
    let host = DirectoryHost::new(config.user_directory());

    match command {
        Command::Settings(command) => run_settings(command, &host),
        Command::Cheats(command) => run_cheats(command, &host, config),
        Command::Overrides { program_id } => {
            for setting in builtin_overrides(program_id) {
                println!("[{}] {} = {}", setting.section, setting.key, setting.value);
            }
            Ok(())
        }
    }
}

fn load(game: &GameArg, host: &dyn SettingsHost) -> Settings {
    let mut settings = Settings::new();
    settings.load_settings_for(game.game_id, host);
    settings
}

fn run_settings(command: SettingsCommand, host: &dyn SettingsHost) -> Result<()> {
    match command {
        SettingsCommand::Show { game, builtin, json } => {
            let mut settings = load(&game, host);
            if builtin {
                settings.apply_builtin_overrides();
            }

            if json {
                let mut root = serde_json::Map::new();
                for section in settings.sections() {
                    let values = section
                        .iter()
                        .map(|s| Ok((s.key.clone(), serde_json::to_value(&s.value)?)))
                        .collect::<serde_json::Result<serde_json::Map<_, _>>>()?;
                    root.insert(section.name().to_string(), values.into());
                }
                println!("{}", serde_json::to_string_pretty(&root)?);
            } else {
                print!("{}", lm_core::settings::ini::write(settings.sections())?);
            }
            Ok(())
        }
        SettingsCommand::Get { section, key, game } => {
            let settings = load(&game, host);
            match settings.get(&section, &key) {
                Some(value) => println!("{}", value),
                None => bail!("No setting {} in [{}]", key, section),
            }
            Ok(())
        }
        SettingsCommand::Set {
            section,
            key,
            value,
            game,
        } => {
            let mut settings = load(&game, host);
            settings.put_setting(Setting::new(section, key, SettingValue::parse(&value)))?;
            let report = settings
                .save_settings(host)
                .context("Failed to save settings")?;
            for file in report.files {
                tracing::debug!("Wrote {:?}", file);
            }
            Ok(())
        }
    }
}

fn run_cheats(command: CheatsCommand, host: &dyn SettingsHost, config: &ToolConfig) -> Result<()> {
    let builtin: Box<dyn BuiltinCheats> = match &config.builtin_cheats_dir {
        Some(dir) => Box::new(BuiltinCheatDir::new(dir)),
        None => Box::new(()),
    };
    let directory = host.directory();

    match command {
        CheatsCommand::List { program_id, json } => {
            let file = CheatFile::load(directory, program_id, builtin.as_ref())?;
            let summaries: Vec<_> = file
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| CheatSummary {
                    index,
                    name: entry.name(),
                    enabled: entry.enabled,
                    codes: entry.codes.len(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for summary in summaries {
                    println!(
                        "{:>3} [{}] {} ({} codes)",
                        summary.index,
                        if summary.enabled { "x" } else { " " },
                        summary.name,
                        summary.codes
                    );
                }
            }
            Ok(())
        }
        CheatsCommand::Toggle { program_id, index } => {
            let mut file = CheatFile::load(directory, program_id, builtin.as_ref())?;
            let Some(entry) = file.entries_mut().get_mut(index) else {
                bail!("No cheat #{} for {}", index, program_id);
            };
            if !entry.is_toggleable() {
                bail!("{} has no codes and cannot be enabled", entry.name());
            }
            let enabled = entry.toggle();
            let name = entry.name().to_string();
            file.save().context("Failed to save cheats")?;
            host.notify(&format!("{} {}", name, if enabled { "enabled" } else { "disabled" }));
            Ok(())
        }
        CheatsCommand::Normalize { program_id } => {
            let file = CheatFile::load(directory, program_id, builtin.as_ref())?;
            file.save().context("Failed to save cheats")?;
            host.notify(&format!("Rewrote {} cheats to {:?}", file.entries().len(), file.path()));
            Ok(())
        }
    }
}
