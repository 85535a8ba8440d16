/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-speed.
 *
 * gear-speed is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-speed is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-speed. If not, see <https://www.gnu.org/licenses/>.
 */

mod cli;
mod error;
mod ui;

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use clap::Parser;
use gearing::EngineSettings;
use tracing::{error, info, Level};

use crate::cli::{Cli, Commands, ConfigAction};
use crate::error::CliError;
use crate::ui::Session;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "gear_speed.log");
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn load_settings(config: Option<&Path>) -> Result<EngineSettings, CliError> {
    Ok(match config {
        Some(path) => EngineSettings::load_from(path)?,
        None => EngineSettings::load()?
    })
}

fn new_session(settings: &EngineSettings) -> Result<Session, CliError> {
    Ok(Session::new(settings.generate_combinations()?, settings.page_size()))
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Table(args) => {
            let mut session = new_session(&load_settings(config)?)?;
            session.set_filter(args.filter);
            session.set_sort_key(args.sort);
            ui::table::run_table(out, session, args.page, args.all, args.json)
        }
        Commands::Browse => {
            let session = new_session(&load_settings(config)?)?;
            let stdin = io::stdin();
            ui::table::browse(stdin.lock(), out, session)
        }
        Commands::Calc { input, driving, driven } => {
            ui::calculator::render_calculation(out,
                                               input.as_deref().unwrap_or(""),
                                               driving.as_deref().unwrap_or(""),
                                               driven.as_deref().unwrap_or(""))
        }
        Commands::Find { target } => {
            let settings = load_settings(config)?;
            let data = settings.generate_combinations()?;
            ui::finder::render_matches(out, &data, target.as_deref(), settings.match_tolerance())
        }
        Commands::Config { action: ConfigAction::Show } => ui::settings::show(out, &load_settings(config)?),
        Commands::Config { action: ConfigAction::Init } => {
            let path = config.map(Path::to_path_buf).unwrap_or_else(ui::settings::default_config_path);
            ui::settings::init(out, &path)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
