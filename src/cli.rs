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

use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use gearing::{InputSpeedFilter, SortKey};

/// Gear pair speed tables, a single-pair calculator and target speed lookup
#[derive(Debug, Parser)]
#[command(name = "gear-speed", version, about)]
pub struct Cli {
    /// Settings file to use instead of ./gear-speed-conf.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to gear_speed.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print one page of the combination table
    Table(TableArgs),

    /// Page through the combination table interactively
    Browse,

    /// Work out ratio, output speed and speed/torque factors for one gear pair
    Calc {
        /// Input speed in RPM (blank or non-numeric uses 200)
        #[arg(long)]
        input: Option<String>,

        /// Driving gear teeth (blank or non-numeric uses 24)
        #[arg(long)]
        driving: Option<String>,

        /// Driven gear teeth (blank or non-numeric uses 48)
        #[arg(long)]
        driven: Option<String>
    },

    /// List every combination that produces the target output speed
    Find {
        /// Target output speed in RPM
        target: Option<String>
    },

    /// Show or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction
    }
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Only show this input speed, or `all`
    #[arg(long, default_value = "all")]
    pub filter: InputSpeedFilter,

    /// output (fastest first), ratio (highest first) or input (lowest first)
    #[arg(long, default_value = "output")]
    pub sort: SortKey,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Print every matching row instead of a single page
    #[arg(long)]
    pub all: bool,

    /// Emit JSON instead of a text table
    #[arg(long)]
    pub json: bool
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as TOML
    Show,
    /// Write the default settings to the settings file
    Init
}
