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

use std::io::{BufRead, Write};
use std::str::FromStr;
use gearing::{GearCombination, InputSpeedFilter, SortKey};
use tracing::{debug, info};
use crate::error::CliError;
use crate::ui::format::{input_rpm_label, ratio_label, rpm_label, teeth_label};
use crate::ui::session::Session;

const HEADERS: [&str; 6] = ["Input", "Driving", "Driven", "Ratio", "Output", "Category"];
const COLUMN_WIDTHS: [usize; 6] = [10, 8, 8, 8, 12, 12];

fn write_row<W: Write>(out: &mut W, cells: [&str; 6]) -> std::io::Result<()> {
    let line = cells.iter()
        .zip(COLUMN_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<String>>()
        .join(" ");
    writeln!(out, "{}", line.trim_end())
}

pub fn write_rows<W: Write>(out: &mut W, rows: &[GearCombination]) -> std::io::Result<()> {
    write_row(out, HEADERS)?;
    for combo in rows {
        let input = input_rpm_label(combo.input_speed());
        let driving = teeth_label(combo.driving_teeth());
        let driven = teeth_label(combo.driven_teeth());
        let ratio = ratio_label(combo.ratio());
        let output = rpm_label(combo.output_speed());
        write_row(out, [input.as_str(), driving.as_str(), driven.as_str(), ratio.as_str(), output.as_str(), combo.tier().label()])?;
    }
    Ok(())
}

/// Current page of the session plus the page indicator and which controls are live.
pub fn render_page<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let listing = session.listing();
    write_rows(out, &listing.items)?;
    let prev = if session.has_prev() { "[p]rev" } else { "-" };
    let next = if session.has_next() { "[n]ext" } else { "-" };
    writeln!(out, "{}    {} {}    (filter {}, sort {})",
             session.page_indicator(), prev, next, session.filter(), session.sort_key())
}

pub fn render_json<W: Write>(out: &mut W, rows: &[GearCombination]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

pub fn run_table<W: Write>(out: &mut W,
                           mut session: Session,
                           page: usize,
                           all: bool,
                           json: bool) -> Result<(), CliError> {
    if all {
        let rows = session.all_rows();
        return match json {
            true => render_json(out, &rows),
            false => Ok(write_rows(out, &rows)?)
        };
    }
    let landed = session.go_to(page);
    if landed != page {
        info!("Requested page {} clamped to {}", page, landed);
    }
    match json {
        true => render_json(out, &session.listing().items),
        false => Ok(render_page(out, &session)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Page(usize),
    Filter(InputSpeedFilter),
    Sort(SortKey),
    Help,
    Quit
}

impl FromStr for BrowseCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let command = parts.next().unwrap_or("").to_ascii_lowercase();
        let arg = parts.next();
        match (command.as_str(), arg) {
            ("n", None) | ("next", None) => Ok(BrowseCommand::Next),
            ("p", None) | ("prev", None) => Ok(BrowseCommand::Prev),
            ("q", None) | ("quit", None) => Ok(BrowseCommand::Quit),
            ("h", None) | ("help", None) | ("?", None) => Ok(BrowseCommand::Help),
            ("page", Some(page)) => page.parse::<usize>()
                .map(BrowseCommand::Page)
                .map_err(|_| format!("'{}' is not a page number", page)),
            ("filter", Some(filter)) => filter.parse::<InputSpeedFilter>()
                .map(BrowseCommand::Filter)
                .map_err(|e| e.details().to_string()),
            ("sort", Some(key)) => key.parse::<SortKey>()
                .map(BrowseCommand::Sort)
                .map_err(|e| e.details().to_string()),
            _ => Err(format!("Unknown command '{}'. Type 'help' for commands.", s.trim()))
        }
    }
}

const BROWSE_HELP: &str = "Commands: n/next, p/prev, page <n>, filter <speed|all>, sort <output|ratio|input>, q/quit";

/// Line driven table browser; re-renders after every command until quit or end of input.
pub fn browse<R: BufRead, W: Write>(input: R, out: &mut W, mut session: Session) -> Result<(), CliError> {
    render_page(out, &session)?;
    writeln!(out, "{}", BROWSE_HELP)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!("Browse command {:?} on page {}", command, session.page());
        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                writeln!(out, "{}", BROWSE_HELP)?;
                continue;
            }
            BrowseCommand::Next => {
                session.next_page();
            }
            BrowseCommand::Prev => {
                session.prev_page();
            }
            BrowseCommand::Page(page) => {
                session.go_to(page);
            }
            BrowseCommand::Filter(filter) => session.set_filter(filter),
            BrowseCommand::Sort(sort_key) => session.set_sort_key(sort_key)
        }
        render_page(out, &session)?;
    }
    Ok(())
}
