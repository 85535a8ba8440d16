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

use std::io::Write;
use std::path::{Path, PathBuf};
use gearing::EngineSettings;
use tracing::info;
use crate::error::CliError;

pub fn default_config_path() -> PathBuf {
    PathBuf::from(format!("{}.toml", EngineSettings::CONFIG_FILENAME))
}

pub fn show<W: Write>(out: &mut W, settings: &EngineSettings) -> Result<(), CliError> {
    write!(out, "{}", settings.to_toml()?)?;
    Ok(())
}

/// Write the default settings, refusing to replace an existing file.
pub fn init<W: Write>(out: &mut W, path: &Path) -> Result<(), CliError> {
    if path.exists() {
        writeln!(out, "{} already exists, leaving it untouched", path.display())?;
        return Ok(());
    }
    EngineSettings::default().write(path)?;
    info!("Wrote default settings to {}", path.display());
    writeln!(out, "Wrote default settings to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use gearing::EngineSettings;
    use tempfile::TempDir;
    use crate::ui::settings::{init, show};

    #[test]
    fn init_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.toml");
        let mut buf = Vec::new();
        init(&mut buf, &path).unwrap();
        assert!(path.exists());
        let loaded = EngineSettings::load_from(&path).unwrap();
        assert_eq!(loaded, EngineSettings::default());

        let mut shown = Vec::new();
        show(&mut shown, &loaded).unwrap();
        let text = String::from_utf8(shown).unwrap();
        assert!(text.contains("page_size = 10"));
        assert!(text.contains("[tier_thresholds]"));
    }

    #[test]
    fn init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.toml");
        std::fs::write(&path, "page_size = 3\n").unwrap();
        let mut buf = Vec::new();
        init(&mut buf, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "page_size = 3\n");
        assert!(String::from_utf8(buf).unwrap().contains("already exists"));
    }
}
