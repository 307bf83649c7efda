//! # Settings File I/O
//!
//! Read and write [`CalculatorSettings`] as pretty-printed JSON.
//!
//! Saves are atomic: the JSON is written to a sibling `.tmp` file, synced to
//! disk, then renamed over the target, so a crash never leaves a truncated
//! settings file behind.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::errors::{CalcError, CalcResult};
use crate::settings::CalculatorSettings;

/// Save settings to a file using an atomic write.
///
/// # Example
///
/// ```rust,no_run
/// use elec_core::file_io::save_settings;
/// use elec_core::settings::CalculatorSettings;
/// use std::path::Path;
///
/// save_settings(&CalculatorSettings::default(), Path::new("ohmbox.json"))?;
/// # Ok::<(), elec_core::errors::CalcError>(())
/// ```
pub fn save_settings(settings: &CalculatorSettings, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(settings)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load settings from a file.
///
/// Keys missing from the file take their defaults. The loaded settings are
/// validated before being returned.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - Successfully loaded settings
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::InvalidInput)` - A value is out of range
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let settings: CalculatorSettings = serde_json::from_str(&contents)?;
    settings.validate()?;

    debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

/// Load settings if the file exists, otherwise return the defaults.
///
/// A file that exists but cannot be parsed is still an error.
pub fn load_settings_or_default(path: &Path) -> CalcResult<CalculatorSettings> {
    if path.exists() {
        load_settings(path)
    } else {
        debug!(path = %path.display(), "no settings file, using defaults");
        Ok(CalculatorSettings::default())
    }
}
