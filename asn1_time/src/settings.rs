// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Crate settings.
//!
//! The only setting today is the local time zone used for times that carry
//! no zone. Settings are loaded from TOML, validated before they are
//! committed, and shared by every thread of the process, so a zone-less time
//! canonicalizes to the same DER bytes wherever it is encoded:
//!
//! ```toml
//! [time]
//! local_zone = "CET-1CEST,M3.5.0,M10.5.0/3"
//! ```

use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use config::{Config, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::zone::{LocalZone, ZoneError};

const MAJOR_VERSION: usize = 1;
const MINOR_VERSION: usize = 0;

static CURRENT: LazyLock<RwLock<Current>> = LazyLock::new(|| {
    RwLock::new(Current {
        config: Config::try_from(&Settings::default()).unwrap_or_default(),
        zone: LocalZone::utc(),
    })
});

// The loaded configuration and the zone validated from it, replaced together.
struct Current {
    config: Config,
    zone: LocalZone,
}

// A panic while holding the lock can not leave `Current` half written: it is
// only ever replaced whole.
fn read() -> RwLockReadGuard<'static, Current> {
    CURRENT.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Current> {
    CURRENT.write().unwrap_or_else(PoisonError::into_inner)
}

/// Describes errors that can occur when loading settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The settings text could not be parsed.
    #[error("could not parse settings ({0})")]
    Parse(String),

    /// The settings contain an unknown key or a value of the wrong type.
    #[error("settings contain an unrecognized value ({0})")]
    Unrecognized(String),

    /// The settings were written for a newer version of this crate.
    #[error("settings version {0} is too new")]
    VersionTooNew(usize),

    /// The configured local zone is not a valid zone description.
    #[error(transparent)]
    Zone(#[from] ZoneError),
}

/// Settings for time handling.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Time {
    /// POSIX `TZ` description of the local zone.
    pub local_zone: String,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            local_zone: "UTC0".to_owned(),
        }
    }
}

/// All crate settings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    version_major: usize,
    version_minor: usize,

    /// Time handling.
    pub time: Time,
}

impl Settings {
    /// Returns the major and minor version the settings were written for.
    pub fn version(&self) -> (usize, usize) {
        (self.version_major, self.version_minor)
    }

    fn merge_toml(current: &Config, toml: &str) -> Result<(Config, LocalZone), SettingsError> {
        let new_config = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| SettingsError::Parse(e.to_string()))?;

        // merge over the current settings so partial files are allowed
        let update_config = Config::builder()
            .add_source(current.clone())
            .add_source(new_config)
            .build()
            .map_err(|e| SettingsError::Parse(e.to_string()))?;

        let settings = update_config
            .clone()
            .try_deserialize::<Settings>()
            .map_err(|e| SettingsError::Unrecognized(e.to_string()))?;

        let zone = settings.validate()?;
        debug!("local zone set to {:?}", settings.time.local_zone);
        Ok((update_config, zone))
    }

    fn validate(&self) -> Result<LocalZone, SettingsError> {
        if self.version_major > MAJOR_VERSION {
            return Err(SettingsError::VersionTooNew(self.version_major));
        }

        Ok(LocalZone::parse(&self.time.local_zone)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_major: MAJOR_VERSION,
            version_minor: MINOR_VERSION,
            time: Time::default(),
        }
    }
}

/// Returns a snapshot of the current settings, or `None` if they can not be
/// read back.
pub fn get_settings() -> Option<Settings> {
    read().config.clone().try_deserialize::<Settings>().ok()
}

/// Loads settings from TOML. Keys that are not given keep their current
/// values. Nothing is changed if the result does not validate.
///
/// The new settings apply to every thread.
pub fn load_settings(toml: &str) -> Result<(), SettingsError> {
    let mut current = write();
    let (config, zone) = Settings::merge_toml(&current.config, toml)?;
    *current = Current { config, zone };
    Ok(())
}

/// Restores the default settings.
pub fn reset_default_settings() -> Result<(), SettingsError> {
    let config = Config::try_from(&Settings::default())
        .map_err(|e| SettingsError::Parse(e.to_string()))?;
    *write() = Current {
        config,
        zone: LocalZone::utc(),
    };
    Ok(())
}

/// Returns the configured local zone.
pub fn local_zone() -> LocalZone {
    read().zone.clone()
}
