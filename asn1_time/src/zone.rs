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

//! The local time zone used to interpret and display zone-less times.
//!
//! A [`LocalZone`] is either a fixed UTC offset or a POSIX `TZ` rule, both
//! evaluated by `jiff`. It is always passed in explicitly (or read from
//! [`settings`](crate::settings)); nothing here consults the host's zone
//! database.

use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};
use jiff::{
    civil,
    tz::{AmbiguousOffset, Offset, TimeZone},
};
use thiserror::Error;

use crate::fields::MAX_OFFSET_MINUTES;

/// Describes errors that can occur when building a [`LocalZone`].
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum ZoneError {
    /// The text is not a POSIX `TZ` string. A zone that names a daylight
    /// saving abbreviation must also give its transition rule.
    #[error("invalid POSIX time zone {tz:?}")]
    InvalidPosix {
        /// The rejected text.
        tz: String,

        /// Why `jiff` rejected it.
        #[source]
        source: jiff::Error,
    },

    /// A fixed offset is beyond ±14:00.
    #[error("UTC offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// A local time zone: a fixed offset or a POSIX `TZ` rule.
#[derive(Clone, Debug)]
pub struct LocalZone(TimeZone);

impl LocalZone {
    /// Returns the UTC zone.
    pub fn utc() -> Self {
        Self(TimeZone::UTC)
    }

    /// Returns a zone with a fixed offset east of UTC, in minutes.
    pub fn fixed(offset_minutes: i32) -> Result<Self, ZoneError> {
        if offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ZoneError::InvalidOffset(offset_minutes));
        }

        let offset = Offset::from_seconds(offset_minutes * 60)
            .map_err(|_| ZoneError::InvalidOffset(offset_minutes))?;
        Ok(Self(TimeZone::fixed(offset)))
    }

    /// Parses a POSIX `TZ` string such as `EST5EDT,M3.2.0,M11.1.0` or
    /// `AEST-10AEDT,M10.1.0,M4.1.0/3`.
    ///
    /// Offsets are written as hours west of UTC, as POSIX requires.
    /// Transition dates may use any POSIX form (`Mm.w.d`, `Jn` or `n`).
    pub fn parse(tz: &str) -> Result<Self, ZoneError> {
        TimeZone::posix(tz)
            .map(Self)
            .map_err(|source| ZoneError::InvalidPosix {
                tz: tz.to_owned(),
                source,
            })
    }

    /// Returns the offset east of UTC, in minutes, that applies to the given
    /// wall-clock time.
    ///
    /// A wall-clock time that occurs twice when clocks go back takes the
    /// earlier offset. One skipped when clocks go forward takes the offset in
    /// force before the transition.
    pub fn offset_at(&self, wall: NaiveDateTime) -> i32 {
        let wall = civil_date_time(wall).unwrap_or(civil::DateTime::ZERO);
        let offset = match self.0.to_ambiguous_timestamp(wall).offset() {
            AmbiguousOffset::Unambiguous { offset } => offset,
            AmbiguousOffset::Gap { before, .. } | AmbiguousOffset::Fold { before, .. } => before,
        };
        offset.seconds() / 60
    }
}

impl Default for LocalZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for LocalZone {
    type Err = ZoneError;

    fn from_str(tz: &str) -> Result<Self, Self::Err> {
        Self::parse(tz)
    }
}

// Parsed times always fit: years are 0000 to 9999 and seconds stop at 59.
fn civil_date_time(wall: NaiveDateTime) -> Option<civil::DateTime> {
    civil::DateTime::new(
        i16::try_from(wall.year()).ok()?,
        i8::try_from(wall.month()).ok()?,
        i8::try_from(wall.day()).ok()?,
        i8::try_from(wall.hour()).ok()?,
        i8::try_from(wall.minute()).ok()?,
        i8::try_from(wall.second()).ok()?,
        0,
    )
    .ok()
}
