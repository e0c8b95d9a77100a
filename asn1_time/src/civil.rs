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

//! The civil time model: placing a parsed time on the UTC timeline.
//!
//! This is the only place calendar arithmetic happens. An explicit zone
//! offset is applied as given; daylight saving only enters through the
//! [`LocalZone`] used for times that carry no zone.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, TimeDelta, Timelike, Utc};

use crate::{
    error::{TimeError, TimeResult},
    fields::{TimeFields, TimeKind, Zone},
    zone::LocalZone,
};

/// A point on the UTC timeline.
///
/// Two time values denoting the same instant compare equal here even when
/// their encodings differ. Use this for cross-type comparisons, never for
/// byte identity.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CivilInstant(DateTime<Utc>);

impl CivilInstant {
    /// Resolves a parsed time to UTC. `local` is only consulted when the
    /// time has no zone.
    pub fn from_fields(fields: &TimeFields, local: &LocalZone) -> Self {
        Self(DateTime::from_naive_utc_and_offset(
            utc_wall(fields, local),
            Utc,
        ))
    }

    /// Returns the instant as a `chrono` date-time.
    pub fn as_date_time(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for CivilInstant {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self(date_time)
    }
}

impl From<CivilInstant> for DateTime<Utc> {
    fn from(instant: CivilInstant) -> Self {
        instant.0
    }
}

impl fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Returns the offset east of UTC, in minutes, that applies to the parsed
/// time.
pub fn offset_minutes(fields: &TimeFields, local: &LocalZone) -> i32 {
    match fields.zone() {
        Zone::Utc => 0,
        Zone::Offset(minutes) => minutes,
        Zone::Unspecified => local.offset_at(fields.wall()),
    }
}

/// Returns the parsed time's date and time of day in UTC.
pub fn utc_wall(fields: &TimeFields, local: &LocalZone) -> NaiveDateTime {
    fields.wall() - TimeDelta::minutes(i64::from(offset_minutes(fields, local)))
}

/// Formats an offset as `GMT±HH:MM`.
pub fn gmt_suffix(offset_minutes: i32) -> String {
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    let offset = offset_minutes.unsigned_abs();
    format!("GMT{sign}{:02}:{:02}", offset / 60, offset % 60)
}

/// Renders the digits of the parsed time followed by its offset as
/// `GMT±HH:MM`.
///
/// For a zone-less time the offset comes from `local` at that wall-clock
/// time, so a date inside daylight saving shows the daylight offset.
pub fn apply_local_offset_for_display(fields: &TimeFields, local: &LocalZone) -> String {
    format!(
        "{}{}",
        fields.body(),
        gmt_suffix(offset_minutes(fields, local))
    )
}

/// Renders an instant as the text of a value of the given type, in UTC.
///
/// `GeneralizedTime` keeps the sub-second part with trailing zeros removed;
/// `UTCTime` is truncated to whole seconds.
pub(crate) fn instant_text(kind: TimeKind, instant: &DateTime<Utc>) -> TimeResult<String> {
    let year = instant.year();
    if !kind.represents_year(year) {
        return Err(TimeError::YearOutOfRange { kind, year });
    }

    let clock = format!(
        "{:02}{:02}{:02}{:02}{:02}",
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second()
    );

    Ok(match kind {
        TimeKind::Generalized => {
            let nanos = format!("{:09}", instant.nanosecond() % 1_000_000_000);
            let fraction = nanos.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{year:04}{clock}Z")
            } else {
                format!("{year:04}{clock}.{fraction}Z")
            }
        }
        TimeKind::Utc => format!("{:02}{clock}Z", year % 100),
    })
}
