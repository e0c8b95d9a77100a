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

//! The time string parser and the record it produces.
//!
//! Parsing is purely lexical. It validates every field against the calendar
//! but never consults a clock or a time zone database.

use std::fmt;

use bcder::Tag;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::error::{TimeError, TimeResult};

/// Largest UTC offset accepted in a time zone suffix, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// The two ASN.1 time types.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum TimeKind {
    /// `GeneralizedTime`: four-digit year, optional minutes, seconds,
    /// fraction and zone.
    Generalized,

    /// `UTCTime`: two-digit year, mandatory zone, no fraction.
    Utc,
}

impl TimeKind {
    /// Returns the universal tag of this type.
    pub const fn tag(self) -> Tag {
        match self {
            Self::Generalized => Tag::GENERALIZED_TIME,
            Self::Utc => Tag::UTC_TIME,
        }
    }

    /// Shortest legal content: `YYYYMMDDHH` or `YYMMDDHHMMZ`.
    const fn min_len(self) -> usize {
        match self {
            Self::Generalized => 10,
            Self::Utc => 11,
        }
    }

    pub(crate) const fn decode_error(self) -> &'static str {
        match self {
            Self::Generalized => "invalid GeneralizedTime",
            Self::Utc => "invalid UTCTime",
        }
    }

    /// Returns `true` if a UTC calendar year can be written by this type.
    pub(crate) fn represents_year(self, year: i32) -> bool {
        match self {
            Self::Generalized => (0..=9999).contains(&year),
            Self::Utc => (1950..=2049).contains(&year),
        }
    }
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Self::Generalized => "GeneralizedTime",
            Self::Utc => "UTCTime",
        })
    }
}

/// Names a field of a time string in error reports.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[allow(missing_docs)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    ZoneHour,
    ZoneMinute,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::ZoneHour => "zone hour",
            Self::ZoneMinute => "zone minute",
        })
    }
}

/// Fractional seconds exactly as written, trailing zeros included.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Fraction {
    digits: String,
}

impl Fraction {
    pub(crate) fn new(digits: &str) -> Self {
        Self {
            digits: digits.to_owned(),
        }
    }

    /// Returns the digits as given, without the decimal marker.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Returns the digits with trailing zeros removed.
    ///
    /// This is empty when every digit is zero.
    pub fn normalized(&self) -> &str {
        self.digits.trim_end_matches('0')
    }

    /// Returns the fraction in nanoseconds. Digits past the ninth are
    /// dropped.
    pub fn nanosecond(&self) -> u32 {
        self.digits
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(9)
            .fold(0, |nanos, digit| nanos * 10 + u32::from(digit - b'0'))
    }
}

/// The time zone of a time string.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Zone {
    /// No zone was given. The time is a local time.
    Unspecified,

    /// `Z`.
    Utc,

    /// An explicit offset east of UTC, in minutes. Always within
    /// [`MAX_OFFSET_MINUTES`] of zero.
    Offset(i32),
}

impl Zone {
    /// Returns the offset from UTC in minutes, or `None` for a local time.
    pub fn offset_minutes(self) -> Option<i32> {
        match self {
            Self::Unspecified => None,
            Self::Utc => Some(0),
            Self::Offset(minutes) => Some(minutes),
        }
    }
}

/// A parsed and calendar-checked time string.
///
/// The wall-clock fields are kept as written: an explicit zone offset has not
/// been applied to them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TimeFields {
    kind: TimeKind,
    wall: NaiveDateTime,
    has_seconds: bool,
    fraction: Option<Fraction>,
    zone: Zone,
    body: String,
}

impl TimeFields {
    pub(crate) fn new(
        kind: TimeKind,
        wall: NaiveDateTime,
        has_seconds: bool,
        fraction: Option<Fraction>,
        zone: Zone,
        body: String,
    ) -> Self {
        Self {
            kind,
            wall,
            has_seconds,
            fraction,
            zone,
            body,
        }
    }

    /// Returns the type this record was parsed as.
    pub fn kind(&self) -> TimeKind {
        self.kind
    }

    /// Returns the four-digit year. Two-digit `UTCTime` years are already
    /// expanded.
    pub fn year(&self) -> i32 {
        self.wall.year()
    }

    /// Returns the month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.wall.month()
    }

    /// Returns the day of the month.
    pub fn day(&self) -> u32 {
        self.wall.day()
    }

    /// Returns the hour, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.wall.hour()
    }

    /// Returns the minute. Zero when the source stopped at the hour.
    pub fn minute(&self) -> u32 {
        self.wall.minute()
    }

    /// Returns the seconds, if the source carried them.
    pub fn second(&self) -> Option<u32> {
        self.has_seconds.then(|| self.wall.second())
    }

    /// Returns the fractional seconds, if the source carried them.
    pub fn fraction(&self) -> Option<&Fraction> {
        self.fraction.as_ref()
    }

    /// Returns the time zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Returns the wall-clock date and time, including fractional seconds.
    pub fn wall(&self) -> NaiveDateTime {
        self.wall
    }

    /// Returns the source text up to the zone: the digits and any fraction.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Expands a two-digit `UTCTime` year.
///
/// Follows RFC 5280: `00..=49` is 20xx, `50..=99` is 19xx.
pub fn expand_utc_year(yy: u32) -> i32 {
    // yy is at most two digits
    let yy = yy as i32;
    if yy < 50 {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Parses the content octets of a time value of the given type.
///
/// Accepted forms:
///
/// * `UTCTime`: `YYMMDDHHMM[SS](Z|±HHMM|GMT±HH:MM)`
/// * `GeneralizedTime`: `YYYYMMDDHH[MM[SS[.fraction]]][Z|±HH|±HHMM|GMT±HH:MM]`
pub fn parse(kind: TimeKind, content: &[u8]) -> TimeResult<TimeFields> {
    if content.len() < kind.min_len() {
        return Err(TimeError::TooShort {
            kind,
            len: content.len(),
        });
    }

    let text = std::str::from_utf8(content)
        .ok()
        .filter(|text| text.bytes().all(|b| b.is_ascii_graphic()))
        .ok_or(TimeError::NotText { kind })?;

    let mut scan = Scanner {
        kind,
        text,
        pos: 0,
    };

    let year = match kind {
        TimeKind::Generalized => scan.number(Field::Year, 4)? as i32,
        TimeKind::Utc => expand_utc_year(scan.number(Field::Year, 2)?),
    };
    let month = scan.number(Field::Month, 2)?;
    let day = scan.number(Field::Day, 2)?;
    let hour = scan.number(Field::Hour, 2)?;

    let minute = match kind {
        TimeKind::Utc => Some(scan.number(Field::Minute, 2)?),
        TimeKind::Generalized if scan.at_digits(2) => Some(scan.number(Field::Minute, 2)?),
        TimeKind::Generalized => None,
    };

    let second = if minute.is_some() && scan.at_digits(2) {
        Some(scan.number(Field::Second, 2)?)
    } else {
        None
    };

    let fraction = scan.fraction(second.is_some())?;
    let body = text[..scan.pos].to_owned();
    let zone = parse_zone(kind, scan.rest())?;

    check_range(kind, Field::Month, month, 1..=12)?;
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::FieldOutOfRange {
        kind,
        field: Field::Day,
        value: day,
    })?;
    check_range(kind, Field::Hour, hour, 0..=23)?;
    let minute = minute.unwrap_or(0);
    check_range(kind, Field::Minute, minute, 0..=59)?;
    let has_seconds = second.is_some();
    let second = second.unwrap_or(0);
    check_range(kind, Field::Second, second, 0..=59)?;

    let nanos = fraction.as_ref().map_or(0, Fraction::nanosecond);
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).ok_or(
        TimeError::FieldOutOfRange {
            kind,
            field: Field::Second,
            value: second,
        },
    )?;
    let wall = date.and_time(time);

    if let Some(offset) = zone.offset_minutes() {
        let utc_year = (wall - TimeDelta::minutes(i64::from(offset))).year();
        if !kind.represents_year(utc_year) {
            return Err(TimeError::YearOutOfRange {
                kind,
                year: utc_year,
            });
        }
    }

    Ok(TimeFields {
        kind,
        wall,
        has_seconds,
        fraction,
        zone,
        body,
    })
}

fn check_range(
    kind: TimeKind,
    field: Field,
    value: u32,
    range: std::ops::RangeInclusive<u32>,
) -> TimeResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(TimeError::FieldOutOfRange { kind, field, value })
    }
}

struct Scanner<'a> {
    kind: TimeKind,
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn at_digits(&self, width: usize) -> bool {
        self.rest()
            .as_bytes()
            .get(..width)
            .is_some_and(|digits| digits.iter().all(u8::is_ascii_digit))
    }

    fn number(&mut self, field: Field, width: usize) -> TimeResult<u32> {
        let rest = self.rest();
        let invalid = || TimeError::InvalidField {
            kind: self.kind,
            field,
            text: rest.chars().take(width).collect(),
        };

        if !self.at_digits(width) {
            return Err(invalid());
        }

        let value = rest[..width].parse().map_err(|_| invalid())?;
        self.pos += width;
        Ok(value)
    }

    fn fraction(&mut self, after_seconds: bool) -> TimeResult<Option<Fraction>> {
        let rest = self.rest();
        let Some(digits) = rest.strip_prefix(|c: char| c == '.' || c == ',') else {
            return Ok(None);
        };

        if self.kind == TimeKind::Utc {
            return Err(TimeError::FractionNotAllowed { kind: self.kind });
        }

        let len = digits.bytes().take_while(u8::is_ascii_digit).count();
        if !after_seconds || len == 0 {
            return Err(TimeError::InvalidFraction {
                kind: self.kind,
                text: rest.to_owned(),
            });
        }

        self.pos += 1 + len;
        Ok(Some(Fraction::new(&digits[..len])))
    }
}

fn parse_zone(kind: TimeKind, text: &str) -> TimeResult<Zone> {
    let invalid = || TimeError::InvalidZone {
        kind,
        text: text.to_owned(),
    };

    match text {
        "" if kind == TimeKind::Generalized => return Ok(Zone::Unspecified),
        "Z" => return Ok(Zone::Utc),
        _ => (),
    }

    let (gmt, signed) = match text.strip_prefix("GMT") {
        Some(signed) => (true, signed),
        None => (false, text),
    };

    let (sign, offset) = match signed.as_bytes().first() {
        Some(b'+') => (1, &signed[1..]),
        Some(b'-') => (-1, &signed[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = match (gmt, offset.len()) {
        (true, 5) if offset.as_bytes()[2] == b':' => (&offset[..2], Some(&offset[3..])),
        (false, 2) if kind == TimeKind::Generalized => (offset, None),
        (false, 4) => (&offset[..2], Some(&offset[2..])),
        _ => return Err(invalid()),
    };

    let two_digits = |digits: &str| -> TimeResult<i32> {
        if digits.bytes().all(|b| b.is_ascii_digit()) {
            digits.parse().map_err(|_| invalid())
        } else {
            Err(invalid())
        }
    };

    let hours = two_digits(hours)?;
    let minutes = minutes.map(two_digits).transpose()?.unwrap_or(0);

    if minutes > 59 {
        return Err(TimeError::FieldOutOfRange {
            kind,
            field: Field::ZoneMinute,
            value: minutes as u32,
        });
    }

    let total = hours * 60 + minutes;
    if total > MAX_OFFSET_MINUTES {
        return Err(TimeError::FieldOutOfRange {
            kind,
            field: Field::ZoneHour,
            value: hours as u32,
        });
    }

    Ok(Zone::Offset(sign * total))
}
