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

//! ASN.1 `UTCTime`.
//!
//! Two-digit years are expanded with the RFC 5280 pivot: `00` to `49` are
//! 20xx, `50` to `99` are 19xx. A value whose UTC year falls outside 1950 to
//! 2049 is rejected.

use chrono::{DateTime, Utc};

use crate::{
    ber, civil,
    error::TimeResult,
    fields::TimeKind,
    generalized_time::DerGeneralizedTime,
    rules::ValueKind,
    settings,
    value::{time_value, TimeValue},
    zone::LocalZone,
};

/// A `UTCTime` that keeps the text it was constructed from.
#[derive(Clone, Debug)]
pub struct UtcTime(TimeValue);

impl UtcTime {
    /// Parses a time string such as `110616114855Z` or `1106161148+0200`.
    pub fn new(time: &str) -> TimeResult<Self> {
        Self::from_content(time.as_bytes())
    }

    /// Parses the content octets of an encoded `UTCTime`.
    pub fn from_content(content: &[u8]) -> TimeResult<Self> {
        TimeValue::flexible(TimeKind::Utc, content).map(Self)
    }

    /// Creates a value in UTC from an instant, truncated to whole seconds.
    pub fn from_instant(instant: &DateTime<Utc>) -> TimeResult<Self> {
        Self::new(&civil::instant_text(TimeKind::Utc, instant)?)
    }

    /// Like [`get_time`](Self::get_time) but with the four-digit year.
    pub fn get_adjusted_time(&self) -> String {
        ber::adjusted_gmt_time(self.0.fields(), self.0.text(), &settings::local_zone())
    }

    /// Returns the canonical counterpart of this value.
    pub fn to_der(&self) -> DerUtcTime {
        // a UTCTime always has a zone
        DerUtcTime(self.0.to_canonical(&LocalZone::utc()))
    }
}

time_value!(UtcTime, TimeKind::Utc, ValueKind::Flexible);

impl From<DerUtcTime> for UtcTime {
    fn from(time: DerUtcTime) -> Self {
        Self(time.0)
    }
}

impl PartialEq<DerUtcTime> for UtcTime {
    fn eq(&self, other: &DerUtcTime) -> bool {
        self.time_string() == other.time_string()
    }
}

/// A `UTCTime` in canonical DER form: always `YYMMDDHHMMSSZ`.
#[derive(Clone, Debug)]
pub struct DerUtcTime(TimeValue);

impl DerUtcTime {
    /// Parses and canonicalizes a time string.
    pub fn new(time: &str) -> TimeResult<Self> {
        Self::from_content(time.as_bytes())
    }

    /// Parses and canonicalizes the content octets of an encoded `UTCTime`.
    pub fn from_content(content: &[u8]) -> TimeResult<Self> {
        TimeValue::canonical(TimeKind::Utc, content, &LocalZone::utc()).map(Self)
    }

    /// Creates a value from an instant, truncated to whole seconds.
    pub fn from_instant(instant: &DateTime<Utc>) -> TimeResult<Self> {
        Self::new(&civil::instant_text(TimeKind::Utc, instant)?)
    }

    /// Like [`get_time`](Self::get_time) but with the four-digit year.
    pub fn get_adjusted_time(&self) -> String {
        ber::adjusted_gmt_time(self.0.fields(), self.0.text(), &LocalZone::utc())
    }

    /// Returns the same instant as a canonical `GeneralizedTime`.
    pub fn to_generalized_time(&self) -> DerGeneralizedTime {
        DerGeneralizedTime::from_value(
            self.0
                .to_canonical_as(TimeKind::Generalized, &LocalZone::utc()),
        )
    }
}

time_value!(DerUtcTime, TimeKind::Utc, ValueKind::Canonical);

impl PartialEq<UtcTime> for DerUtcTime {
    fn eq(&self, other: &UtcTime) -> bool {
        self.time_string() == other.time_string()
    }
}
