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

//! ASN.1 `GeneralizedTime`.
//!
//! [`GeneralizedTime`] keeps whatever text it was given and reproduces it
//! under BER. [`DerGeneralizedTime`] canonicalizes on construction and only
//! ever encodes to the canonical text.

use chrono::{DateTime, Utc};

use crate::{
    civil,
    error::TimeResult,
    fields::TimeKind,
    rules::ValueKind,
    settings,
    value::{time_value, TimeValue},
    zone::LocalZone,
};

/// A `GeneralizedTime` that keeps the text it was constructed from.
///
/// Equality compares the BER text, so `"20020122122220Z"` and
/// `"20020122122220.0Z"` are different values even though they denote the
/// same instant. Compare [`to_instant`](Self::to_instant) results for that.
#[derive(Clone, Debug)]
pub struct GeneralizedTime(TimeValue);

impl GeneralizedTime {
    /// Parses a time string such as `20020122122220.1-1000`.
    pub fn new(time: &str) -> TimeResult<Self> {
        Self::from_content(time.as_bytes())
    }

    /// Parses the content octets of an encoded `GeneralizedTime`.
    pub fn from_content(content: &[u8]) -> TimeResult<Self> {
        TimeValue::flexible(TimeKind::Generalized, content).map(Self)
    }

    /// Creates a value in UTC from an instant, keeping any sub-second part.
    pub fn from_instant(instant: &DateTime<Utc>) -> TimeResult<Self> {
        Self::new(&civil::instant_text(TimeKind::Generalized, instant)?)
    }

    /// Returns the canonical counterpart of this value, using the configured
    /// local zone if the value has no zone.
    pub fn to_der(&self) -> DerGeneralizedTime {
        self.to_der_in(&settings::local_zone())
    }

    /// Returns the canonical counterpart of this value, using `local` if the
    /// value has no zone.
    ///
    /// A zone-less time within a day of the ends of year 0000 or 9999 may
    /// fall outside those years in UTC. Its canonical text then keeps the
    /// wall-clock fields and names a different instant than
    /// [`to_instant_in`](Self::to_instant_in). [`DerGeneralizedTime::new_in`]
    /// rejects such a time instead.
    pub fn to_der_in(&self, local: &LocalZone) -> DerGeneralizedTime {
        DerGeneralizedTime(self.0.to_canonical(local))
    }
}

time_value!(GeneralizedTime, TimeKind::Generalized, ValueKind::Flexible);

impl From<DerGeneralizedTime> for GeneralizedTime {
    fn from(time: DerGeneralizedTime) -> Self {
        Self(time.0)
    }
}

impl PartialEq<DerGeneralizedTime> for GeneralizedTime {
    fn eq(&self, other: &DerGeneralizedTime) -> bool {
        self.time_string() == other.time_string()
    }
}

/// A `GeneralizedTime` in canonical DER form.
///
/// Construction canonicalizes the input and keeps nothing else, so every
/// encoding rule yields the same bytes. A zone-less input whose UTC year is
/// outside 0000 to 9999 under the local zone is rejected with
/// [`TimeError::YearOutOfRange`](crate::TimeError::YearOutOfRange).
#[derive(Clone, Debug)]
pub struct DerGeneralizedTime(TimeValue);

impl DerGeneralizedTime {
    /// Parses and canonicalizes a time string, using the configured local
    /// zone if it has no zone.
    pub fn new(time: &str) -> TimeResult<Self> {
        Self::new_in(time, &settings::local_zone())
    }

    /// Parses and canonicalizes a time string, using `local` if it has no
    /// zone.
    pub fn new_in(time: &str, local: &LocalZone) -> TimeResult<Self> {
        Self::from_content_in(time.as_bytes(), local)
    }

    /// Parses and canonicalizes the content octets of an encoded
    /// `GeneralizedTime`, using the configured local zone if it has no zone.
    pub fn from_content(content: &[u8]) -> TimeResult<Self> {
        Self::from_content_in(content, &settings::local_zone())
    }

    /// Parses and canonicalizes the content octets of an encoded
    /// `GeneralizedTime`, using `local` if it has no zone.
    pub fn from_content_in(content: &[u8], local: &LocalZone) -> TimeResult<Self> {
        TimeValue::canonical(TimeKind::Generalized, content, local).map(Self)
    }

    /// Creates a value from an instant, keeping any sub-second part.
    pub fn from_instant(instant: &DateTime<Utc>) -> TimeResult<Self> {
        Self::new_in(
            &civil::instant_text(TimeKind::Generalized, instant)?,
            &LocalZone::utc(),
        )
    }

    pub(crate) fn from_value(value: TimeValue) -> Self {
        Self(value)
    }
}

time_value!(DerGeneralizedTime, TimeKind::Generalized, ValueKind::Canonical);

impl PartialEq<GeneralizedTime> for DerGeneralizedTime {
    fn eq(&self, other: &GeneralizedTime) -> bool {
        self.time_string() == other.time_string()
    }
}
