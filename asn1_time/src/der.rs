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

//! The DER canonicalizer.
//!
//! X.690 §11.7 and §11.8 admit exactly one encoding of each time value:
//!
//! 1. the zone is always `Z`, so any offset is applied to the fields first;
//! 2. seconds are always present;
//! 3. trailing zeros of the fraction are removed, and the decimal point with
//!    them if nothing remains;
//! 4. `UTCTime` is always `YYMMDDHHMMSSZ`.

use chrono::{Datelike, Timelike};

use crate::{
    civil,
    fields::{Fraction, TimeFields, TimeKind, Zone},
    zone::LocalZone,
};

/// Returns the canonical text of a parsed time.
///
/// `local` is only consulted when the time has no zone. Canonicalizing
/// canonical text returns it unchanged.
pub fn canonicalize(fields: &TimeFields, local: &LocalZone) -> String {
    canonicalize_as(fields.kind(), fields, local)
}

/// Returns the canonical text of a parsed time written as type `kind`.
///
/// The UTC year of the time must be representable by `kind`. That always
/// holds for `kind == fields.kind()` and when widening `UTCTime` to
/// `GeneralizedTime`.
pub fn canonicalize_as(kind: TimeKind, fields: &TimeFields, local: &LocalZone) -> String {
    let canonical = canonical_fields_as(kind, fields, local);
    format!("{}Z", canonical.body())
}

/// Returns the record of the canonical form of a parsed time written as type
/// `kind`.
pub(crate) fn canonical_fields_as(
    kind: TimeKind,
    fields: &TimeFields,
    local: &LocalZone,
) -> TimeFields {
    let mut utc = civil::utc_wall(fields, local);

    // Explicit offsets are range checked when parsed and canonical values
    // check local times when built. A flexible local time near the ends of
    // year 0000 or 9999 can still leave the range, and then keeps its
    // wall-clock fields.
    if !kind.represents_year(utc.year()) {
        utc = fields.wall();
    }

    let fraction = match kind {
        TimeKind::Generalized => fields
            .fraction()
            .map(Fraction::normalized)
            .filter(|digits| !digits.is_empty())
            .map(Fraction::new),
        TimeKind::Utc => None,
    };

    let year = match kind {
        TimeKind::Generalized => format!("{:04}", utc.year()),
        TimeKind::Utc => format!("{:02}", utc.year() % 100),
    };

    let mut body = format!(
        "{year}{:02}{:02}{:02}{:02}{:02}",
        utc.month(),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    );

    let utc = match &fraction {
        Some(fraction) => {
            body.push('.');
            body.push_str(fraction.digits());
            utc
        }
        None => utc.with_nanosecond(0).unwrap_or(utc),
    };

    TimeFields::new(kind, utc, true, fraction, Zone::Utc, body)
}
