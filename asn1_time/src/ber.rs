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

//! The BER formatter.
//!
//! BER admits many encodings of one time value, so a flexible value is
//! written exactly as it was supplied. The only computed text here is the
//! GMT-qualified rendering returned by `get_time`.

use crate::{
    civil,
    fields::{TimeFields, TimeKind},
    zone::LocalZone,
};

/// Returns the BER text of a flexible value: its source text, unchanged.
pub fn format(source: &str) -> &str {
    source
}

/// Renders a parsed time as its digits followed by `GMT±HH:MM`.
///
/// Text that already carries a `GMT` zone is returned untouched. `Z` renders
/// as `GMT+00:00`, and a zone-less time takes its offset from `local`.
/// `UTCTime` always shows seconds.
pub fn gmt_time(fields: &TimeFields, source: &str, local: &LocalZone) -> String {
    if source.contains("GMT") {
        return source.to_owned();
    }

    match fields.kind() {
        TimeKind::Generalized => civil::apply_local_offset_for_display(fields, local),
        TimeKind::Utc => {
            let seconds = if fields.second().is_some() { "" } else { "00" };
            format!(
                "{}{seconds}{}",
                fields.body(),
                civil::gmt_suffix(civil::offset_minutes(fields, local))
            )
        }
    }
}

/// Renders a `UTCTime` like [`gmt_time`] but with the four-digit year.
pub fn adjusted_gmt_time(fields: &TimeFields, source: &str, local: &LocalZone) -> String {
    let time = gmt_time(fields, source, local);
    match fields.kind() {
        TimeKind::Utc => format!("{:02}{time}", fields.year() / 100),
        TimeKind::Generalized => time,
    }
}
