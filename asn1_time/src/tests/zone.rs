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

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

use chrono::{NaiveDate, NaiveDateTime};

use crate::zone::{LocalZone, ZoneError};

fn wall(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn default_is_utc() {
    let noon = wall(2024, 7, 1, 12, 0);
    assert_eq!(LocalZone::default().offset_at(noon), 0);
    assert_eq!(LocalZone::utc().offset_at(noon), 0);
    assert_eq!(LocalZone::parse("UTC0").unwrap().offset_at(noon), 0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn fixed_offsets() {
    let zone = LocalZone::fixed(-600).unwrap();
    assert_eq!(zone.offset_at(wall(2024, 1, 1, 0, 0)), -600);
    assert_eq!(zone.offset_at(wall(2024, 7, 1, 12, 0)), -600);

    assert_eq!(
        LocalZone::fixed(840).unwrap().offset_at(wall(2024, 7, 1, 12, 0)),
        840
    );
    assert!(matches!(
        LocalZone::fixed(841),
        Err(ZoneError::InvalidOffset(841))
    ));
    assert!(matches!(
        LocalZone::fixed(-841),
        Err(ZoneError::InvalidOffset(-841))
    ));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn posix_offsets_are_west_of_utc() {
    let noon = wall(2024, 7, 1, 12, 0);
    let offset = |tz: &str| LocalZone::parse(tz).unwrap().offset_at(noon);

    assert_eq!(offset("EST5"), -300);
    assert_eq!(offset("JST-9"), 540);
    assert_eq!(offset("IST-5:30"), 330);
    assert_eq!(offset("<+0330>-3:30"), 210);
    assert_eq!("HST+10".parse::<LocalZone>().unwrap().offset_at(noon), -600);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn northern_daylight_saving() {
    let zone = LocalZone::parse("EST5EDT,M3.2.0,M11.1.0").unwrap();

    assert_eq!(zone.offset_at(wall(2024, 1, 15, 12, 0)), -300);
    assert_eq!(zone.offset_at(wall(2024, 7, 1, 12, 0)), -240);

    // clocks skip 02:00 to 03:00 on 2024-03-10
    assert_eq!(zone.offset_at(wall(2024, 3, 10, 1, 59)), -300);
    assert_eq!(zone.offset_at(wall(2024, 3, 10, 2, 30)), -300);
    assert_eq!(zone.offset_at(wall(2024, 3, 10, 3, 0)), -240);

    // clocks repeat 01:00 to 02:00 on 2024-11-03
    assert_eq!(zone.offset_at(wall(2024, 11, 3, 0, 59)), -240);
    assert_eq!(zone.offset_at(wall(2024, 11, 3, 1, 30)), -240);
    assert_eq!(zone.offset_at(wall(2024, 11, 3, 2, 0)), -300);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn southern_daylight_saving() {
    let zone = LocalZone::parse("AEST-10AEDT,M10.1.0,M4.1.0/3").unwrap();

    assert_eq!(zone.offset_at(wall(2024, 1, 15, 12, 0)), 660);
    assert_eq!(zone.offset_at(wall(2024, 6, 15, 12, 0)), 600);
    assert_eq!(zone.offset_at(wall(2024, 12, 25, 12, 0)), 660);

    // 2024-04-07 repeats 02:00 to 03:00, 2024-10-06 skips it
    assert_eq!(zone.offset_at(wall(2024, 4, 7, 2, 30)), 660);
    assert_eq!(zone.offset_at(wall(2024, 4, 7, 3, 0)), 600);
    assert_eq!(zone.offset_at(wall(2024, 10, 6, 1, 59)), 600);
    assert_eq!(zone.offset_at(wall(2024, 10, 6, 3, 0)), 660);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn last_week_of_month() {
    let zone = LocalZone::parse("CET-1CEST,M3.5.0,M10.5.0/3").unwrap();

    // last Sundays of March: 2024-03-31 and 2025-03-30
    assert_eq!(zone.offset_at(wall(2024, 3, 31, 1, 59)), 60);
    assert_eq!(zone.offset_at(wall(2024, 3, 31, 3, 0)), 120);
    assert_eq!(zone.offset_at(wall(2025, 3, 29, 12, 0)), 60);
    assert_eq!(zone.offset_at(wall(2025, 3, 30, 3, 0)), 120);

    // last Sunday of October 2024 is the 27th
    assert_eq!(zone.offset_at(wall(2024, 10, 27, 1, 59)), 120);
    assert_eq!(zone.offset_at(wall(2024, 10, 27, 3, 0)), 60);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn julian_day_rules() {
    // day 60 and day 300 of a year without leap days: 1 March and
    // 27 October, at 02:00
    let one_based = LocalZone::parse("EST5EDT,J60,J300").unwrap();
    assert_eq!(one_based.offset_at(wall(2023, 2, 28, 12, 0)), -300);
    assert_eq!(one_based.offset_at(wall(2023, 3, 1, 12, 0)), -240);
    assert_eq!(one_based.offset_at(wall(2023, 10, 26, 12, 0)), -240);
    assert_eq!(one_based.offset_at(wall(2023, 10, 27, 12, 0)), -300);

    // zero-based days count 29 February
    let zero_based = LocalZone::parse("EST5EDT,59,299").unwrap();
    assert_eq!(zero_based.offset_at(wall(2024, 2, 28, 12, 0)), -300);
    assert_eq!(zero_based.offset_at(wall(2024, 2, 29, 12, 0)), -240);
    assert_eq!(zero_based.offset_at(wall(2024, 10, 25, 12, 0)), -240);
    assert_eq!(zero_based.offset_at(wall(2024, 10, 26, 12, 0)), -300);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn explicit_daylight_offset_and_times() {
    let zone = LocalZone::parse("EST5EDT4,M3.2.0/2:00,M11.1.0/2").unwrap();
    assert_eq!(zone.offset_at(wall(2024, 1, 15, 12, 0)), -300);
    assert_eq!(zone.offset_at(wall(2024, 7, 1, 12, 0)), -240);

    let half_hour = LocalZone::parse("LHST-10:30LHDT-11,M10.1.0,M4.1.0").unwrap();
    assert_eq!(half_hour.offset_at(wall(2024, 1, 15, 12, 0)), 660);
    assert_eq!(half_hour.offset_at(wall(2024, 6, 15, 12, 0)), 630);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn invalid_zone_strings() {
    for tz in [
        "",
        "E5",
        "EST",
        "nowhere",
        "IST-5:75",
        "EST5EDT",
        "EST5EDT,M3.2.0",
        "EST5EDT,M13.2.0,M11.1.0",
        "EST5EDT,M3.2.7,M11.1.0",
        "EST5EDT,M3.2.0,M11.1.0x",
        "America/New_York",
    ] {
        let err = LocalZone::parse(tz).unwrap_err();
        assert!(
            matches!(&err, ZoneError::InvalidPosix { tz: text, .. } if text == tz),
            "{tz}: {err:?}"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
