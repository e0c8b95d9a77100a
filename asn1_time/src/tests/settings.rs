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

// Settings are shared by the whole process, so every test here runs
// serially and starts from the defaults.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test;

use chrono::{NaiveDate, NaiveDateTime};
use serial_test::serial;

use crate::{
    generalized_time::{DerGeneralizedTime, GeneralizedTime},
    settings::{self, SettingsError},
    zone::ZoneError,
};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[serial]
fn defaults() {
    settings::reset_default_settings().unwrap();

    let settings = settings::get_settings().unwrap();
    assert_eq!(settings.version(), (1, 0));
    assert_eq!(settings.time.local_zone, "UTC0");
    assert_eq!(settings::local_zone().offset_at(noon()), 0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[serial]
fn local_zone_from_toml() {
    settings::reset_default_settings().unwrap();
    settings::load_settings(
        r#"
        [time]
        local_zone = "HST10"
        "#,
    )
    .unwrap();

    assert_eq!(settings::local_zone().offset_at(noon()), -600);
    assert_eq!(
        settings::get_settings().unwrap().time.local_zone,
        "HST10"
    );

    let t = GeneralizedTime::new("20020122122220").unwrap();
    assert_eq!(t.get_time(), "20020122122220GMT-10:00");
    assert_eq!(t.to_der().time_string(), "20020122222220Z");
    assert_eq!(
        DerGeneralizedTime::new("20020122122220")
            .unwrap()
            .time_string(),
        "20020122222220Z"
    );

    settings::reset_default_settings().unwrap();
    assert_eq!(settings::local_zone().offset_at(noon()), 0);
    assert_eq!(t.get_time(), "20020122122220GMT+00:00");
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
#[serial]
fn local_zone_is_shared_by_threads() {
    settings::reset_default_settings().unwrap();
    settings::load_settings("[time]\nlocal_zone = \"HST10\"").unwrap();

    let here = DerGeneralizedTime::new("20020122122220").unwrap();
    let there = std::thread::spawn(|| DerGeneralizedTime::new("20020122122220").unwrap())
        .join()
        .unwrap();

    assert_eq!(here.time_string(), "20020122222220Z");
    assert_eq!(there, here);

    settings::reset_default_settings().unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[serial]
fn partial_settings_keep_other_values() {
    settings::reset_default_settings().unwrap();
    settings::load_settings("[time]\nlocal_zone = \"JST-9\"").unwrap();
    settings::load_settings("version_minor = 0").unwrap();

    assert_eq!(settings::local_zone().offset_at(noon()), 540);

    settings::reset_default_settings().unwrap();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
#[serial]
fn rejected_settings_change_nothing() {
    settings::reset_default_settings().unwrap();
    settings::load_settings("[time]\nlocal_zone = \"JST-9\"").unwrap();

    assert!(matches!(
        settings::load_settings("[time]\nlocal_zone = \"nowhere\""),
        Err(SettingsError::Zone(ZoneError::InvalidPosix { .. }))
    ));
    assert!(matches!(
        settings::load_settings("[time]\nzone = \"UTC0\""),
        Err(SettingsError::Unrecognized(_))
    ));
    assert!(matches!(
        settings::load_settings("[time"),
        Err(SettingsError::Parse(_))
    ));
    assert!(matches!(
        settings::load_settings("version_major = 2"),
        Err(SettingsError::VersionTooNew(2))
    ));

    assert_eq!(settings::local_zone().offset_at(noon()), 540);
    assert_eq!(
        settings::get_settings().unwrap().time.local_zone,
        "JST-9"
    );

    settings::reset_default_settings().unwrap();
}
