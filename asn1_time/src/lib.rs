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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod ber;
pub mod civil;
pub mod der;
pub mod error;
pub mod fields;
pub mod generalized_time;
pub mod rules;
pub mod settings;
pub mod utc_time;
pub mod zone;

mod value;

#[cfg(test)]
pub(crate) mod tests;

pub use civil::CivilInstant;
pub use error::{TimeError, TimeResult};
pub use fields::{Fraction, TimeFields, TimeKind, Zone};
pub use generalized_time::{DerGeneralizedTime, GeneralizedTime};
pub use rules::{EncodingRule, ValueKind};
pub use utc_time::{DerUtcTime, UtcTime};
pub use zone::LocalZone;
