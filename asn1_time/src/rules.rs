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

//! Encoding-rule families and the decision of when a time value must be
//! written in its canonical form.

use std::{fmt, str::FromStr};

use bcder::Mode;

/// The encoding-rule family requested when a time value is serialized.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum EncodingRule {
    /// Basic Encoding Rules. Time values are written as given.
    Ber,

    /// BER restricted to definite lengths. Time values are written as given.
    Dl,

    /// Distinguished Encoding Rules. Time values are always canonical.
    Der,
}

impl EncodingRule {
    /// Returns the `bcder` mode used to frame content for this rule.
    ///
    /// Primitive values are always definite length, so definite-length BER
    /// frames exactly like BER.
    pub fn mode(self) -> Mode {
        match self {
            Self::Ber | Self::Dl => Mode::Ber,
            Self::Der => Mode::Der,
        }
    }
}

impl From<Mode> for EncodingRule {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ber => Self::Ber,
            // CER places the same restrictions on time values as DER.
            Mode::Cer | Mode::Der => Self::Der,
        }
    }
}

impl FromStr for EncodingRule {
    type Err = UnknownEncodingRuleError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        match rule {
            "BER" | "ber" => Ok(Self::Ber),
            "DL" | "dl" => Ok(Self::Dl),
            "DER" | "der" => Ok(Self::Der),
            _ => Err(UnknownEncodingRuleError(rule.to_owned())),
        }
    }
}

impl fmt::Display for EncodingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{}",
            match self {
                Self::Ber => "BER",
                Self::Dl => "DL",
                Self::Der => "DER",
            }
        )
    }
}

/// This error is returned when converting from a string to [`EncodingRule`]
/// if the rule name is unrecognized.
///
/// The string must be one of "BER", "DL", or "DER" (or lower case).
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownEncodingRuleError(pub String);

impl fmt::Display for UnknownEncodingRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "UnknownEncodingRuleError({})", self.0)
    }
}

impl std::error::Error for UnknownEncodingRuleError {}

/// Declared kind of a time value.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// Keeps the text it was constructed from.
    Flexible,

    /// Holds only the canonical text.
    Canonical,
}

/// Returns `true` if a value of `kind` must be written in canonical form
/// when serialized under `rule`.
pub const fn canonicalizes(kind: ValueKind, rule: EncodingRule) -> bool {
    match (kind, rule) {
        (ValueKind::Canonical, _) => true,
        (ValueKind::Flexible, EncodingRule::Der) => true,
        (ValueKind::Flexible, EncodingRule::Ber | EncodingRule::Dl) => false,
    }
}
