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

//! Errors raised when a time string is rejected.

use thiserror::Error;

use crate::fields::{Field, TimeKind};

/// Describes why an ASN.1 time string could not be accepted.
///
/// All of these are raised when a value is constructed. Once a value exists,
/// formatting and canonicalizing it can not fail.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The content is shorter than the shortest legal form of the type.
    #[error("{kind} string too short (length {len})")]
    TooShort {
        /// Type being parsed.
        kind: TimeKind,

        /// Length of the offending content.
        len: usize,
    },

    /// The content contains bytes outside of printable ASCII.
    #[error("{kind} content is not ASCII text")]
    NotText {
        /// Type being parsed.
        kind: TimeKind,
    },

    /// A field that must be made of decimal digits is not.
    #[error("{kind} {field} field is not numeric: {text:?}")]
    InvalidField {
        /// Type being parsed.
        kind: TimeKind,

        /// Field that failed.
        field: Field,

        /// Text found where the field was expected.
        text: String,
    },

    /// A field parsed as a number but is outside of its calendar range.
    #[error("{kind} {field} field out of range: {value}")]
    FieldOutOfRange {
        /// Type being parsed.
        kind: TimeKind,

        /// Field that failed.
        field: Field,

        /// Value that was found.
        value: u32,
    },

    /// The text after the time of day is not a time zone this type accepts.
    #[error("{kind} has an invalid time zone: {text:?}")]
    InvalidZone {
        /// Type being parsed.
        kind: TimeKind,

        /// Remaining text from the start of the zone.
        text: String,
    },

    /// A fractional part is malformed or does not follow the seconds.
    #[error("{kind} has an invalid fractional part: {text:?}")]
    InvalidFraction {
        /// Type being parsed.
        kind: TimeKind,

        /// Remaining text from the start of the fraction.
        text: String,
    },

    /// A fractional part was found on a type that does not carry one.
    #[error("{kind} does not allow fractional seconds")]
    FractionNotAllowed {
        /// Type being parsed.
        kind: TimeKind,
    },

    /// The year can not be represented by the type once expressed in UTC.
    #[error("{kind} can not represent year {year}")]
    YearOutOfRange {
        /// Type being parsed.
        kind: TimeKind,

        /// Year in UTC.
        year: i32,
    },
}

/// Result type for time parsing.
pub type TimeResult<T> = std::result::Result<T, TimeError>;
