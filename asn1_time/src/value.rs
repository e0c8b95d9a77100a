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

use std::borrow::Cow;

use chrono::Datelike;
use log::{debug, trace};

use crate::{
    ber, civil, der,
    error::{TimeError, TimeResult},
    fields::{self, TimeFields, TimeKind},
    rules::{canonicalizes, EncodingRule, ValueKind},
    zone::LocalZone,
};

/// The state shared by every public time type: the parsed record and the
/// text the value encodes to.
///
/// For a flexible value the text is the source as given. For a canonical
/// value it is the canonical text and the record is that of the canonical
/// text.
#[derive(Clone, Debug)]
pub(crate) struct TimeValue {
    fields: TimeFields,
    text: String,
}

impl TimeValue {
    pub(crate) fn flexible(kind: TimeKind, content: &[u8]) -> TimeResult<Self> {
        let fields = fields::parse(kind, content).inspect_err(|err| {
            debug!(
                "rejected {kind} content {:?}: {err}",
                String::from_utf8_lossy(content)
            );
        })?;

        Ok(Self {
            fields,
            // parse only accepts printable ASCII
            text: String::from_utf8_lossy(content).into_owned(),
        })
    }

    /// A zone-less time whose UTC year under `local` is out of range for
    /// `kind` is rejected here. Explicit offsets were already checked by the
    /// parser.
    pub(crate) fn canonical(kind: TimeKind, content: &[u8], local: &LocalZone) -> TimeResult<Self> {
        let value = Self::flexible(kind, content)?;

        let year = civil::utc_wall(&value.fields, local).year();
        if !kind.represents_year(year) {
            debug!(
                "rejected {kind} content {:?}: UTC year {year} out of range",
                value.text
            );
            return Err(TimeError::YearOutOfRange { kind, year });
        }

        Ok(value.to_canonical(local))
    }

    pub(crate) fn to_canonical(&self, local: &LocalZone) -> Self {
        self.to_canonical_as(self.fields.kind(), local)
    }

    pub(crate) fn to_canonical_as(&self, kind: TimeKind, local: &LocalZone) -> Self {
        let fields = der::canonical_fields_as(kind, &self.fields, local);
        let text = format!("{}Z", fields.body());

        if text != self.text {
            trace!(
                "canonicalized {} {:?} as {kind} {text:?}",
                self.fields.kind(),
                self.text
            );
        }

        Self { fields, text }
    }

    pub(crate) fn fields(&self) -> &TimeFields {
        &self.fields
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text to encode for a value of `kind` under `rule`.
    pub(crate) fn text_for(
        &self,
        kind: ValueKind,
        rule: EncodingRule,
        local: &LocalZone,
    ) -> Cow<'_, str> {
        match kind {
            ValueKind::Flexible if canonicalizes(kind, rule) => {
                Cow::Owned(der::canonicalize(&self.fields, local))
            }
            ValueKind::Flexible => Cow::Borrowed(ber::format(&self.text)),
            ValueKind::Canonical => Cow::Borrowed(&self.text),
        }
    }
}

/// Implements the surface shared by the public time types: accessors,
/// encoding, `bcder` decoding and encoding, and text-based equality.
///
/// The type must be a tuple struct around a [`TimeValue`] and provide
/// `new(&str)` and `from_content(&[u8])`.
macro_rules! time_value {
    ($name:ident, $kind:expr, $value_kind:expr) => {
        impl $name {
            /// Returns the text this value encodes to: the source as given
            /// for a flexible value, the canonical text for a canonical one.
            pub fn time_string(&self) -> &str {
                self.0.text()
            }

            /// Returns the parsed fields.
            pub fn fields(&self) -> &$crate::fields::TimeFields {
                self.0.fields()
            }

            /// Returns the time followed by its offset as `GMT±HH:MM`, using
            /// the configured local zone if the value has no zone.
            pub fn get_time(&self) -> String {
                self.get_time_in(&$crate::settings::local_zone())
            }

            /// Returns the time followed by its offset as `GMT±HH:MM`, using
            /// `local` if the value has no zone.
            pub fn get_time_in(&self, local: &$crate::zone::LocalZone) -> String {
                $crate::ber::gmt_time(self.0.fields(), self.0.text(), local)
            }

            /// Returns the instant this value denotes, using the configured
            /// local zone if the value has no zone.
            pub fn to_instant(&self) -> $crate::civil::CivilInstant {
                self.to_instant_in(&$crate::settings::local_zone())
            }

            /// Returns the instant this value denotes, using `local` if the
            /// value has no zone.
            pub fn to_instant_in(
                &self,
                local: &$crate::zone::LocalZone,
            ) -> $crate::civil::CivilInstant {
                $crate::civil::CivilInstant::from_fields(self.0.fields(), local)
            }

            /// Returns the content octets for the requested rule family.
            pub fn content(&self, rule: $crate::rules::EncodingRule) -> Vec<u8> {
                self.content_in(rule, &$crate::settings::local_zone())
            }

            /// Returns the content octets for the requested rule family,
            /// using `local` if the value has no zone and must be
            /// canonicalized.
            pub fn content_in(
                &self,
                rule: $crate::rules::EncodingRule,
                local: &$crate::zone::LocalZone,
            ) -> Vec<u8> {
                self.0
                    .text_for($value_kind, rule, local)
                    .as_bytes()
                    .to_vec()
            }

            /// Returns the complete encoding (tag, length and content) for
            /// the requested rule family.
            pub fn encoded(&self, rule: $crate::rules::EncodingRule) -> Vec<u8> {
                use bcder::encode::PrimitiveContent;

                bcder::Captured::from_values(rule.mode(), self.clone().encode())
                    .as_slice()
                    .to_vec()
            }

            /// Takes a value from the beginning of a constructed value.
            pub fn take_from<S: bcder::decode::Source>(
                cons: &mut bcder::decode::Constructed<S>,
            ) -> Result<Self, bcder::decode::DecodeError<S::Error>> {
                cons.take_primitive_if($kind.tag(), |prim| Self::from_primitive(prim))
            }

            /// Takes a value from the beginning of a constructed value if
            /// one is present.
            pub fn take_opt_from<S: bcder::decode::Source>(
                cons: &mut bcder::decode::Constructed<S>,
            ) -> Result<Option<Self>, bcder::decode::DecodeError<S::Error>> {
                cons.take_opt_primitive_if($kind.tag(), |prim| Self::from_primitive(prim))
            }

            /// Decodes a value from the content of a primitive.
            pub fn from_primitive<S: bcder::decode::Source>(
                prim: &mut bcder::decode::Primitive<S>,
            ) -> Result<Self, bcder::decode::DecodeError<S::Error>> {
                let content = prim.take_all()?;
                Self::from_content(content.as_ref())
                    .map_err(|_| prim.content_err($kind.decode_error()))
            }
        }

        impl bcder::encode::PrimitiveContent for $name {
            const TAG: bcder::Tag = $kind.tag();

            fn encoded_len(&self, mode: bcder::Mode) -> usize {
                self.content(mode.into()).len()
            }

            fn write_encoded<W: std::io::Write>(
                &self,
                mode: bcder::Mode,
                target: &mut W,
            ) -> Result<(), std::io::Error> {
                target.write_all(&self.content(mode.into()))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::TimeError;

            fn from_str(time: &str) -> Result<Self, Self::Err> {
                Self::new(time)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0.text())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.text() == other.0.text()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.0.text(), state);
            }
        }
    };
}

pub(crate) use time_value;
