// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error taxonomy for the command packet codec.
//!
//! Decoding is all-or-nothing: the first malformed field aborts the whole
//! decode and no partial model is returned. Encode errors only arise from
//! models that violate their own cross-references; a well-formed model
//! always encodes.

use crate::ser::SerError;
use std::fmt;

/// Decode-side failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Primitive-layer failure (truncation, varint overflow, bad UTF-8).
    Read(SerError),
    /// A cross-reference index points outside its lookup table.
    MalformedIndex {
        table: &'static str,
        index: i64,
        len: usize,
        context: String,
    },
    /// A parameter type tag carries none of the known kind flags.
    InvalidTypeTag {
        command: String,
        parameter: String,
        tag: u32,
    },
    /// A constraint names a pool value that is not a member of its enum.
    EnumMembershipViolation { value: String, enum_name: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Read(e) => write!(f, "read error: {}", e),
            DecodeError::MalformedIndex {
                table,
                index,
                len,
                context,
            } => write!(
                f,
                "{}: invalid {} index {} (table has {} entries)",
                context, table, index, len
            ),
            DecodeError::InvalidTypeTag {
                command,
                parameter,
                tag,
            } => write!(
                f,
                "deserializing {} parameter {}: invalid parameter type 0x{:x}",
                command, parameter, tag
            ),
            DecodeError::EnumMembershipViolation { value, enum_name } => write!(
                f,
                "value \"{}\" does not belong to enum \"{}\"",
                value, enum_name
            ),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Read(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SerError> for DecodeError {
    fn from(e: SerError) -> Self {
        DecodeError::Read(e)
    }
}

pub type DecodeResult<T> = core::result::Result<T, DecodeError>;

/// Encode-side failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The model references an enum, postfix or value that the index
    /// pre-pass never registered, or an index exceeds what the wire
    /// format can represent.
    InternalConsistency { reason: String },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InternalConsistency { reason } => {
                write!(f, "internal consistency check failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

pub type EncodeResult<T> = core::result::Result<T, EncodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display_variants() {
        let err = DecodeError::MalformedIndex {
            table: "enum value pool",
            index: 7,
            len: 3,
            context: "deserializing enum 'gm'".into(),
        };
        assert_eq!(
            err.to_string(),
            "deserializing enum 'gm': invalid enum value pool index 7 (table has 3 entries)"
        );

        let err = DecodeError::InvalidTypeTag {
            command: "give".into(),
            parameter: "amount".into(),
            tag: 0,
        };
        assert_eq!(
            err.to_string(),
            "deserializing give parameter amount: invalid parameter type 0x0"
        );

        let err = DecodeError::EnumMembershipViolation {
            value: "medium".into(),
            enum_name: "mode".into(),
        };
        assert_eq!(
            err.to_string(),
            "value \"medium\" does not belong to enum \"mode\""
        );
    }

    #[test]
    fn test_read_errors_convert_and_chain() {
        let ser = SerError::ReadFailed {
            offset: 9,
            reason: "unexpected end of buffer".into(),
        };
        let err: DecodeError = ser.clone().into();
        assert_eq!(err, DecodeError::Read(ser));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::InternalConsistency {
            reason: "enum 'gm' was never registered".into(),
        };
        assert_eq!(
            err.to_string(),
            "internal consistency check failed: enum 'gm' was never registered"
        );
    }
}
