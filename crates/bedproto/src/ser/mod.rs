// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Payload serialization primitives shared by all packet codecs.
//!
//! The game protocol frames every field little-endian, with variable-length
//! collections prefixed by a LEB128 unsigned varint and strings carried as
//! varint-length UTF-8. [`PayloadReader`] walks a borrowed byte slice with
//! bounds checking on every access; [`PayloadWriter`] appends to a growable
//! buffer and cannot fail.

pub mod reader;
pub mod writer;

pub use reader::PayloadReader;
pub use writer::PayloadWriter;

use std::fmt;

/// Serialization error used within `ser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerError {
    ReadFailed { offset: usize, reason: String },
    InvalidData { reason: String },
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::ReadFailed { offset, reason } => {
                write!(f, "read failed at offset {}: {}", offset, reason)
            }
            SerError::InvalidData { reason } => write!(f, "invalid data: {}", reason),
        }
    }
}

impl std::error::Error for SerError {}

pub type SerResult<T> = core::result::Result<T, SerError>;
