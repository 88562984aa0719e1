// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bounds-checked read cursor over a borrowed payload.
//!

use super::{SerError, SerResult};

/// Generate read methods for little-endian primitive types
///
/// Each generated method:
/// 1. Checks buffer bounds (returns `SerError::ReadFailed` if overflow)
/// 2. Reads N bytes from buffer
/// 3. Converts bytes to value via `from_le_bytes()`
/// 4. Advances offset
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> SerResult<$type> {
            if self.offset + $size > self.buffer.len() {
                return Err(SerError::ReadFailed {
                    offset: self.offset,
                    reason: "unexpected end of buffer".into(),
                });
            }
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(&self.buffer[self.offset..self.offset + $size]);
            self.offset += $size;
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Immutable cursor for reading packet payloads (bounds-checked, zero-copy)
pub struct PayloadReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_u16_le, u16, 2);
    impl_read_le!(read_u32_le, u32, 4);
    impl_read_le!(read_i32_le, i32, 4);

    /// Reads a single byte as a boolean (zero = false, nonzero = true).
    pub fn read_bool(&mut self) -> SerResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a LEB128 unsigned varint (7 data bits per byte, low bits first).
    ///
    /// At most 5 bytes; a continuation bit on the 5th byte or value bits
    /// beyond bit 31 are rejected as `SerError::InvalidData`.
    pub fn read_unsigned_varint(&mut self) -> SerResult<u32> {
        let mut value: u32 = 0;
        for i in 0..5 {
            let b = self.read_u8()?;
            if i == 4 && b & 0x70 != 0 {
                return Err(SerError::InvalidData {
                    reason: "unsigned varint overflows 32 bits".into(),
                });
            }
            value |= u32::from(b & 0x7f) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(SerError::InvalidData {
            reason: "unsigned varint exceeds 5 bytes".into(),
        })
    }

    /// Reads a varint-length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> SerResult<String> {
        let len = self.read_unsigned_varint()? as usize;
        let bytes = self.read_bytes(len)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => Err(SerError::InvalidData {
                reason: "string is not valid UTF-8".into(),
            }),
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> SerResult<&'a [u8]> {
        if self.offset + len > self.buffer.len() {
            return Err(SerError::ReadFailed {
                offset: self.offset,
                reason: "unexpected end of buffer".into(),
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }
}
