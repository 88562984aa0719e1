// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Append-only write cursor producing a packet payload.
//!

/// Generate write methods for little-endian primitive types
///
/// Payloads are variable-size, so writes append to a growable buffer and
/// cannot fail.
macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) {
            self.buffer.extend_from_slice(&value.to_le_bytes());
        }
    };
}

/// Growable buffer for writing packet payloads
#[derive(Default)]
pub struct PayloadWriter {
    buffer: Vec<u8>,
}

impl PayloadWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    impl_write_le!(write_u8, u8);
    impl_write_le!(write_u16_le, u16);
    impl_write_le!(write_u32_le, u32);
    impl_write_le!(write_i32_le, i32);

    /// Writes a boolean as a single 0/1 byte.
    pub fn write_bool(&mut self, value: bool) {
        self.write_u8(u8::from(value));
    }

    /// Writes a LEB128 unsigned varint (7 data bits per byte, low bits first).
    pub fn write_unsigned_varint(&mut self, mut value: u32) {
        loop {
            let mut b = (value & 0x7f) as u8;
            value >>= 7;
            if value != 0 {
                b |= 0x80;
            }
            self.buffer.push(b);
            if value == 0 {
                return;
            }
        }
    }

    /// Writes a varint-length-prefixed UTF-8 string.
    pub fn write_string(&mut self, value: &str) {
        self.write_unsigned_varint(value.len() as u32);
        self.buffer.extend_from_slice(value.as_bytes());
    }

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
