// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Command-registration packet codec.
//!
//! The packet tells a client every command it may run: names, aliases,
//! permissions and the full grammar of every overload. To keep the payload
//! small, repeated data lives in shared lookup tables and everything else
//! references it by index:
//!
//! ```text
//! +------------------+     index      +--------------+
//! | enum value pool  | <------------- |  enum table  |
//! +------------------+                +--------------+
//!         ^                              ^        ^
//!         | index                 index  |        |  index
//! +------------------+           +-----------+  +------------------+
//! | enum constraints | --------> | parameter |  | command aliases  |
//! +------------------+           +-----------+  +------------------+
//! ```
//!
//! Decoding resolves every index into a direct
//! [`Arc`](std::sync::Arc) handle; encoding reassigns indices
//! deterministically by first occurrence. Soft enums sit outside the
//! tables entirely and carry their values inline.

pub mod constants;
pub mod error;
pub mod types;

mod arg_type;
mod build;
mod parse;

pub use arg_type::arg_type_to_string;
pub use build::encode_payload;
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
pub use parse::decode_payload;
pub use types::{
    AvailableCommandsPacket, CommandData, CommandEnum, CommandEnumConstraint, CommandParameter,
    ParamType, SoftEnum,
};

use crate::ser::{PayloadReader, PayloadWriter};

impl AvailableCommandsPacket {
    /// Decodes a payload from raw bytes.
    ///
    /// Trailing bytes after the last section are left to the framing layer;
    /// use [`decode_payload`] directly to inspect the cursor afterwards.
    pub fn decode(bytes: &[u8]) -> DecodeResult<Self> {
        let mut reader = PayloadReader::new(bytes);
        parse::decode_payload(&mut reader)
    }

    /// Encodes the packet into payload bytes.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let mut writer = PayloadWriter::new();
        build::encode_payload(self, &mut writer)?;
        Ok(writer.into_inner())
    }
}
