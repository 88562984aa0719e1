// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # bedproto - Bedrock command packet codecs
//!
//! A pure Rust codec for the command-registration packet of the Bedrock
//! game protocol (network version 361). The packet ships the complete
//! command grammar to clients through four interdependent lookup tables;
//! this crate translates between the index-linked wire format and a fully
//! resolved in-memory model, in both directions, with strict validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use bedproto::{AvailableCommandsPacket, CommandData, CommandEnum, CommandParameter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let modes = Arc::new(CommandEnum::new(
//!         "GameMode",
//!         vec!["survival".to_owned(), "creative".to_owned()],
//!     ));
//!     let packet = AvailableCommandsPacket {
//!         command_data: vec![CommandData {
//!             name: "gamemode".to_owned(),
//!             description: "Sets a player's game mode".to_owned(),
//!             flags: 0,
//!             permission: 0,
//!             aliases: None,
//!             overloads: vec![vec![CommandParameter::enumerated("mode", modes, false)]],
//!         }],
//!         ..Default::default()
//!     };
//!
//!     let bytes = packet.encode()?;
//!     let decoded = AvailableCommandsPacket::decode(&bytes)?;
//!     assert_eq!(decoded, packet);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`AvailableCommandsPacket`] | Decoded packet model, entry point for both directions |
//! | [`CommandData`] | One command: identity, aliases and overload grammar |
//! | [`CommandEnum`] | Named value set shared across commands via `Arc` |
//! | [`ParamType`] | Primitive, enum or postfix kind of a parameter |
//! | [`PayloadReader`] / [`PayloadWriter`] | Bounds-checked wire primitives |
//!
//! Decoding is all-or-nothing: any dangling table index, unknown parameter
//! type tag or constraint on a non-member value fails the whole decode.
//! Encoding is deterministic: the same model always yields identical bytes.

pub mod protocol;
pub mod ser;

pub use protocol::commands::{
    arg_type_to_string, AvailableCommandsPacket, CommandData, CommandEnum, CommandEnumConstraint,
    CommandParameter, DecodeError, DecodeResult, EncodeError, EncodeResult, ParamType, SoftEnum,
};
pub use ser::{PayloadReader, PayloadWriter, SerError, SerResult};
