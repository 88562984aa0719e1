// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protocol-wide constants for the targeted game network version.
//!
//! Centralizes the protocol version and packet IDs so version bumps touch
//! one place instead of every codec.

/// Network protocol version this crate's codecs target (game release 1.12 line).
pub const PROTOCOL_VERSION: u32 = 361;

/// Packet ID of the command-registration packet.
///
/// The outer framing layer routes packets by this ID; the codecs here only
/// consume the payload that follows it.
pub const AVAILABLE_COMMANDS_PACKET_ID: u32 = 0x4c;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_constants_match_wire_values() {
        assert_eq!(PROTOCOL_VERSION, 361);
        assert_eq!(AVAILABLE_COMMANDS_PACKET_ID, 76);
    }
}
