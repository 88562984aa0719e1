// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire constants for the command-registration packet.
//!
//! Parameter types travel as a single little-endian u32 tag: the high bits
//! carry flags selecting the kind of parameter, the low 16 bits carry either
//! a primitive type code or an index into one of the packet's lookup tables.

// ============================================================================
// PARAMETER TYPE TAG FLAGS
// ============================================================================

/// Set on every parameter tag except postfixed ones.
///
/// Primitive tags are `ARG_FLAG_VALID | (type code)`.
pub const ARG_FLAG_VALID: u32 = 0x100000;

/// The low 16 bits index the packet's enum table.
///
/// Enum tags are `ARG_FLAG_ENUM | ARG_FLAG_VALID | (enum index)`.
pub const ARG_FLAG_ENUM: u32 = 0x200000;

/// The low 16 bits index the packet's postfix pool.
///
/// Postfix tags are `ARG_FLAG_POSTFIX | (postfix index)`; `ARG_FLAG_VALID`
/// is NOT set on these.
pub const ARG_FLAG_POSTFIX: u32 = 0x1000000;

/// Mask extracting the type code or table index from a parameter tag.
pub const ARG_INDEX_MASK: u32 = 0xffff;

// ============================================================================
// PRIMITIVE TYPE CODES (low 16 bits when only ARG_FLAG_VALID is set)
// ============================================================================

pub const ARG_TYPE_INT: u16 = 0x01;
pub const ARG_TYPE_FLOAT: u16 = 0x02;
pub const ARG_TYPE_VALUE: u16 = 0x03;
pub const ARG_TYPE_WILDCARD_INT: u16 = 0x04;
pub const ARG_TYPE_OPERATOR: u16 = 0x05;
pub const ARG_TYPE_TARGET: u16 = 0x06;
pub const ARG_TYPE_FILEPATH: u16 = 0x0e;
pub const ARG_TYPE_STRING: u16 = 0x1b;
pub const ARG_TYPE_POSITION: u16 = 0x1d;
pub const ARG_TYPE_MESSAGE: u16 = 0x20;
pub const ARG_TYPE_RAWTEXT: u16 = 0x22;
pub const ARG_TYPE_JSON: u16 = 0x25;
pub const ARG_TYPE_COMMAND: u16 = 0x2c;

// ============================================================================
// MISC WIRE VALUES
// ============================================================================

/// Alias enum index written for commands without aliases.
pub const ALIASES_NONE: i32 = -1;

/// Enum names the client treats specially; enums carrying one of these
/// names are collected separately during decode and registered first
/// during encode.
pub const HARDCODED_ENUM_NAMES: &[&str] = &["CommandName"];
