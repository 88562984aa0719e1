// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory model of the command-registration packet.
//!
//! The wire format stores enums, enum values and postfixes in shared lookup
//! tables and cross-references them by index. The model resolves every
//! index back to its referent: parameters and aliases hold
//! `Arc<CommandEnum>` handles, so an enum shared by several commands is one
//! allocation referenced from each use site, mirroring the table sharing on
//! the wire.

use std::sync::Arc;

/// A named, fixed set of string values selectable for a command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnum {
    pub name: String,
    pub values: Vec<String>,
}

impl CommandEnum {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A server-updatable enum; values travel inline instead of through the
/// packet's value pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftEnum {
    pub name: String,
    pub values: Vec<String>,
}

impl SoftEnum {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Resolved parameter type: exactly one of primitive, enum or postfix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    /// Primitive type code (`ARG_TYPE_*`), carried in the low 16 tag bits.
    Basic(u16),
    /// Value must be a member of the referenced enum.
    Enum(Arc<CommandEnum>),
    /// Numeric argument followed by a literal postfix string (e.g. "5L").
    Postfix(String),
}

/// One argument slot inside a command overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParameter {
    pub name: String,
    pub param_type: ParamType,
    pub optional: bool,
    pub flags: u8,
}

impl CommandParameter {
    pub fn standard(name: impl Into<String>, type_code: u16, optional: bool) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Basic(type_code),
            optional,
            flags: 0,
        }
    }

    pub fn enumerated(name: impl Into<String>, enum_data: Arc<CommandEnum>, optional: bool) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Enum(enum_data),
            optional,
            flags: 0,
        }
    }

    pub fn postfixed(name: impl Into<String>, postfix: impl Into<String>, optional: bool) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Postfix(postfix.into()),
            optional,
            flags: 0,
        }
    }
}

/// A registered command: identity, permission byte and its overloads.
///
/// Each overload is an ordered parameter list; the client picks the overload
/// matching what the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandData {
    pub name: String,
    pub description: String,
    pub flags: u8,
    pub permission: u8,
    pub aliases: Option<Arc<CommandEnum>>,
    pub overloads: Vec<Vec<CommandParameter>>,
}

/// Restriction attached to a single value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnumConstraint {
    pub enum_data: Arc<CommandEnum>,
    pub value_offset: usize,
    pub constraint_ids: Vec<u8>,
}

impl CommandEnumConstraint {
    pub fn new(enum_data: Arc<CommandEnum>, value_offset: usize, constraint_ids: Vec<u8>) -> Self {
        debug_assert!(
            value_offset < enum_data.values.len(),
            "value offset {} outside enum '{}'",
            value_offset,
            enum_data.name
        );
        Self {
            enum_data,
            value_offset,
            constraint_ids,
        }
    }

    /// The enum value this constraint applies to, `None` if the offset is
    /// out of range for the enum.
    pub fn affected_value(&self) -> Option<&str> {
        self.enum_data.values.get(self.value_offset).map(String::as_str)
    }
}

/// Decoded command-registration packet payload.
///
/// `hardcoded_enums` holds the enums whose names appear in
/// `HARDCODED_ENUM_NAMES`; they are not referenced by any command but must
/// survive a decode/encode cycle because the client resolves them by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableCommandsPacket {
    pub command_data: Vec<CommandData>,
    pub hardcoded_enums: Vec<Arc<CommandEnum>>,
    pub soft_enums: Vec<SoftEnum>,
    pub enum_constraints: Vec<CommandEnumConstraint>,
}
