// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Payload decoder for the command-registration packet.
//!
//! The payload carries six length-prefixed sections in a fixed order: the
//! enum value pool, the postfix pool, the enum table, the command table,
//! soft enums and enum constraints. The pools and the enum table exist only
//! on the wire; decoding resolves every cross-reference so the returned
//! model holds direct handles instead of indices.

use std::sync::Arc;

use crate::ser::PayloadReader;

use super::arg_type;
use super::constants::{ALIASES_NONE, HARDCODED_ENUM_NAMES};
use super::error::{DecodeError, DecodeResult};
use super::types::{
    AvailableCommandsPacket, CommandData, CommandEnum, CommandEnumConstraint, CommandParameter,
    SoftEnum,
};

/// Decodes a command-registration payload.
///
/// # Arguments
///
/// * `reader` - cursor positioned at the start of the payload (after the
///   outer packet header, which is handled by the framing layer)
///
/// # Returns
///
/// The fully resolved packet model.
///
/// # Errors
///
/// Fails on the first malformed field (truncation, dangling index, unknown
/// type tag, constraint on a non-member value); no partial model is
/// produced. The one tolerated irregularity is a command whose alias index
/// resolves to nothing, which decodes as "no aliases".
pub fn decode_payload(reader: &mut PayloadReader<'_>) -> DecodeResult<AvailableCommandsPacket> {
    let value_count = reader.read_unsigned_varint()?;
    let mut enum_values = Vec::new();
    for _ in 0..value_count {
        enum_values.push(reader.read_string()?);
    }

    let postfix_count = reader.read_unsigned_varint()?;
    let mut postfixes = Vec::new();
    for _ in 0..postfix_count {
        postfixes.push(reader.read_string()?);
    }

    let enum_count = reader.read_unsigned_varint()?;
    let mut enums = Vec::new();
    let mut hardcoded_enums = Vec::new();
    for _ in 0..enum_count {
        let enum_data = Arc::new(read_enum(reader, &enum_values)?);
        if HARDCODED_ENUM_NAMES.contains(&enum_data.name.as_str()) {
            hardcoded_enums.push(Arc::clone(&enum_data));
        }
        enums.push(enum_data);
    }

    let command_count = reader.read_unsigned_varint()?;
    let mut command_data = Vec::new();
    for _ in 0..command_count {
        command_data.push(read_command(reader, &enums, &postfixes)?);
    }

    let soft_enum_count = reader.read_unsigned_varint()?;
    let mut soft_enums = Vec::new();
    for _ in 0..soft_enum_count {
        soft_enums.push(read_soft_enum(reader)?);
    }

    let constraint_count = reader.read_unsigned_varint()?;
    let mut enum_constraints = Vec::new();
    for _ in 0..constraint_count {
        enum_constraints.push(read_enum_constraint(reader, &enums, &enum_values)?);
    }

    log::debug!(
        "[commands] decoded {} commands, {} enums ({} hardcoded), {} soft enums, {} constraints",
        command_data.len(),
        enums.len(),
        hardcoded_enums.len(),
        soft_enums.len(),
        enum_constraints.len()
    );

    Ok(AvailableCommandsPacket {
        command_data,
        hardcoded_enums,
        soft_enums,
        enum_constraints,
    })
}

/// Reads one enum table record, resolving value indices through the pool.
fn read_enum(reader: &mut PayloadReader<'_>, enum_values: &[String]) -> DecodeResult<CommandEnum> {
    let name = reader.read_string()?;
    let value_count = reader.read_unsigned_varint()?;
    let mut values = Vec::new();
    for _ in 0..value_count {
        let index = read_enum_value_index(reader, enum_values.len())?;
        let value = enum_values
            .get(index)
            .ok_or_else(|| DecodeError::MalformedIndex {
                table: "enum value pool",
                index: index as i64,
                len: enum_values.len(),
                context: format!("deserializing enum '{}'", name),
            })?;
        values.push(value.clone());
    }
    Ok(CommandEnum { name, values })
}

/// Value index width follows the pool size: 1 byte below 256 entries,
/// 2 bytes below 65536, 4 bytes from there on.
fn read_enum_value_index(
    reader: &mut PayloadReader<'_>,
    value_count: usize,
) -> DecodeResult<usize> {
    if value_count < 256 {
        Ok(usize::from(reader.read_u8()?))
    } else if value_count < 65536 {
        Ok(usize::from(reader.read_u16_le()?))
    } else {
        Ok(reader.read_u32_le()? as usize)
    }
}

fn read_command(
    reader: &mut PayloadReader<'_>,
    enums: &[Arc<CommandEnum>],
    postfixes: &[String],
) -> DecodeResult<CommandData> {
    let name = reader.read_string()?;
    let description = reader.read_string()?;
    let flags = reader.read_u8()?;
    let permission = reader.read_u8()?;

    // An alias index that resolves to nothing downgrades to "no aliases";
    // this asymmetry with every other index is part of the wire contract.
    let aliases_index = reader.read_i32_le()?;
    let aliases = usize::try_from(aliases_index)
        .ok()
        .and_then(|index| enums.get(index))
        .cloned();
    if aliases.is_none() && aliases_index != ALIASES_NONE {
        log::debug!(
            "[commands] command '{}' references alias enum index {} outside the enum table",
            name,
            aliases_index
        );
    }

    let overload_count = reader.read_unsigned_varint()?;
    let mut overloads = Vec::new();
    for _ in 0..overload_count {
        let param_count = reader.read_unsigned_varint()?;
        let mut parameters = Vec::new();
        for _ in 0..param_count {
            parameters.push(read_parameter(reader, enums, postfixes, &name)?);
        }
        overloads.push(parameters);
    }

    Ok(CommandData {
        name,
        description,
        flags,
        permission,
        aliases,
        overloads,
    })
}

fn read_parameter(
    reader: &mut PayloadReader<'_>,
    enums: &[Arc<CommandEnum>],
    postfixes: &[String],
    command_name: &str,
) -> DecodeResult<CommandParameter> {
    let name = reader.read_string()?;
    let tag = reader.read_u32_le()?;
    let optional = reader.read_bool()?;
    let flags = reader.read_u8()?;
    let param_type = arg_type::read_param_type(tag, enums, postfixes, command_name, &name)?;
    Ok(CommandParameter {
        name,
        param_type,
        optional,
        flags,
    })
}

/// Soft enum values travel inline, never through the value pool.
fn read_soft_enum(reader: &mut PayloadReader<'_>) -> DecodeResult<SoftEnum> {
    let name = reader.read_string()?;
    let value_count = reader.read_unsigned_varint()?;
    let mut values = Vec::new();
    for _ in 0..value_count {
        values.push(reader.read_string()?);
    }
    Ok(SoftEnum { name, values })
}

/// Constraints reference their value through the pool rather than by offset
/// inside the enum, so membership has to be re-derived by searching the
/// enum's values.
fn read_enum_constraint(
    reader: &mut PayloadReader<'_>,
    enums: &[Arc<CommandEnum>],
    enum_values: &[String],
) -> DecodeResult<CommandEnumConstraint> {
    let value_index = reader.read_i32_le()?;
    let value = usize::try_from(value_index)
        .ok()
        .and_then(|index| enum_values.get(index))
        .ok_or_else(|| DecodeError::MalformedIndex {
            table: "enum value pool",
            index: i64::from(value_index),
            len: enum_values.len(),
            context: "deserializing enum constraint".into(),
        })?;

    let enum_index = reader.read_i32_le()?;
    let enum_data = usize::try_from(enum_index)
        .ok()
        .and_then(|index| enums.get(index))
        .ok_or_else(|| DecodeError::MalformedIndex {
            table: "enum table",
            index: i64::from(enum_index),
            len: enums.len(),
            context: "deserializing enum constraint".into(),
        })?;

    let value_offset = enum_data
        .values
        .iter()
        .position(|v| v == value)
        .ok_or_else(|| DecodeError::EnumMembershipViolation {
            value: value.clone(),
            enum_name: enum_data.name.clone(),
        })?;

    let constraint_id_count = reader.read_unsigned_varint()?;
    let mut constraint_ids = Vec::new();
    for _ in 0..constraint_id_count {
        constraint_ids.push(reader.read_u8()?);
    }

    Ok(CommandEnumConstraint {
        enum_data: Arc::clone(enum_data),
        value_offset,
        constraint_ids,
    })
}
