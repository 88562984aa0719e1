// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Payload encoder for the command-registration packet.
//!
//! Encoding runs in two passes. The pre-pass walks the model in a fixed
//! order (hardcoded enums, then per command: aliases, then overload
//! parameters) and assigns pool and table indices by first occurrence; the
//! write pass emits the six payload sections using those assignments. The
//! same model therefore always produces identical bytes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ser::PayloadWriter;

use super::arg_type;
use super::constants::ALIASES_NONE;
use super::error::{EncodeError, EncodeResult};
use super::types::{
    AvailableCommandsPacket, CommandData, CommandEnum, CommandEnumConstraint, CommandParameter,
    ParamType, SoftEnum,
};

/// First-occurrence index assignments for the payload's lookup tables.
#[derive(Default)]
pub(crate) struct CommandIndexes {
    enum_values: Vec<String>,
    enum_value_indexes: HashMap<String, usize>,
    postfixes: Vec<String>,
    postfix_indexes: HashMap<String, usize>,
    enums: Vec<Arc<CommandEnum>>,
    enum_indexes: HashMap<String, usize>,
}

impl CommandIndexes {
    fn collect(packet: &AvailableCommandsPacket) -> Self {
        let mut indexes = Self::default();
        for enum_data in &packet.hardcoded_enums {
            indexes.register_enum(enum_data);
        }
        for command in &packet.command_data {
            if let Some(aliases) = &command.aliases {
                indexes.register_enum(aliases);
            }
            for overload in &command.overloads {
                for parameter in overload {
                    match &parameter.param_type {
                        ParamType::Enum(enum_data) => indexes.register_enum(enum_data),
                        ParamType::Postfix(postfix) => indexes.register_postfix(postfix),
                        ParamType::Basic(_) => {}
                    }
                }
            }
        }
        indexes
    }

    /// Values are pooled even when the enum name was already registered;
    /// two enums sharing a name collapse onto the first one's table slot.
    fn register_enum(&mut self, enum_data: &Arc<CommandEnum>) {
        if !self.enum_indexes.contains_key(&enum_data.name) {
            self.enum_indexes
                .insert(enum_data.name.clone(), self.enums.len());
            self.enums.push(Arc::clone(enum_data));
        }
        for value in &enum_data.values {
            if !self.enum_value_indexes.contains_key(value) {
                self.enum_value_indexes
                    .insert(value.clone(), self.enum_values.len());
                self.enum_values.push(value.clone());
            }
        }
    }

    fn register_postfix(&mut self, postfix: &str) {
        if !self.postfix_indexes.contains_key(postfix) {
            self.postfix_indexes
                .insert(postfix.to_owned(), self.postfixes.len());
            self.postfixes.push(postfix.to_owned());
        }
    }
}

/// Encodes a packet model into payload bytes.
///
/// # Errors
///
/// `InternalConsistency` when the model references something the pre-pass
/// never registered (typically a constraint on an enum no command uses, or
/// a constraint offset outside its enum), or when a table outgrows the
/// 16-bit tag index field. Nothing is silently downgraded to a `-1` index.
pub fn encode_payload(
    packet: &AvailableCommandsPacket,
    writer: &mut PayloadWriter,
) -> EncodeResult<()> {
    let indexes = CommandIndexes::collect(packet);

    writer.write_unsigned_varint(indexes.enum_values.len() as u32);
    for value in &indexes.enum_values {
        writer.write_string(value);
    }

    writer.write_unsigned_varint(indexes.postfixes.len() as u32);
    for postfix in &indexes.postfixes {
        writer.write_string(postfix);
    }

    writer.write_unsigned_varint(indexes.enums.len() as u32);
    for enum_data in &indexes.enums {
        write_enum(writer, enum_data, &indexes)?;
    }

    writer.write_unsigned_varint(packet.command_data.len() as u32);
    for command in &packet.command_data {
        write_command(writer, command, &indexes)?;
    }

    writer.write_unsigned_varint(packet.soft_enums.len() as u32);
    for soft_enum in &packet.soft_enums {
        write_soft_enum(writer, soft_enum);
    }

    writer.write_unsigned_varint(packet.enum_constraints.len() as u32);
    for constraint in &packet.enum_constraints {
        write_enum_constraint(writer, constraint, &indexes)?;
    }

    log::debug!(
        "[commands] encoded {} commands, {} enums, {} soft enums, {} constraints ({} bytes)",
        packet.command_data.len(),
        indexes.enums.len(),
        packet.soft_enums.len(),
        packet.enum_constraints.len(),
        writer.len()
    );

    Ok(())
}

fn write_enum(
    writer: &mut PayloadWriter,
    enum_data: &CommandEnum,
    indexes: &CommandIndexes,
) -> EncodeResult<()> {
    writer.write_string(&enum_data.name);
    writer.write_unsigned_varint(enum_data.values.len() as u32);
    for value in &enum_data.values {
        let index = indexes
            .enum_value_indexes
            .get(value)
            .copied()
            .ok_or_else(|| EncodeError::InternalConsistency {
                reason: format!(
                    "enum '{}' value '{}' is missing from the value pool",
                    enum_data.name, value
                ),
            })?;
        write_enum_value_index(writer, index, indexes.enum_values.len());
    }
    Ok(())
}

/// Value index width follows the pool size, matching the decode side.
fn write_enum_value_index(writer: &mut PayloadWriter, index: usize, value_count: usize) {
    if value_count < 256 {
        writer.write_u8(index as u8);
    } else if value_count < 65536 {
        writer.write_u16_le(index as u16);
    } else {
        writer.write_u32_le(index as u32);
    }
}

fn write_command(
    writer: &mut PayloadWriter,
    command: &CommandData,
    indexes: &CommandIndexes,
) -> EncodeResult<()> {
    writer.write_string(&command.name);
    writer.write_string(&command.description);
    writer.write_u8(command.flags);
    writer.write_u8(command.permission);

    let aliases_index = match &command.aliases {
        Some(enum_data) => indexes
            .enum_indexes
            .get(&enum_data.name)
            .copied()
            .map(|index| index as i32)
            .ok_or_else(|| EncodeError::InternalConsistency {
                reason: format!(
                    "alias enum '{}' of command '{}' is not registered in the enum table",
                    enum_data.name, command.name
                ),
            })?,
        None => ALIASES_NONE,
    };
    writer.write_i32_le(aliases_index);

    writer.write_unsigned_varint(command.overloads.len() as u32);
    for overload in &command.overloads {
        writer.write_unsigned_varint(overload.len() as u32);
        for parameter in overload {
            write_parameter(writer, parameter, indexes, &command.name)?;
        }
    }

    Ok(())
}

fn write_parameter(
    writer: &mut PayloadWriter,
    parameter: &CommandParameter,
    indexes: &CommandIndexes,
    command_name: &str,
) -> EncodeResult<()> {
    writer.write_string(&parameter.name);
    let tag = arg_type::write_param_type(
        &parameter.param_type,
        &indexes.enum_indexes,
        &indexes.postfix_indexes,
        command_name,
        &parameter.name,
    )?;
    writer.write_u32_le(tag);
    writer.write_bool(parameter.optional);
    writer.write_u8(parameter.flags);
    Ok(())
}

fn write_soft_enum(writer: &mut PayloadWriter, soft_enum: &SoftEnum) {
    writer.write_string(&soft_enum.name);
    writer.write_unsigned_varint(soft_enum.values.len() as u32);
    for value in &soft_enum.values {
        writer.write_string(value);
    }
}

fn write_enum_constraint(
    writer: &mut PayloadWriter,
    constraint: &CommandEnumConstraint,
    indexes: &CommandIndexes,
) -> EncodeResult<()> {
    let value = constraint
        .affected_value()
        .ok_or_else(|| EncodeError::InternalConsistency {
            reason: format!(
                "constraint value offset {} is outside enum '{}' ({} values)",
                constraint.value_offset,
                constraint.enum_data.name,
                constraint.enum_data.values.len()
            ),
        })?;
    let value_index = indexes
        .enum_value_indexes
        .get(value)
        .copied()
        .ok_or_else(|| EncodeError::InternalConsistency {
            reason: format!("constraint value '{}' is missing from the value pool", value),
        })?;
    let enum_index = indexes
        .enum_indexes
        .get(&constraint.enum_data.name)
        .copied()
        .ok_or_else(|| EncodeError::InternalConsistency {
            reason: format!(
                "constraint enum '{}' is not registered in the enum table",
                constraint.enum_data.name
            ),
        })?;

    writer.write_i32_le(value_index as i32);
    writer.write_i32_le(enum_index as i32);
    writer.write_unsigned_varint(constraint.constraint_ids.len() as u32);
    for id in &constraint.constraint_ids {
        writer.write_u8(*id);
    }
    Ok(())
}
