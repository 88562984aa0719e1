// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Parameter type tag codec.
//!
//! A tag is classified by its flags in a fixed order: `ARG_FLAG_ENUM` wins,
//! then `ARG_FLAG_POSTFIX`, then a bare `ARG_FLAG_VALID` primitive. A tag
//! with none of the three (such as `0x00000000`) has no meaning and fails
//! the decode. Both directions live here so the bit layout cannot drift
//! between decoder and encoder.

use std::collections::HashMap;
use std::sync::Arc;

use super::constants::*;
use super::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use super::types::{CommandEnum, ParamType};

/// Classifies a raw type tag against the packet's lookup tables.
pub(crate) fn read_param_type(
    tag: u32,
    enums: &[Arc<CommandEnum>],
    postfixes: &[String],
    command: &str,
    parameter: &str,
) -> DecodeResult<ParamType> {
    let index = (tag & ARG_INDEX_MASK) as usize;
    if tag & ARG_FLAG_ENUM != 0 {
        let enum_data = enums.get(index).ok_or_else(|| DecodeError::MalformedIndex {
            table: "enum table",
            index: index as i64,
            len: enums.len(),
            context: format!("deserializing {} parameter {}", command, parameter),
        })?;
        Ok(ParamType::Enum(Arc::clone(enum_data)))
    } else if tag & ARG_FLAG_POSTFIX != 0 {
        let postfix = postfixes.get(index).ok_or_else(|| DecodeError::MalformedIndex {
            table: "postfix pool",
            index: index as i64,
            len: postfixes.len(),
            context: format!("deserializing {} parameter {}", command, parameter),
        })?;
        Ok(ParamType::Postfix(postfix.clone()))
    } else if tag & ARG_FLAG_VALID != 0 {
        Ok(ParamType::Basic((tag & ARG_INDEX_MASK) as u16))
    } else {
        Err(DecodeError::InvalidTypeTag {
            command: command.to_owned(),
            parameter: parameter.to_owned(),
            tag,
        })
    }
}

/// Builds the wire tag for a resolved parameter type.
///
/// Table lookups must have been registered by the encode pre-pass; a missing
/// entry or an index beyond the 16-bit tag field is an internal consistency
/// failure rather than a silently wrong tag.
pub(crate) fn write_param_type(
    param_type: &ParamType,
    enum_indexes: &HashMap<String, usize>,
    postfix_indexes: &HashMap<String, usize>,
    command: &str,
    parameter: &str,
) -> EncodeResult<u32> {
    match param_type {
        ParamType::Enum(enum_data) => {
            let index = *enum_indexes.get(&enum_data.name).ok_or_else(|| {
                EncodeError::InternalConsistency {
                    reason: format!(
                        "enum '{}' for parameter '{}' of command '{}' is not registered in the enum table",
                        enum_data.name, parameter, command
                    ),
                }
            })?;
            Ok(ARG_FLAG_ENUM | ARG_FLAG_VALID | tag_index(index, "enum table")?)
        }
        ParamType::Postfix(postfix) => {
            let index = *postfix_indexes.get(postfix).ok_or_else(|| {
                EncodeError::InternalConsistency {
                    reason: format!(
                        "postfix '{}' for parameter '{}' of command '{}' is not registered in the postfix pool",
                        postfix, parameter, command
                    ),
                }
            })?;
            Ok(ARG_FLAG_POSTFIX | tag_index(index, "postfix pool")?)
        }
        ParamType::Basic(type_code) => Ok(ARG_FLAG_VALID | u32::from(*type_code)),
    }
}

/// Narrows a table index into the 16-bit tag field.
fn tag_index(index: usize, table: &str) -> EncodeResult<u32> {
    if index > ARG_INDEX_MASK as usize {
        return Err(EncodeError::InternalConsistency {
            reason: format!("{} index {} exceeds the 16-bit tag field", table, index),
        });
    }
    Ok(index as u32)
}

/// Renders a raw type tag for diagnostics.
///
/// Never fails: unrecognized codes and out-of-range postfix indices render
/// as placeholders instead of aborting whatever is being debugged.
pub fn arg_type_to_string(tag: u32, postfixes: &[String]) -> String {
    if tag & ARG_FLAG_VALID != 0 {
        if tag & ARG_FLAG_ENUM != 0 {
            return format!("stringenum ({})", tag & ARG_INDEX_MASK);
        }
        match (tag & ARG_INDEX_MASK) as u16 {
            ARG_TYPE_INT => "int".to_owned(),
            ARG_TYPE_FLOAT => "float".to_owned(),
            ARG_TYPE_VALUE => "mixed".to_owned(),
            ARG_TYPE_TARGET => "target".to_owned(),
            ARG_TYPE_STRING => "string".to_owned(),
            ARG_TYPE_POSITION => "xyz".to_owned(),
            ARG_TYPE_MESSAGE => "message".to_owned(),
            ARG_TYPE_RAWTEXT => "text".to_owned(),
            ARG_TYPE_JSON => "json".to_owned(),
            ARG_TYPE_COMMAND => "command".to_owned(),
            _ => format!("unknown ({})", tag),
        }
    } else if tag & ARG_FLAG_POSTFIX != 0 {
        let index = (tag & ARG_INDEX_MASK) as usize;
        match postfixes.get(index) {
            Some(postfix) => format!("int (postfix {})", postfix),
            None => format!("int (postfix #{})", index),
        }
    } else {
        format!("unknown arg type 0x{:x}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enums() -> Vec<Arc<CommandEnum>> {
        vec![
            Arc::new(CommandEnum::new("Bool", vec!["true".to_owned(), "false".to_owned()])),
            Arc::new(CommandEnum::new("Mode", vec!["easy".to_owned(), "hard".to_owned()])),
        ]
    }

    #[test]
    fn test_enum_flag_wins_over_other_flags() {
        let enums = sample_enums();
        let postfixes = vec!["L".to_owned()];
        let tag = ARG_FLAG_ENUM | ARG_FLAG_POSTFIX | ARG_FLAG_VALID | 1;
        let param_type =
            read_param_type(tag, &enums, &postfixes, "cmd", "p").expect("enum should win");
        match param_type {
            ParamType::Enum(e) => assert!(Arc::ptr_eq(&e, &enums[1]), "should share the table entry"),
            other => panic!("expected enum param type, got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_tag_resolves_pool_entry() {
        let enums = sample_enums();
        let postfixes = vec!["L".to_owned(), "x".to_owned()];
        let param_type = read_param_type(ARG_FLAG_POSTFIX | 1, &enums, &postfixes, "cmd", "p")
            .expect("postfix should resolve");
        assert_eq!(param_type, ParamType::Postfix("x".to_owned()));
    }

    #[test]
    fn test_valid_tag_keeps_primitive_code() {
        let param_type = read_param_type(ARG_FLAG_VALID | u32::from(ARG_TYPE_RAWTEXT), &[], &[], "say", "message")
            .expect("primitive should decode");
        assert_eq!(param_type, ParamType::Basic(ARG_TYPE_RAWTEXT));

        // unknown primitive codes are carried through, not rejected
        let param_type = read_param_type(ARG_FLAG_VALID | 0x99, &[], &[], "say", "message")
            .expect("unknown primitive code is tolerated");
        assert_eq!(param_type, ParamType::Basic(0x99));
    }

    #[test]
    fn test_zero_tag_is_rejected() {
        let err = read_param_type(0, &[], &[], "give", "amount").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidTypeTag {
                command: "give".into(),
                parameter: "amount".into(),
                tag: 0,
            }
        );
    }

    #[test]
    fn test_enum_index_out_of_range_is_malformed() {
        let enums = sample_enums();
        let err = read_param_type(ARG_FLAG_ENUM | ARG_FLAG_VALID | 2, &enums, &[], "cmd", "p")
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MalformedIndex {
                table: "enum table",
                index: 2,
                len: 2,
                context: "deserializing cmd parameter p".into(),
            }
        );
    }

    #[test]
    fn test_write_requires_registered_enum() {
        let enum_data = Arc::new(CommandEnum::new("Mode", vec!["easy".to_owned()]));
        let err = write_param_type(
            &ParamType::Enum(enum_data),
            &HashMap::new(),
            &HashMap::new(),
            "gamemode",
            "mode",
        )
        .unwrap_err();
        let EncodeError::InternalConsistency { reason } = err;
        assert!(reason.contains("enum 'Mode'"), "reason: {}", reason);
    }

    #[test]
    fn test_write_rejects_index_beyond_tag_field() {
        let mut postfix_indexes = HashMap::new();
        postfix_indexes.insert("L".to_owned(), 0x10000);
        let err = write_param_type(
            &ParamType::Postfix("L".to_owned()),
            &HashMap::new(),
            &postfix_indexes,
            "xp",
            "amount",
        )
        .unwrap_err();
        let EncodeError::InternalConsistency { reason } = err;
        assert!(reason.contains("16-bit"), "reason: {}", reason);
    }

    #[test]
    fn test_tag_roundtrip_across_kinds() {
        let enums = sample_enums();
        let postfixes = vec!["L".to_owned()];
        let mut enum_indexes = HashMap::new();
        enum_indexes.insert("Bool".to_owned(), 0);
        enum_indexes.insert("Mode".to_owned(), 1);
        let mut postfix_indexes = HashMap::new();
        postfix_indexes.insert("L".to_owned(), 0);

        let cases = vec![
            ParamType::Basic(ARG_TYPE_INT),
            ParamType::Enum(Arc::clone(&enums[1])),
            ParamType::Postfix("L".to_owned()),
        ];
        for param_type in cases {
            let tag = write_param_type(&param_type, &enum_indexes, &postfix_indexes, "cmd", "p")
                .expect("registered types should encode");
            let back = read_param_type(tag, &enums, &postfixes, "cmd", "p")
                .expect("encoded tag should decode");
            assert_eq!(back, param_type, "tag 0x{:x}", tag);
        }
    }

    #[test]
    fn test_arg_type_to_string_renders_known_shapes() {
        let postfixes = vec!["L".to_owned()];
        assert_eq!(
            arg_type_to_string(ARG_FLAG_VALID | u32::from(ARG_TYPE_INT), &postfixes),
            "int"
        );
        assert_eq!(
            arg_type_to_string(ARG_FLAG_ENUM | ARG_FLAG_VALID | 3, &postfixes),
            "stringenum (3)"
        );
        assert_eq!(
            arg_type_to_string(ARG_FLAG_POSTFIX, &postfixes),
            "int (postfix L)"
        );
        assert_eq!(arg_type_to_string(0, &postfixes), "unknown arg type 0x0");
    }
}
