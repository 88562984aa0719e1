// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Bench code readability over pedantic
#![allow(clippy::cast_possible_truncation)] // Bench parameters
#![allow(clippy::missing_panics_doc)] // Benches panic on failure
#![allow(clippy::items_after_statements)] // Bench helpers

//! Encode/decode benchmarks for the command packet codec.
//!
//! The payload models a realistic server: a few dozen commands, shared
//! enums, a couple of soft enums and constraints.

use std::sync::Arc;

use bedproto::protocol::commands::constants::{ARG_TYPE_INT, ARG_TYPE_RAWTEXT, ARG_TYPE_TARGET};
use bedproto::{
    AvailableCommandsPacket, CommandData, CommandEnum, CommandEnumConstraint, CommandParameter,
    SoftEnum,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn representative_packet() -> AvailableCommandsPacket {
    let command_names = Arc::new(CommandEnum::new(
        "CommandName",
        (0..48).map(|i| format!("command{}", i)).collect(),
    ));
    let modes = Arc::new(CommandEnum::new(
        "GameMode",
        vec![
            "survival".to_owned(),
            "creative".to_owned(),
            "adventure".to_owned(),
            "spectator".to_owned(),
        ],
    ));
    let difficulties = Arc::new(CommandEnum::new(
        "Difficulty",
        vec!["peaceful".to_owned(), "easy".to_owned(), "hard".to_owned()],
    ));

    let command_data = (0..48)
        .map(|i| {
            let enum_param = if i % 2 == 0 {
                CommandParameter::enumerated("mode", Arc::clone(&modes), false)
            } else {
                CommandParameter::enumerated("difficulty", Arc::clone(&difficulties), false)
            };
            CommandData {
                name: format!("command{}", i),
                description: format!("Benchmark command number {}", i),
                flags: 0,
                permission: (i % 4) as u8,
                aliases: None,
                overloads: vec![
                    vec![
                        enum_param,
                        CommandParameter::standard("target", ARG_TYPE_TARGET, true),
                    ],
                    vec![
                        CommandParameter::standard("amount", ARG_TYPE_INT, false),
                        CommandParameter::standard("reason", ARG_TYPE_RAWTEXT, true),
                    ],
                ],
            }
        })
        .collect();

    AvailableCommandsPacket {
        command_data,
        hardcoded_enums: vec![command_names],
        soft_enums: vec![SoftEnum::new(
            "CustomItems",
            (0..16).map(|i| format!("item{}", i)).collect(),
        )],
        enum_constraints: vec![CommandEnumConstraint::new(modes, 1, vec![0x01])],
    }
}

fn bench_commands_codec(c: &mut Criterion) {
    let packet = representative_packet();
    let bytes = packet.encode().expect("benchmark packet should encode");

    let mut group = c.benchmark_group("commands_codec");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("encode", |b| {
        b.iter(|| black_box(&packet).encode().expect("encode"));
    });
    group.bench_function("decode", |b| {
        b.iter(|| AvailableCommandsPacket::decode(black_box(&bytes)).expect("decode"));
    });
    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let bytes = black_box(&packet).encode().expect("encode");
            AvailableCommandsPacket::decode(&bytes).expect("decode")
        });
    });
    group.finish();
}

criterion_group!(benches, bench_commands_codec);
criterion_main!(benches);
