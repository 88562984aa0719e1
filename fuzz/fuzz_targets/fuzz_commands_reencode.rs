// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use bedproto::AvailableCommandsPacket;

fuzz_target!(|data: &[u8]| {
    // Decode, then re-encode. The first generation is allowed to fail:
    // a decoded packet may constrain an enum no command references, and
    // duplicate enum names collapse onto one table slot, which can strand
    // pooled values or retarget a constraint. Once a packet survives
    // decode -> encode -> decode, its table references are unique by name
    // and everything after that must be stable.
    let Ok(packet) = AvailableCommandsPacket::decode(data) else {
        return;
    };
    let Ok(bytes) = packet.encode() else {
        return;
    };
    let Ok(settled) = AvailableCommandsPacket::decode(&bytes) else {
        return;
    };

    let stable = settled.encode().expect("settled packet must encode");
    let decoded = AvailableCommandsPacket::decode(&stable).expect("stable bytes must decode");
    let reencoded = decoded.encode().expect("stable packet must re-encode");
    assert_eq!(stable, reencoded, "encode is not stable");
});
