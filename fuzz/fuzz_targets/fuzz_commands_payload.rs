// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use bedproto::AvailableCommandsPacket;

fuzz_target!(|data: &[u8]| {
    // Fuzz command-registration payload decoder
    let _ = AvailableCommandsPacket::decode(data);
});
