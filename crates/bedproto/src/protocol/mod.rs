// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Packet codecs for the Bedrock game protocol.

pub mod commands;
pub mod constants;
