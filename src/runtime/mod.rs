// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hosts for the interactive search session.
//!
//! - `stream`: a tokio task that owns the debounce timer (native, CLI)
//! - `wasm`: browser bindings where JavaScript owns the timer

#[cfg(feature = "async")]
pub mod stream;

#[cfg(feature = "wasm")]
pub mod wasm;
