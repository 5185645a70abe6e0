// Copyright 2020 The Jujutsu Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Test-only support for `weft-core`: a reference `ChangeFamily`
//! implementation and an exhaustive interleaving generator. Not published;
//! mirrors the teacher crate's own nested `testutils` package.

use std::sync::Once;

pub mod intention;
pub mod interleaving;

pub use intention::{IntentionAnchors, IntentionChange, IntentionDelta, IntentionFamily};
pub use interleaving::{Action, InterleavingScenarios};

static INIT_TRACING: Once = Once::new();

/// Installs a `tracing_subscriber` once per test binary, filtered by
/// `RUST_LOG`. Safe to call at the top of every test; later calls are
/// no-ops.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
