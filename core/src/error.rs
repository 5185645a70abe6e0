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

use thiserror::Error;

use crate::ids::{SeqNumber, SessionId};

/// Fatal failures raised by the rebase engine.
///
/// Every variant indicates either a caller bug or a violation of the
/// sequencer's total-order contract. There is no retry path: a session that
/// produces one of these should be discarded and rebuilt from a fresh
/// snapshot, not continued.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditManagerError {
    /// `add_local_change` was called before `set_local_session_id`.
    #[error("add_local_change called before set_local_session_id")]
    SessionNotSet,

    /// A sequenced commit did not carry the expected next sequence number.
    #[error("sequenced commit out of order: expected seq_number {expected}, got {actual}")]
    OutOfOrderCommit {
        expected: SeqNumber,
        actual: SeqNumber,
    },

    /// An own commit was sequenced while the local branch was empty, so
    /// there was nothing to acknowledge.
    #[error(
        "own commit from session {session:?} at seq_number {seq_number} arrived but the local \
         branch is empty"
    )]
    EmptyLocalBranchForOwnCommit {
        session: SessionId,
        seq_number: SeqNumber,
    },

    /// A non-empty local branch exists even though no local session id has
    /// ever been set. The public API cannot produce this state; it is
    /// guarded against defensively (see design notes on the corresponding
    /// open question).
    #[error("local branch is non-empty but no local session id has been set")]
    LocalBranchWithoutSession,
}
