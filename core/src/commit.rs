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

use crate::ids::{SeqNumber, SessionId};

/// An immutable, sequenced edit: the unit the central sequencer hands out a
/// total order over.
///
/// `ref_number` is the largest `seq_number` the author had observed at the
/// time of authoring; it defines the concurrency frontier used by the
/// rebase engine (see [`crate::edit_manager::EditManager::add_sequenced_change`]).
#[derive(Clone, Debug)]
pub struct Commit<C> {
    pub session_id: SessionId,
    pub seq_number: SeqNumber,
    pub ref_number: SeqNumber,
    pub changeset: C,
}

impl<C> Commit<C> {
    pub fn new(
        session_id: SessionId,
        seq_number: SeqNumber,
        ref_number: SeqNumber,
        changeset: C,
    ) -> Self {
        Self {
            session_id,
            seq_number,
            ref_number,
            changeset,
        }
    }

    /// Returns a copy of this commit with its changeset replaced, keeping
    /// the session/seq/ref triple. Used by the rebase engine to record the
    /// transposed form of a peer commit in the trunk (step 3 of the peer
    /// rebase algorithm) without touching its identity.
    pub(crate) fn with_changeset(self, changeset: C) -> Self {
        Self { changeset, ..self }
    }
}
