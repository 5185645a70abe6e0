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

//! The rebase engine: reconciles a locally produced, not-yet-sequenced
//! branch with a server-sequenced trunk, emitting the delta the host must
//! apply to its view after every local or network event.

use tracing::{debug, error, instrument, trace};

use crate::change_family::ChangeFamily;
use crate::commit::Commit;
use crate::error::EditManagerError;
use crate::ids::{SeqNumber, SessionId};
use crate::local_branch::{LocalBranch, LocalEntry};
use crate::trunk::Trunk;

/// Single-threaded, synchronous collaborative-editing core.
///
/// Construct one per document replica, call [`EditManager::set_local_session_id`]
/// once, then feed it local edits via [`EditManager::add_local_change`] and
/// server-sequenced commits via [`EditManager::add_sequenced_change`] as they
/// arrive. Every call returns the delta the host must apply to its view;
/// there is no other output channel.
pub struct EditManager<F: ChangeFamily> {
    family: F,
    local_session_id: Option<SessionId>,
    trunk: Trunk<F::Change>,
    local: LocalBranch<F::Change>,
    anchors: F::Anchors,
}

impl<F: ChangeFamily> EditManager<F> {
    /// Creates an empty manager bound to `family`, taking ownership of the
    /// host's `anchors` handle. `set_local_session_id` must still be called
    /// before any `add_local_change`.
    pub fn new(family: F, anchors: F::Anchors) -> Self {
        Self {
            family,
            local_session_id: None,
            trunk: Trunk::new(),
            local: LocalBranch::new(),
            anchors,
        }
    }

    /// Idempotently records the local session identity. Calling this again
    /// with the same or a different id after it has already been set has no
    /// effect: the first call wins.
    pub fn set_local_session_id(&mut self, id: SessionId) {
        if self.local_session_id.is_none() {
            self.local_session_id = Some(id);
        }
    }

    pub fn local_session_id(&self) -> Option<&SessionId> {
        self.local_session_id.as_ref()
    }

    /// Read-only view of the sequenced commits, in trunk order.
    pub fn trunk(&self) -> &Trunk<F::Change> {
        &self.trunk
    }

    /// Read-only view of the currently in-flight local changesets, in
    /// submission order.
    pub fn local_changes(&self) -> impl Iterator<Item = &F::Change> {
        self.local.changes()
    }

    /// The anchor set this manager was constructed with. Safe to read
    /// between ingestion calls; never read concurrently with one, since
    /// single-threaded cooperative use is the only supported model.
    pub fn anchors(&self) -> &F::Anchors {
        &self.anchors
    }

    pub fn anchors_mut(&mut self) -> &mut F::Anchors {
        &mut self.anchors
    }

    /// Submits a locally produced edit. The changeset's intended input
    /// context is the current local tip (trunk tail composed with every
    /// prior local entry); the engine does not check this, since it cannot
    /// inspect `change` — a mismatched context is a `ChangeFamily`
    /// invariant violation on the host's part, not something this crate
    /// detects.
    #[instrument(skip(self, change))]
    pub fn add_local_change(&mut self, change: F::Change) -> Result<F::Delta, EditManagerError> {
        if self.local_session_id.is_none() {
            error!("add_local_change called before set_local_session_id");
            return Err(EditManagerError::SessionNotSet);
        }
        let ref_seq = self.trunk.tail_seq();
        let delta = self.family.into_delta(&change);
        self.local.push(LocalEntry { change, ref_seq });
        trace!(local_branch_len = self.local.len(), "appended local change");
        Ok(delta)
    }

    /// Ingests a commit the central sequencer has assigned a position to.
    /// Must be called in strictly increasing `seq_number` order; gaps are a
    /// `ProtocolViolation`.
    #[instrument(skip(self, commit), fields(seq_number = ?commit.seq_number, session = ?commit.session_id))]
    pub fn add_sequenced_change(
        &mut self,
        commit: Commit<F::Change>,
    ) -> Result<F::Delta, EditManagerError> {
        let expected = self.trunk.tail_seq().next();
        if commit.seq_number != expected {
            error!(
                expected = ?expected,
                actual = ?commit.seq_number,
                "sequenced commit arrived out of order"
            );
            return Err(EditManagerError::OutOfOrderCommit {
                expected,
                actual: commit.seq_number,
            });
        }

        if self.local_session_id.is_none() && !self.local.is_empty() {
            error!("local branch is non-empty but no local session id has ever been set");
            return Err(EditManagerError::LocalBranchWithoutSession);
        }

        let is_own = self
            .local_session_id
            .as_ref()
            .is_some_and(|id| *id == commit.session_id);

        let result = if is_own {
            self.ack_own_commit(commit)
        } else {
            self.rebase_peer_commit(commit)
        };

        #[cfg(debug_assertions)]
        self.trunk.debug_assert_contiguous();

        result
    }

    /// Own commit: the head of the local branch is, by protocol, exactly
    /// the changeset being acknowledged. No anchor update; the document
    /// already reflects this content from the moment it was authored
    /// locally.
    ///
    /// The trunk entry is recorded with the local branch's *current* value
    /// for this edit, not the raw network payload: every peer commit that
    /// was sequenced ahead of this one has already rebased the head of `L`
    /// forward (see the loop in `rebase_peer_commit`), by the same
    /// sequential-composition law that a peer observer would apply in one
    /// pass via `concurrent_since`. The two are the same intention, but
    /// only the locally-rebased form is guaranteed to be byte-identical to
    /// what every other session stores for this slot.
    fn ack_own_commit(&mut self, commit: Commit<F::Change>) -> Result<F::Delta, EditManagerError> {
        match self.local.pop_front() {
            Some(entry) => {
                self.trunk.push(commit.with_changeset(entry.change));
                debug!("acknowledged own commit; local branch drained by one");
                Ok(self.family.into_delta(&self.family.compose(&[])))
            }
            None => {
                error!("own commit arrived but local branch is empty");
                Err(EditManagerError::EmptyLocalBranchForOwnCommit {
                    session: commit.session_id,
                    seq_number: commit.seq_number,
                })
            }
        }
    }

    /// Peer commit: may be concurrent with some suffix of the trunk and
    /// with all of the local branch. Implements the six-step algorithm:
    /// transpose the incoming change over the concurrent trunk tail, undo
    /// the stale local prefix, append the transposed commit to the trunk,
    /// rebase the local branch onto it, update anchors, and emit the
    /// combined undo/apply/redo delta.
    fn rebase_peer_commit(
        &mut self,
        commit: Commit<F::Change>,
    ) -> Result<F::Delta, EditManagerError> {
        let concurrent = self.trunk.concurrent_since(commit.ref_number);
        trace!(
            concurrent_len = concurrent.len(),
            local_branch_len = self.local.len(),
            "rebasing peer commit"
        );

        // Step 1: transpose the incoming change over the concurrent trunk tail.
        let mut transposed = commit.changeset.clone();
        for t in concurrent {
            transposed = self.family.rebase(&transposed, &t.changeset);
        }

        // Step 2: the local branch must be undone to make room for the
        // transposed remote change.
        let local_changes: Vec<F::Change> = self.local.changes().cloned().collect();
        let undo = self.family.invert(&self.family.compose(&local_changes));

        // Step 3: append the transposed commit to the trunk.
        self.trunk.push(commit.with_changeset(transposed.clone()));

        // Step 4: rebase the local branch onto the new trunk tail. The
        // rebase base advances after each entry so that every remaining
        // entry's input context is the composition of everything before it.
        let mut base = transposed.clone();
        for entry in self.local.iter_mut() {
            let old_change = entry.change.clone();
            entry.change = self.family.rebase(&entry.change, &base);
            base = self.family.rebase(&base, &old_change);
        }

        // Step 5: anchors are rebased over the single transposed remote
        // change, never over the undo/redo scaffolding.
        self.family.rebase_anchors(&mut self.anchors, &transposed);

        // Step 6: emit the delta that takes the caller's view from
        // `trunkTail ∘ L` (stale) to `trunkTail' ∘ L'` (current).
        let redo_changes: Vec<F::Change> = self.local.changes().cloned().collect();
        let redo = self.family.compose(&redo_changes);
        let view_change = self.family.compose(&[undo, transposed, redo]);
        Ok(self.family.into_delta(&view_change))
    }
}
