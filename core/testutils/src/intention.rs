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

//! A minimal, honest `ChangeFamily` implementation for tests.
//!
//! Changesets are reduced words in the free group generated by the signed
//! integers: `compose` concatenates and cancels adjacent inverse pairs,
//! `invert` reverses and negates, and `rebase` is the identity. Treating
//! every intention as independent of every other one is deliberately the
//! simplest algebra that still satisfies every law `weft_core` assumes
//! (`compose(&[])` is an identity, `invert` is a true compositional
//! inverse, `rebase(x, identity) == x`); it is not a model of a real tree
//! merge, only enough to drive the rebase engine's own bookkeeping.

use weft_core::change_family::ChangeFamily;

/// A reduced word over signed integers: no two adjacent entries are
/// negations of each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentionChange(Vec<i64>);

impl IntentionChange {
    pub fn identity() -> Self {
        Self(Vec::new())
    }

    pub fn single(intention: i64) -> Self {
        let mut word = Vec::new();
        push_reduced(&mut word, intention);
        Self(word)
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_empty()
    }

    pub fn intentions(&self) -> &[i64] {
        &self.0
    }
}

fn push_reduced(word: &mut Vec<i64>, x: i64) {
    if word.last() == Some(&-x) {
        word.pop();
    } else {
        word.push(x);
    }
}

/// The delta the (imaginary) host applies to its view: the same shape as a
/// changeset, but a distinct type, since a real `ChangeFamily` would not
/// generally have `Delta == Change`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentionDelta(pub Vec<i64>);

/// The anchor set: a log of every intention the host's view has had
/// rebased onto it, in the order the application observed it. Used by
/// tests to check anchor parity against the trunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentionAnchors(Vec<i64>);

impl IntentionAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[i64] {
        &self.0
    }

    /// Records a change's intentions as applied, bypassing
    /// `ChangeFamily::rebase_anchors`. Used by test harnesses to emulate
    /// the host applying the `Delta` from `add_local_change` directly to
    /// its anchor-bearing view, something this crate never does itself
    /// (`rebase_anchors` is only ever called from `add_sequenced_change`).
    pub fn record(&mut self, change: &IntentionChange) {
        self.0.extend_from_slice(&change.0);
    }
}

/// The reference `ChangeFamily`: free-group composition over independent
/// integer intentions.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntentionFamily;

impl ChangeFamily for IntentionFamily {
    type Change = IntentionChange;
    type Delta = IntentionDelta;
    type Anchors = IntentionAnchors;

    fn compose(&self, changes: &[Self::Change]) -> Self::Change {
        let mut word = Vec::new();
        for change in changes {
            for &x in &change.0 {
                push_reduced(&mut word, x);
            }
        }
        IntentionChange(word)
    }

    fn invert(&self, change: &Self::Change) -> Self::Change {
        IntentionChange(change.0.iter().rev().map(|x| -x).collect())
    }

    fn rebase(&self, change: &Self::Change, _over: &Self::Change) -> Self::Change {
        change.clone()
    }

    fn rebase_anchors(&self, anchors: &mut Self::Anchors, over: &Self::Change) {
        anchors.record(over);
    }

    fn into_delta(&self, change: &Self::Change) -> Self::Delta {
        IntentionDelta(change.0.clone())
    }
}
