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

use std::collections::VecDeque;

use crate::ids::SeqNumber;

/// A locally produced, not-yet-sequenced edit, together with the trunk
/// length it was authored against.
#[derive(Clone, Debug)]
pub struct LocalEntry<C> {
    pub change: C,
    pub ref_seq: SeqNumber,
}

/// The ordered queue of in-flight local edits. Entries are appended by
/// `add_local_change` and removed from the front as the sequencer
/// acknowledges them in `add_sequenced_change`.
#[derive(Debug, Default)]
pub struct LocalBranch<C> {
    entries: VecDeque<LocalEntry<C>>,
}

impl<C> LocalBranch<C> {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalEntry<C>> {
        self.entries.iter()
    }

    pub fn changes(&self) -> impl Iterator<Item = &C> {
        self.entries.iter().map(|entry| &entry.change)
    }

    pub(crate) fn push(&mut self, entry: LocalEntry<C>) {
        self.entries.push_back(entry);
    }

    pub(crate) fn pop_front(&mut self) -> Option<LocalEntry<C>> {
        self.entries.pop_front()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut LocalEntry<C>> {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_preserve_order() {
        let mut branch: LocalBranch<i64> = LocalBranch::new();
        branch.push(LocalEntry {
            change: 1,
            ref_seq: SeqNumber::ZERO,
        });
        branch.push(LocalEntry {
            change: 2,
            ref_seq: SeqNumber::new(1),
        });

        assert_eq!(branch.len(), 2);
        let first = branch.pop_front().unwrap();
        assert_eq!(first.change, 1);
        assert_eq!(branch.len(), 1);
    }

    #[test]
    fn pop_front_on_empty_branch_is_none() {
        let mut branch: LocalBranch<i64> = LocalBranch::new();
        assert!(branch.pop_front().is_none());
    }
}
