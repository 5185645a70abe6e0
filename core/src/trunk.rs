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

use crate::commit::Commit;
use crate::ids::SeqNumber;

/// The canonical, append-only history: every commit the sequencer has
/// accepted, in sequence order.
///
/// `seq_number` is contiguous by construction (`addSequencedChange` rejects
/// gaps before a commit ever reaches the trunk), so the concurrency
/// frontier for a given `refNumber` is a direct slice rather than a search.
#[derive(Debug, Default)]
pub struct Trunk<C> {
    commits: Vec<Commit<C>>,
}

impl<C> Trunk<C> {
    pub fn new() -> Self {
        Self { commits: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// The sequence number of the trunk tail, i.e. the number the *next*
    /// sequenced commit is expected to carry minus one. `ZERO` for an empty
    /// trunk.
    pub fn tail_seq(&self) -> SeqNumber {
        SeqNumber::new(self.commits.len() as u64)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Commit<C>> {
        self.commits.iter()
    }

    /// The suffix of the trunk whose authors had not observed `ref_number`
    /// at authoring time: `T[k..]` where `k` is the index of the first
    /// commit with `seqNumber > ref_number`.
    pub fn concurrent_since(&self, ref_number: SeqNumber) -> &[Commit<C>] {
        let k = (ref_number.get() as usize).min(self.commits.len());
        &self.commits[k..]
    }

    pub(crate) fn push(&mut self, commit: Commit<C>) {
        self.commits.push(commit);
    }
}

#[cfg(debug_assertions)]
impl<C> Trunk<C> {
    /// Validates `T[i].seqNumber == i + 1` and `T[i].refNumber < T[i].seqNumber`.
    /// Compiled out of release builds; always on under `cargo test`.
    pub(crate) fn debug_assert_contiguous(&self) {
        for (i, commit) in self.commits.iter().enumerate() {
            debug_assert_eq!(
                commit.seq_number.get(),
                (i + 1) as u64,
                "trunk entry {i} carries seq_number {:?}, expected {}",
                commit.seq_number,
                i + 1
            );
            debug_assert!(
                commit.ref_number < commit.seq_number,
                "trunk entry {i} has ref_number {:?} >= its own seq_number {:?}",
                commit.ref_number,
                commit.seq_number
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SessionId;

    fn commit(seq: u64, ref_seq: u64, intent: i64) -> Commit<i64> {
        Commit::new(
            SessionId::new("peer"),
            SeqNumber::new(seq),
            SeqNumber::new(ref_seq),
            intent,
        )
    }

    #[test]
    fn concurrent_since_slices_from_ref_number() {
        let mut trunk = Trunk::new();
        trunk.push(commit(1, 0, 1));
        trunk.push(commit(2, 1, 2));
        trunk.push(commit(3, 0, 3));

        assert_eq!(trunk.concurrent_since(SeqNumber::ZERO).len(), 3);
        assert_eq!(trunk.concurrent_since(SeqNumber::new(1)).len(), 2);
        assert_eq!(trunk.concurrent_since(SeqNumber::new(3)).len(), 0);
    }

    #[test]
    fn tail_seq_tracks_length() {
        let mut trunk: Trunk<i64> = Trunk::new();
        assert_eq!(trunk.tail_seq(), SeqNumber::ZERO);
        trunk.push(commit(1, 0, 1));
        assert_eq!(trunk.tail_seq(), SeqNumber::new(1));
    }
}
