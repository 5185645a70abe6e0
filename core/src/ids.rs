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

//! Nominal identifier types used throughout the rebase engine.
//!
//! Both types are thin wrappers: they exist so that a session id and a
//! sequence number can never be swapped for each other at a call site, not
//! to add behavior. Neither type implements arithmetic across kinds.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier for a participating session, assigned by the host.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(Arc<str>);

impl SessionId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionId").field(&self.0).finish()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T: Into<Arc<str>>> From<T> for SessionId {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// A position in the server-assigned total order. `0` is the pre-history
/// value: the `refNumber` of a session that has not observed any commits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeqNumber(u64);

impl SeqNumber {
    /// The pre-history value, used as the `refNumber` of fresh clients and
    /// as the branch point of a trunk with no commits yet.
    pub const ZERO: SeqNumber = SeqNumber(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The next sequence number after this one. Used only to describe the
    /// number a newly sequenced commit is expected to carry; never exposed
    /// as a general-purpose `Add`.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeqNumber({})", self.0)
    }
}

impl fmt::Display for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_number_ordering_is_structural() {
        assert!(SeqNumber::new(1) < SeqNumber::new(2));
        assert_eq!(SeqNumber::ZERO.next(), SeqNumber::new(1));
    }

    #[test]
    fn session_id_equality_is_by_value() {
        assert_eq!(SessionId::new("alice"), SessionId::new("alice"));
        assert_ne!(SessionId::new("alice"), SessionId::new("bob"));
    }
}
