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

//! Collaborative-editing history reconciliation.
//!
//! This crate holds the part of a distributed tree document that reconciles
//! locally produced edits with a server-sequenced global order of edits
//! from every session, producing a deterministic, convergent document state
//! on every participant. See [`edit_manager::EditManager`] for the entry
//! point.
//!
//! The crate is policy-free: it knows nothing about what a changeset
//! *contains*. Every transformation is delegated to a host-supplied
//! [`change_family::ChangeFamily`] implementation, so this core never ships
//! a concrete tree, delta, or anchor type of its own.

pub mod change_family;
pub mod commit;
pub mod edit_manager;
pub mod error;
pub mod ids;
pub mod local_branch;
pub mod trunk;

pub use change_family::ChangeFamily;
pub use commit::Commit;
pub use edit_manager::EditManager;
pub use error::EditManagerError;
pub use ids::{SeqNumber, SessionId};
