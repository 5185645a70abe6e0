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

//! The algebra the rebase engine is built on, supplied by the host.
//!
//! The engine never inspects a changeset's contents; every transformation
//! it performs is one of the five operations below. Implementors are
//! responsible for the algebraic laws documented on each method — the
//! engine assumes them and does not verify them.

/// A capability record over an opaque changeset type `Change`, an opaque
/// per-application delta type `Delta`, and an opaque anchor-set type
/// `Anchors`.
///
/// One rebaser instance is bound to an [`crate::edit_manager::EditManager`]
/// at construction; the engine is generic over `ChangeFamily` rather than
/// dispatching dynamically, since exactly one concrete family is in play
/// for the lifetime of a manager.
pub trait ChangeFamily {
    /// The opaque changeset type. Cloned freely by the engine; kept cheap
    /// to clone is the implementor's responsibility (e.g. via `Rc`/`Arc`
    /// internals), not something this trait can enforce.
    type Change: Clone;

    /// The concrete, application-facing mutation produced by
    /// [`ChangeFamily::into_delta`].
    type Delta;

    /// The opaque anchor-set type, owned by the host and passed to
    /// [`crate::edit_manager::EditManager::new`].
    type Anchors;

    /// Composes a sequence of changes into one. Associative, and the empty
    /// slice composes to an identity for every other change: `compose(&[])`
    /// has no effect when mixed into another `compose` or `rebase` call.
    fn compose(&self, changes: &[Self::Change]) -> Self::Change;

    /// The compositional inverse of `change`: applying `change` then
    /// `invert(change)` leaves the document as it was.
    /// `invert(compose([a, b])) == compose([invert(b), invert(a)])`.
    fn invert(&self, change: &Self::Change) -> Self::Change;

    /// Transposes `change` so that it applies cleanly after `over`, while
    /// preserving `change`'s intention. `rebase(x, identity) == x`.
    fn rebase(&self, change: &Self::Change, over: &Self::Change) -> Self::Change;

    /// Updates `anchors` in place so that every anchor it holds remains
    /// valid after `over` has been folded into the document. Called by the
    /// engine only from `add_sequenced_change`, and only with the single
    /// transposed remote change — never with undo/redo scaffolding.
    fn rebase_anchors(&self, anchors: &mut Self::Anchors, over: &Self::Change);

    /// Projects a changeset into the concrete delta the host applies to its
    /// view.
    fn into_delta(&self, change: &Self::Change) -> Self::Delta;
}
