// Copyright 2025 strata
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The behavior contract for objects living in streamed levels.

use std::any::Any;

use crate::handle::ObjectHandle;
use crate::slot::SlotIndex;

/// Behavior attached to every object stored in a streamed level.
///
/// The store owns objects as `Box<dyn LevelObject>`; game code downcasts to
/// concrete types through [`as_any`](LevelObject::as_any).
pub trait LevelObject: Any {
    /// Called after one of this object's reference slots has been rewritten
    /// by the cross-level reference manager.
    ///
    /// `target` is `Some` when a pending reference was just resolved to a
    /// freshly loaded object, and `None` when a previously resolved target
    /// is streaming out and the slot has been cleared. The slot itself is
    /// already updated by the time this runs; the callback exists so the
    /// holder can refresh any state derived from the reference (cached
    /// queries, spatial bookkeeping and the like).
    fn post_reference_fixup(&mut self, slot: SlotIndex, target: Option<ObjectHandle>) {
        let _ = (slot, target);
    }

    /// Upcast for downcasting to the concrete object type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete object type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
