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

//! The bookkeeping core of the cross-level reference subsystem.

use std::mem;

use ahash::AHashMap;

use strata_core::{ObjectGuid, ObjectHandle, ReferenceFixup};

use crate::diagnostics::ManagerMemoryUsage;

/// Non-owning bookkeeping for cross-level references.
///
/// Three maps, with one invariant tying them together: a fixup lives in
/// exactly one of `pending` (its target is not loaded) or `active` (its
/// target is loaded and the holder's slot points at it), never both.
///
/// * `target_guids` - reverse lookup from a loaded target's handle to the
///   GUID it is exported under. Needed to re-file active fixups when the
///   target unloads, and enumerated by the editor save pipeline.
/// * `pending` - fixups waiting for a target, keyed by the target's GUID.
/// * `active` - resolved fixups, keyed by the live target's handle, kept so
///   they can be retracted when the target streams out.
///
/// There is no separate "is cross-level referenced" flag on objects: a
/// non-empty `active` bucket *is* that flag ([`is_referenced`]).
///
/// [`is_referenced`]: ReferenceManager::is_referenced
#[derive(Default)]
pub struct ReferenceManager {
    target_guids: AHashMap<ObjectHandle, ObjectGuid>,
    pending: AHashMap<ObjectGuid, Vec<ReferenceFixup>>,
    active: AHashMap<ObjectHandle, Vec<ReferenceFixup>>,
}

impl ReferenceManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a fixup to be resolved once an object with `guid` loads.
    pub fn add_pending(&mut self, guid: ObjectGuid, fixup: ReferenceFixup) {
        self.pending.entry(guid).or_default().push(fixup);
    }

    /// Drains and removes the pending bucket for `guid`.
    ///
    /// An absent bucket yields an empty vec; that is a normal outcome, not
    /// an error.
    pub fn take_pending(&mut self, guid: ObjectGuid) -> Vec<ReferenceFixup> {
        self.pending.remove(&guid).unwrap_or_default()
    }

    /// Number of fixups currently pending on `guid`.
    pub fn pending_count(&self, guid: ObjectGuid) -> usize {
        self.pending.get(&guid).map_or(0, Vec::len)
    }

    /// Records a resolved fixup against its live target, so it can be
    /// retracted if the target unloads.
    pub fn record_active(&mut self, target: ObjectHandle, fixup: ReferenceFixup) {
        self.active.entry(target).or_default().push(fixup);
    }

    /// Drains and removes the active bucket for `target`.
    pub fn take_active(&mut self, target: ObjectHandle) -> Vec<ReferenceFixup> {
        self.active.remove(&target).unwrap_or_default()
    }

    /// Whether any resolved reference currently points at `target`.
    ///
    /// This replaces the per-object "is cross-level referenced" flag; the
    /// map is the source of truth.
    pub fn is_referenced(&self, target: ObjectHandle) -> bool {
        self.active.get(&target).is_some_and(|b| !b.is_empty())
    }

    /// Remembers which GUID a loaded target is exported under.
    pub fn register_target(&mut self, target: ObjectHandle, guid: ObjectGuid) {
        self.target_guids.insert(target, guid);
    }

    /// The GUID `target` is exported under, if it is currently loaded and
    /// registered with this manager.
    pub fn guid_of(&self, target: ObjectHandle) -> Option<ObjectGuid> {
        self.target_guids.get(&target).copied()
    }

    /// Whether this manager registered `target` as a GUID-carrying object.
    /// Drives object-driven manager selection during play-in-editor
    /// garbage collection.
    pub fn contains_target(&self, target: ObjectHandle) -> bool {
        self.target_guids.contains_key(&target)
    }

    /// Drops the target's GUID registration. Called when the target
    /// unloads; the GUID itself lives on in any re-filed pending fixups.
    pub fn forget_target(&mut self, target: ObjectHandle) {
        self.target_guids.remove(&target);
    }

    /// Enumerates (target, GUID) pairs for every registered loaded target.
    pub(crate) fn target_guid_entries(
        &self,
    ) -> impl Iterator<Item = (ObjectHandle, ObjectGuid)> + '_ {
        self.target_guids.iter().map(|(h, g)| (*h, *g))
    }

    /// Clears all three maps unconditionally. Used on level teardown and
    /// when a play-in-editor session ends.
    pub fn reset(&mut self) {
        self.target_guids.clear();
        self.pending.clear();
        self.active.clear();
    }

    /// Element counts and approximate byte footprint of the three maps.
    pub fn memory_usage(&self) -> ManagerMemoryUsage {
        let pending_fixups: usize = self.pending.values().map(Vec::len).sum();
        let active_fixups: usize = self.active.values().map(Vec::len).sum();
        let approx_bytes = self.target_guids.len()
            * mem::size_of::<(ObjectHandle, ObjectGuid)>()
            + self.pending.len() * mem::size_of::<(ObjectGuid, Vec<ReferenceFixup>)>()
            + self.active.len() * mem::size_of::<(ObjectHandle, Vec<ReferenceFixup>)>()
            + (pending_fixups + active_fixups) * mem::size_of::<ReferenceFixup>();
        ManagerMemoryUsage {
            targets: self.target_guids.len(),
            pending_buckets: self.pending.len(),
            pending_fixups,
            active_buckets: self.active.len(),
            active_fixups,
            approx_bytes,
        }
    }
}
