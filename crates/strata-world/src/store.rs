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

//! The generational arena that owns every live object.

use strata_core::{LevelObject, ObjectHandle, ReferenceFixup, SlotIndex};

use crate::error::WorldError;

/// Per-object state kept alongside the boxed payload.
struct ObjectRecord {
    name: String,
    payload: Box<dyn LevelObject>,
    /// Typed cross-level reference slots. `None` = unresolved / retracted.
    slots: Vec<Option<ObjectHandle>>,
    /// Set when the object has been condemned but not yet removed; fixup
    /// callbacks are suppressed for condemned holders.
    pending_kill: bool,
}

/// Owns all live objects and hands out generational [`ObjectHandle`]s.
///
/// The store maintains a dense list of slots and their current occupants.
/// Removing an object frees its index into a recycle list; re-using the
/// index bumps the generation, so handles held elsewhere (including by the
/// reference manager) go stale instead of silently aliasing the newcomer.
///
/// The store is the sole owner. The reference subsystem holds handles and
/// only mutates objects through the checked accessors here.
#[derive(Default)]
pub struct ObjectStore {
    entries: Vec<(ObjectHandle, Option<ObjectRecord>)>,
    freed: Vec<u32>,
}

impl ObjectStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object, allocating a new or recycled handle.
    ///
    /// `slot_count` fixes the number of cross-level reference slots the
    /// object exposes; all start empty.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        payload: Box<dyn LevelObject>,
        slot_count: u32,
    ) -> ObjectHandle {
        let record = ObjectRecord {
            name: name.into(),
            payload,
            slots: vec![None; slot_count as usize],
            pending_kill: false,
        };
        if let Some(index) = self.freed.pop() {
            let index = index as usize;
            let (handle_slot, record_slot) = &mut self.entries[index];
            handle_slot.generation += 1;
            *record_slot = Some(record);
            *handle_slot
        } else {
            let handle = ObjectHandle {
                index: self.entries.len() as u32,
                generation: 0,
            };
            self.entries.push((handle, Some(record)));
            handle
        }
    }

    fn record(&self, handle: ObjectHandle) -> Option<&ObjectRecord> {
        self.entries
            .get(handle.index as usize)
            .and_then(|(slot_handle, record)| {
                if slot_handle.generation == handle.generation {
                    record.as_ref()
                } else {
                    None
                }
            })
    }

    fn record_mut(&mut self, handle: ObjectHandle) -> Option<&mut ObjectRecord> {
        self.entries
            .get_mut(handle.index as usize)
            .and_then(|(slot_handle, record)| {
                if slot_handle.generation == handle.generation {
                    record.as_mut()
                } else {
                    None
                }
            })
    }

    /// Returns whether the handle refers to a live object.
    pub fn contains(&self, handle: ObjectHandle) -> bool {
        self.record(handle).is_some()
    }

    /// Returns the object's payload, if the handle is live.
    pub fn get(&self, handle: ObjectHandle) -> Option<&dyn LevelObject> {
        self.record(handle).map(|r| r.payload.as_ref())
    }

    /// Returns the object's payload mutably, if the handle is live.
    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn LevelObject> {
        self.record_mut(handle).map(|r| r.payload.as_mut())
    }

    /// Returns the object's name, if the handle is live.
    pub fn name_of(&self, handle: ObjectHandle) -> Option<&str> {
        self.record(handle).map(|r| r.name.as_str())
    }

    /// Reads a reference slot.
    pub fn slot(&self, handle: ObjectHandle, slot: SlotIndex) -> Result<Option<ObjectHandle>, WorldError> {
        let record = self.record(handle).ok_or(WorldError::StaleHandle(handle))?;
        record
            .slots
            .get(slot.0 as usize)
            .copied()
            .ok_or(WorldError::SlotOutOfRange {
                handle,
                slot,
                slot_count: record.slots.len() as u32,
            })
    }

    /// Writes a reference slot and notifies the holder through
    /// [`LevelObject::post_reference_fixup`], unless the holder is pending
    /// kill (a condemned object no longer cares what its slots say).
    ///
    /// This is the single mutation point for slots; the reference manager
    /// never reaches into object memory any other way.
    pub fn write_slot(
        &mut self,
        fixup: ReferenceFixup,
        target: Option<ObjectHandle>,
    ) -> Result<(), WorldError> {
        let record = self
            .record_mut(fixup.holder)
            .ok_or(WorldError::StaleHandle(fixup.holder))?;
        let slot_count = record.slots.len() as u32;
        let cell = record
            .slots
            .get_mut(fixup.slot.0 as usize)
            .ok_or(WorldError::SlotOutOfRange {
                handle: fixup.holder,
                slot: fixup.slot,
                slot_count,
            })?;
        *cell = target;
        if !record.pending_kill {
            record.payload.post_reference_fixup(fixup.slot, target);
        }
        Ok(())
    }

    /// Condemns an object: it stays in the store until removed, but fixup
    /// notifications stop being delivered to it.
    pub fn mark_pending_kill(&mut self, handle: ObjectHandle) {
        if let Some(record) = self.record_mut(handle) {
            record.pending_kill = true;
        }
    }

    /// Returns whether a live object has been condemned.
    pub fn is_pending_kill(&self, handle: ObjectHandle) -> bool {
        self.record(handle).is_some_and(|r| r.pending_kill)
    }

    /// Removes an object, freeing its index for recycling.
    ///
    /// Returns the payload so callers can run final teardown on it. Stale
    /// handles return `None`.
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<Box<dyn LevelObject>> {
        let entry = self.entries.get_mut(handle.index as usize)?;
        if entry.0.generation != handle.generation || entry.1.is_none() {
            return None;
        }
        let record = entry.1.take()?;
        self.freed.push(handle.index);
        Some(record.payload)
    }

    /// Number of object slots ever created (live and dead).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no object slot has ever been created.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of currently live objects.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_some()).count()
    }
}
