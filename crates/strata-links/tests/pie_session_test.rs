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

//! A play-in-editor session duplicates the authoring world: the duplicates
//! carry the *same* GUIDs as the originals but are different objects, so
//! they are booked in a parallel manager. These tests drive both managers
//! through a simulated session and check they never bleed into each other.

use std::any::Any;

use strata_core::{LevelObject, ObjectGuid, ObjectHandle, ReferenceFixup, SlotIndex};
use strata_links::{
    register_pending_reference, resolve_target_loaded, retract_target, EngineMode,
    ReferenceContext, ReferenceDomain,
};
use strata_world::ObjectStore;

// --- DUMMY PROPS FOR THIS TEST ---

struct Prop;

impl LevelObject for Prop {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn spawn(store: &mut ObjectStore, name: &str, slots: u32) -> ObjectHandle {
    store.insert(name, Box::new(Prop), slots)
}

// --- TESTS ---

#[test]
fn pie_duplicates_resolve_against_their_own_manager() {
    // --- 1. ARRANGE ---
    // Authoring world: holder referencing a loaded target by GUID.
    let mut ctx = ReferenceContext::new(EngineMode::Editor);
    let mut store = ObjectStore::new();
    let guid = ObjectGuid::new();

    let real_holder = spawn(&mut store, "Switch", 1);
    let real_target = spawn(&mut store, "Door", 0);
    register_pending_reference(&mut ctx, guid, ReferenceFixup::new(real_holder, SlotIndex(0)));
    resolve_target_loaded(&mut ctx, &mut store, real_target, guid);

    // --- 2. ACT ---
    // Play-in-editor starts: duplicates of both objects, same GUID,
    // registered while the PIE manager is active.
    ctx.switch_to_play_in_editor();
    let pie_holder = spawn(&mut store, "Switch", 1);
    let pie_target = spawn(&mut store, "Door", 0);
    register_pending_reference(&mut ctx, guid, ReferenceFixup::new(pie_holder, SlotIndex(0)));
    resolve_target_loaded(&mut ctx, &mut store, pie_target, guid);

    // --- 3. ASSERT ---
    // Each holder points at its own world's target.
    assert_eq!(store.slot(real_holder, SlotIndex(0)).unwrap(), Some(real_target));
    assert_eq!(store.slot(pie_holder, SlotIndex(0)).unwrap(), Some(pie_target));

    // And each manager only knows its own target under the shared GUID.
    assert_eq!(
        ctx.manager(ReferenceDomain::Standard).guid_of(real_target),
        Some(guid)
    );
    assert!(!ctx.manager(ReferenceDomain::Standard).contains_target(pie_target));
    assert_eq!(
        ctx.manager(ReferenceDomain::PlayInEditor).guid_of(pie_target),
        Some(guid)
    );
}

#[test]
fn gc_of_a_pie_duplicate_only_touches_the_pie_world() {
    let mut ctx = ReferenceContext::new(EngineMode::Editor);
    let mut store = ObjectStore::new();
    let guid = ObjectGuid::new();

    let real_holder = spawn(&mut store, "Switch", 1);
    let real_target = spawn(&mut store, "Door", 0);
    register_pending_reference(&mut ctx, guid, ReferenceFixup::new(real_holder, SlotIndex(0)));
    resolve_target_loaded(&mut ctx, &mut store, real_target, guid);

    ctx.switch_to_play_in_editor();
    let pie_holder = spawn(&mut store, "Switch", 1);
    let pie_target = spawn(&mut store, "Door", 0);
    register_pending_reference(&mut ctx, guid, ReferenceFixup::new(pie_holder, SlotIndex(0)));
    resolve_target_loaded(&mut ctx, &mut store, pie_target, guid);

    // Session over; the editor has already switched back to standard when
    // garbage collection of PIE objects runs. Retraction must still find
    // the PIE manager through the object itself.
    ctx.switch_to_standard();
    retract_target(&mut ctx, &mut store, pie_target);
    store.remove(pie_target);

    assert_eq!(
        store.slot(pie_holder, SlotIndex(0)).unwrap(),
        None,
        "the PIE holder's reference must be retracted"
    );
    assert_eq!(
        store.slot(real_holder, SlotIndex(0)).unwrap(),
        Some(real_target),
        "the authoring world must be untouched"
    );
    assert_eq!(
        ctx.manager(ReferenceDomain::PlayInEditor).pending_count(guid),
        1,
        "the PIE fixup is re-filed in the PIE manager"
    );
    assert_eq!(ctx.manager(ReferenceDomain::Standard).pending_count(guid), 0);
}

#[test]
fn ending_a_pie_session_resets_only_the_pie_manager() {
    let mut ctx = ReferenceContext::new(EngineMode::Editor);
    let mut store = ObjectStore::new();
    let guid = ObjectGuid::new();

    let real_target = spawn(&mut store, "Door", 0);
    resolve_target_loaded(&mut ctx, &mut store, real_target, guid);

    ctx.switch_to_play_in_editor();
    let pie_holder = spawn(&mut store, "Switch", 1);
    register_pending_reference(&mut ctx, guid, ReferenceFixup::new(pie_holder, SlotIndex(0)));

    // The end-of-session sequence: flip to PIE, wipe it, flip back.
    ctx.switch_to_play_in_editor();
    ctx.active_manager_mut().reset();
    ctx.switch_to_standard();

    assert_eq!(ctx.manager(ReferenceDomain::PlayInEditor).pending_count(guid), 0);
    assert!(
        ctx.manager(ReferenceDomain::Standard).contains_target(real_target),
        "resetting the PIE books must not disturb the standard manager"
    );
}

#[test]
fn save_pipeline_sees_registered_target_guids() {
    let mut ctx = ReferenceContext::new(EngineMode::Editor);
    let mut store = ObjectStore::new();
    let guid = ObjectGuid::new();

    let target = spawn(&mut store, "Door", 0);
    resolve_target_loaded(&mut ctx, &mut store, target, guid);

    let entries: Vec<_> = ctx.target_guid_entries().collect();
    assert_eq!(entries, vec![(target, guid)]);
}
