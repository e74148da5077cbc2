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

//! Level-granular entry points driving resolution and teardown.

use strata_world::{Level, ObjectStore};

use crate::context::ReferenceContext;
use crate::resolve::resolve_target_loaded;
use crate::teardown::retract_target;

/// Completes a level load: reports exports that never materialized, then
/// resolves all fixups waiting on the level's exported targets.
///
/// Safe to call again for the same level; already-drained buckets are
/// no-ops.
pub fn level_loaded(ctx: &mut ReferenceContext, store: &mut ObjectStore, level: &mut Level) {
    for (guid, label) in level.take_missing_exports() {
        log::warn!(
            "cross-level: '{label}' is marked as a cross level reference target, but it did not load ({guid})"
        );
    }

    let exports: Vec<_> = level.exports().collect();
    for (guid, handle) in exports {
        resolve_target_loaded(ctx, store, handle, guid);
    }
}

/// Streams a level out: retracts references into it, then removes its
/// objects from the store.
///
/// Everything in the level is condemned up front so that holders being
/// unloaded alongside their targets do not receive retraction callbacks.
/// During unconditional shutdown retraction is skipped and the objects
/// are simply removed.
pub fn unload_level(ctx: &mut ReferenceContext, store: &mut ObjectStore, level: &mut Level) {
    let handles = level.objects().to_vec();

    for &handle in &handles {
        store.mark_pending_kill(handle);
    }
    for &handle in &handles {
        retract_target(ctx, store, handle);
    }
    for &handle in &handles {
        store.remove(handle);
    }

    log::debug!(
        "cross-level: unloaded level '{}' ({} objects, {} exports)",
        level.name(),
        handles.len(),
        level.export_count()
    );

    // The handles recorded by the level are stale now; a reload starts
    // from fresh bookkeeping.
    level.clear();
}
