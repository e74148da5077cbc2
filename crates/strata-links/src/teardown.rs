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

//! Fixup retraction: the unload side of the protocol.

use strata_core::ObjectHandle;
use strata_world::ObjectStore;

use crate::context::{EngineMode, ReferenceContext};

/// Retracts every resolved reference pointing at `target` before it is
/// destroyed or unloaded.
///
/// This is the safety net that keeps references from dangling into an
/// unloaded level: each holder's slot is cleared and the holder notified
/// (unless it is itself condemned), and the fixup is re-filed under the
/// target's GUID so a future reload re-resolves it to the same slots.
///
/// Does nothing when nothing points at `target`, and nothing at all once
/// [`ReferenceContext::begin_shutdown`] has been called: at process exit
/// no reload will ever happen and the store is about to be dropped.
///
/// In editor mode the manager is selected per object, because during
/// play-in-editor garbage collection the active domain may not be the one
/// that registered `target`.
pub fn retract_target(ctx: &mut ReferenceContext, store: &mut ObjectStore, target: ObjectHandle) {
    if ctx.is_shutting_down() {
        return;
    }

    if ctx.mode() == EngineMode::Editor {
        ctx.switch_to_manager_with_object(target);
    }

    let manager = ctx.active_manager_mut();
    if !manager.is_referenced(target) {
        return;
    }

    let guid = manager.guid_of(target);
    if guid.is_none() {
        // Active entries without a GUID registration cannot be re-filed;
        // the slots still get cleared below.
        log::warn!("cross-level: target {target} has active references but no registered GUID");
    }

    let fixups = manager.take_active(target);
    for fixup in fixups {
        match store.write_slot(fixup, None) {
            Ok(()) => {
                // A condemned holder is going away with its slots; re-filing
                // its fixup would only park garbage in the pending map.
                if store.is_pending_kill(fixup.holder) {
                    continue;
                }
                // Holder lives on: park the fixup so a reload of an object
                // with this GUID re-resolves it.
                if let Some(guid) = guid {
                    manager.add_pending(guid, fixup);
                }
            }
            Err(err) => {
                // Holder died first; its slot is gone with it.
                log::debug!("cross-level: dropping retracted fixup: {err}");
            }
        }
    }

    manager.forget_target(target);
}
