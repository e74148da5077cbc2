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

//! Fixup registration and resolution: the load side of the protocol.

use strata_core::{ObjectGuid, ObjectHandle, ReferenceFixup};
use strata_world::ObjectStore;

use crate::context::ReferenceContext;

/// Files a reference whose target is not currently loaded.
///
/// Called while decoding an object whose reference slot names `guid` as
/// its target: the slot stays empty for now, and the fixup waits in the
/// pending map until an object exporting `guid` streams in.
pub fn register_pending_reference(
    ctx: &mut ReferenceContext,
    guid: ObjectGuid,
    fixup: ReferenceFixup,
) {
    log::debug!(
        "cross-level: {guid} isn't loaded yet for reference [{} {}]",
        fixup.holder,
        fixup.slot
    );
    ctx.active_manager_mut().add_pending(guid, fixup);
}

/// Binds a reference whose target is already live.
///
/// The decode-time fast path: the slot is written immediately, and the
/// fixup is recorded on the active side so the reference can be retracted
/// if the target later streams out.
pub fn bind_loaded_reference(
    ctx: &mut ReferenceContext,
    store: &mut ObjectStore,
    guid: ObjectGuid,
    target: ObjectHandle,
    fixup: ReferenceFixup,
) {
    log::debug!(
        "cross-level: got reference pointing at loaded target {} ({guid})",
        target
    );
    let manager = ctx.active_manager_mut();
    manager.register_target(target, guid);
    match store.write_slot(fixup, Some(target)) {
        Ok(()) => manager.record_active(target, fixup),
        Err(err) => log::debug!("cross-level: dropping unbindable reference: {err}"),
    }
}

/// Resolves every fixup pending on `guid` now that `target` carries it.
///
/// Drains the pending bucket: each fixup with a live holder gets its slot
/// written to `target`, the holder is notified, and the fixup moves to the
/// active side. Fixups whose holder has since died are dropped. An empty
/// or absent bucket is a no-op.
///
/// Idempotent per bucket (the bucket is fully drained and removed);
/// ordering among fixups of one GUID is unspecified.
pub fn resolve_target_loaded(
    ctx: &mut ReferenceContext,
    store: &mut ObjectStore,
    target: ObjectHandle,
    guid: ObjectGuid,
) {
    let manager = ctx.active_manager_mut();
    manager.register_target(target, guid);

    let fixups = manager.take_pending(guid);
    for fixup in fixups {
        match store.write_slot(fixup, Some(target)) {
            Ok(()) => manager.record_active(target, fixup),
            Err(err) => {
                // The holder was unloaded while the fixup sat pending.
                log::debug!("cross-level: dropping fixup pending on {guid}: {err}");
            }
        }
    }
}
