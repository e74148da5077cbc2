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

//! Typed reference slots: where a cross-level pointer lives inside a holder.
//!
//! Instead of patching raw memory at a byte offset, every object declares a
//! fixed number of reference slots at spawn time. A slot either holds the
//! handle of a live target or is empty. The reference manager only ever
//! touches slots through the store's checked accessors, so a fixup can never
//! scribble over an unrelated field.

use serde::{Deserialize, Serialize};

use crate::handle::ObjectHandle;

/// Index of a reference slot within its holding object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub u32);

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A recorded location that should point at some cross-level target.
///
/// "Object `holder` has a reference slot `slot` that wants to point at a
/// target named by GUID." While the target is unloaded the fixup waits in
/// the pending map, keyed by that GUID; once the target loads, the slot is
/// written and the fixup moves to the active map, keyed by the target's
/// handle, so it can be retracted if the target streams back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceFixup {
    /// The object holding the reference.
    pub holder: ObjectHandle,
    /// Which of the holder's slots the reference occupies.
    pub slot: SlotIndex,
}

impl ReferenceFixup {
    /// Convenience constructor.
    pub fn new(holder: ObjectHandle, slot: SlotIndex) -> Self {
        Self { holder, slot }
    }
}
