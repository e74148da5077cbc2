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

//! Error types for the owning data layer.

use strata_core::{ObjectHandle, SlotIndex};

/// Errors produced by checked access to the object store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The handle's generation does not match the current occupant of its
    /// index (the object was removed, and possibly replaced).
    #[error("stale handle {0}: object no longer exists")]
    StaleHandle(ObjectHandle),

    /// The slot index exceeds the number of reference slots the object
    /// declared at spawn time.
    #[error("object {handle} has {slot_count} reference slots, no {slot}")]
    SlotOutOfRange {
        /// The object whose slots were accessed.
        handle: ObjectHandle,
        /// The offending slot index.
        slot: SlotIndex,
        /// How many slots the object actually has.
        slot_count: u32,
    },
}
