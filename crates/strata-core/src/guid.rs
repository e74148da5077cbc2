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

//! Stable GUID identity for cross-level reference targets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A globally unique, persistent identifier for a cross-level reference target.
///
/// Objects that may be pointed at from another streaming level are named by a
/// `ObjectGuid` rather than by their in-memory handle, so a reference can be
/// serialized and later re-resolved no matter where (or whether) the target
/// currently lives in memory.
///
/// The same GUID can legitimately name two physically distinct objects at
/// once: the authoring-time object and its play-in-editor duplicate. Keeping
/// those apart is the job of the two reference managers, not of the GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectGuid(Uuid);

impl ObjectGuid {
    /// Creates a new, random (version 4) `ObjectGuid`.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one read back from serialized level data.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ObjectGuid {
    /// Creates a new, random (version 4) `ObjectGuid`.
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectGuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
