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

//! Defines the opaque, non-owning identity for a stored object.

use serde::{Deserialize, Serialize};

/// A unique identifier for an object in the [`ObjectStore`].
///
/// It combines an index with a generation count to solve the "ABA problem".
/// When an object is removed, its index can be recycled for a new object,
/// but the generation is incremented. This ensures that stale `ObjectHandle`
/// values pointing to a recycled index become invalid and cannot accidentally
/// affect the new occupant.
///
/// The handle is non-owning: lifetime of the object is the store's concern,
/// and every part of the reference subsystem holds handles only.
///
/// [`ObjectStore`]: https://docs.rs/strata-world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectHandle {
    /// The index of the object's slot in the store.
    pub index: u32,
    /// A generation counter that is incremented each time the index is recycled.
    pub generation: u32,
}

impl ObjectHandle {
    /// Creates a handle from raw parts. Mostly useful in tests; real handles
    /// come out of the store.
    pub fn from_raw(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
