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

//! Level bookkeeping: which objects belong to a streamable unit, and which
//! of them are exported as cross-level reference targets.

use ahash::AHashMap;

use strata_core::{ObjectGuid, ObjectHandle};

/// A unit of world content that can be loaded and unloaded independently.
///
/// A level owns (by handle, not by storage) the objects spawned into it,
/// and its **export GUID table**: the map from the GUIDs this level exposes
/// to the handles of the loaded objects carrying them. Other levels refer
/// to these objects by GUID; the export table is what turns a GUID back
/// into a live handle once this level is in memory.
pub struct Level {
    name: String,
    objects: Vec<ObjectHandle>,
    exports: AHashMap<ObjectGuid, ObjectHandle>,
    /// GUIDs the level's data declared as cross-level targets, with a label
    /// for diagnostics. Entries still here when loading finishes belong to
    /// objects that failed to materialize.
    declared: Vec<(ObjectGuid, String)>,
}

impl Level {
    /// Creates an empty level with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            exports: AHashMap::new(),
            declared: Vec::new(),
        }
    }

    /// The level's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records an object as belonging to this level.
    pub fn add_object(&mut self, handle: ObjectHandle) {
        self.objects.push(handle);
    }

    /// Handles of all objects spawned into this level.
    pub fn objects(&self) -> &[ObjectHandle] {
        &self.objects
    }

    /// Declares that the level's data names `guid` as a cross-level target.
    ///
    /// Called while the level is being decoded, before the object itself may
    /// exist. A matching [`register_export`](Level::register_export) clears
    /// the declaration; declarations still outstanding when the level
    /// finishes loading are reported as targets that never loaded.
    pub fn declare_export(&mut self, guid: ObjectGuid, label: impl Into<String>) {
        self.declared.push((guid, label.into()));
    }

    /// Registers a loaded object under the GUID it exports.
    pub fn register_export(&mut self, guid: ObjectGuid, handle: ObjectHandle) {
        self.declared.retain(|(declared, _)| *declared != guid);
        if let Some(previous) = self.exports.insert(guid, handle) {
            if previous != handle {
                log::warn!(
                    "level '{}': export {guid} re-registered from {previous} to {handle}",
                    self.name
                );
            }
        }
    }

    /// Looks up the handle exported under `guid`, if loaded.
    pub fn export(&self, guid: ObjectGuid) -> Option<ObjectHandle> {
        self.exports.get(&guid).copied()
    }

    /// Iterates over all (GUID, handle) export pairs.
    pub fn exports(&self) -> impl Iterator<Item = (ObjectGuid, ObjectHandle)> + '_ {
        self.exports.iter().map(|(g, h)| (*g, *h))
    }

    /// Drains the declarations that never got a matching export.
    pub fn take_missing_exports(&mut self) -> Vec<(ObjectGuid, String)> {
        std::mem::take(&mut self.declared)
    }

    /// Number of exported targets currently registered.
    pub fn export_count(&self) -> usize {
        self.exports.len()
    }

    /// Empties all bookkeeping. Called after the level's objects have been
    /// removed from the store, when every recorded handle is stale.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.exports.clear();
        self.declared.clear();
    }
}
