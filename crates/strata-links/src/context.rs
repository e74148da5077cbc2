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

//! Manager-pair context and the selection protocol.

use strata_core::{ObjectGuid, ObjectHandle};

use crate::diagnostics::MemoryReport;
use crate::manager::ReferenceManager;

/// Whether the process is a plain game or a full editor session.
///
/// Fixed at context construction. Editor-only surfaces (the
/// play-in-editor manager, save-pipeline GUID enumeration) are programmer
/// errors to touch in game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    /// Standalone game: one world, no duplicates, no save pipeline.
    Game,
    /// Editor session: authoring world plus optional play-in-editor world.
    Editor,
}

/// Which of the two parallel managers an operation routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceDomain {
    /// The authoring-time ("real") objects.
    Standard,
    /// Play-in-editor duplicates. These share GUIDs with the standard
    /// objects but are physically distinct, so they need separate books.
    PlayInEditor,
}

/// Owns the standard and play-in-editor [`ReferenceManager`]s and routes
/// operations between them.
///
/// This is a plain value passed explicitly to loader and teardown call
/// sites; there is no process-global instance. The caller that starts or
/// ends a play-in-editor session is the one that switches domains, and
/// destruction paths that cannot know the right domain up front select it
/// per object via [`switch_to_manager_with_object`].
///
/// [`switch_to_manager_with_object`]: ReferenceContext::switch_to_manager_with_object
pub struct ReferenceContext {
    mode: EngineMode,
    active: ReferenceDomain,
    standard: ReferenceManager,
    play_in_editor: ReferenceManager,
    shutting_down: bool,
}

impl ReferenceContext {
    /// Creates a context with both managers empty and the standard domain
    /// active.
    pub fn new(mode: EngineMode) -> Self {
        Self {
            mode,
            active: ReferenceDomain::Standard,
            standard: ReferenceManager::new(),
            play_in_editor: ReferenceManager::new(),
            shutting_down: false,
        }
    }

    /// The engine mode this context was built for.
    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    /// The currently active domain.
    pub fn active_domain(&self) -> ReferenceDomain {
        self.active
    }

    /// Routes subsequent operations to the standard manager.
    pub fn switch_to_standard(&mut self) {
        self.active = ReferenceDomain::Standard;
    }

    /// Routes subsequent operations to the play-in-editor manager.
    ///
    /// # Panics
    ///
    /// Panics outside [`EngineMode::Editor`]; a game build has no
    /// play-in-editor world, so reaching for its manager is a bug in the
    /// caller.
    pub fn switch_to_play_in_editor(&mut self) {
        assert!(
            self.mode == EngineMode::Editor,
            "play-in-editor reference manager requested outside editor mode"
        );
        self.active = ReferenceDomain::PlayInEditor;
    }

    /// Activates whichever manager registered `object` as a GUID target,
    /// defaulting to the standard manager when neither did.
    ///
    /// During garbage collection of a play-in-editor session the globally
    /// chosen domain may not be the one that registered the object being
    /// destroyed: the authoring object and its duplicate share a GUID but
    /// live in different managers. Selection must therefore be driven by
    /// the object, not by the session state.
    pub fn switch_to_manager_with_object(&mut self, object: ObjectHandle) {
        self.active = if self.standard.contains_target(object) {
            ReferenceDomain::Standard
        } else if self.play_in_editor.contains_target(object) {
            ReferenceDomain::PlayInEditor
        } else {
            ReferenceDomain::Standard
        };
    }

    /// The manager for an explicit domain.
    pub fn manager(&self, domain: ReferenceDomain) -> &ReferenceManager {
        match domain {
            ReferenceDomain::Standard => &self.standard,
            ReferenceDomain::PlayInEditor => &self.play_in_editor,
        }
    }

    /// The manager for an explicit domain, mutably.
    pub fn manager_mut(&mut self, domain: ReferenceDomain) -> &mut ReferenceManager {
        match domain {
            ReferenceDomain::Standard => &mut self.standard,
            ReferenceDomain::PlayInEditor => &mut self.play_in_editor,
        }
    }

    /// The currently active manager.
    pub fn active_manager(&self) -> &ReferenceManager {
        self.manager(self.active)
    }

    /// The currently active manager, mutably.
    pub fn active_manager_mut(&mut self) -> &mut ReferenceManager {
        self.manager_mut(self.active)
    }

    /// Marks the process as shutting down for good.
    ///
    /// From here on, teardown is skipped entirely: nothing will ever be
    /// reloaded, and the store is about to be dropped wholesale.
    pub fn begin_shutdown(&mut self) {
        self.shutting_down = true;
    }

    /// Whether unconditional shutdown has begun.
    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down
    }

    /// Enumerates (target, GUID) pairs of the active manager for the
    /// editor save pipeline, which serializes references as GUIDs.
    ///
    /// # Panics
    ///
    /// Panics in [`EngineMode::Game`]; the save pipeline does not exist
    /// there.
    pub fn target_guid_entries(&self) -> impl Iterator<Item = (ObjectHandle, ObjectGuid)> + '_ {
        assert!(
            self.mode == EngineMode::Editor,
            "target GUID enumeration is an editor-only surface"
        );
        self.active_manager().target_guid_entries()
    }

    /// Element counts and approximate byte footprint of both managers.
    /// Read-only introspection for diagnostics tooling.
    pub fn dump_memory_usage(&self) -> MemoryReport {
        MemoryReport {
            standard: self.standard.memory_usage(),
            play_in_editor: self.play_in_editor.memory_usage(),
        }
    }
}
