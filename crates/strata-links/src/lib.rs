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

//! # Strata Links
//!
//! The cross-level reference subsystem: keeps references between objects
//! in different streaming levels valid across load/unload cycles.
//!
//! A reference from object B (level 1) to object A (level 2) is stored on
//! disk as A's GUID. At load time the reference is either bound directly
//! (A already in memory) or filed as a *delayed fixup* keyed by the GUID.
//! When A's level streams in, every fixup waiting on A's GUID is resolved:
//! B's reference slot is written and the fixup moves to the *active* side,
//! keyed by A's handle. When A's level streams out again, the active
//! entries are walked in reverse: B's slot is cleared (no dangling handle)
//! and the fixup is re-filed under A's GUID, ready for the next load.
//!
//! All operations are synchronous and single-threaded; the subsystem owns
//! no objects, only handle/GUID associations. The [`ReferenceContext`]
//! carries two parallel managers so play-in-editor duplicates, which share
//! GUIDs with the authoring-time objects, never collide with them.

#![warn(missing_docs)]

mod context;
mod diagnostics;
mod manager;
mod resolve;
mod streaming;
mod teardown;


pub use context::{EngineMode, ReferenceContext, ReferenceDomain};
pub use diagnostics::{ManagerMemoryUsage, MemoryReport};
pub use manager::ReferenceManager;
pub use resolve::{bind_loaded_reference, register_pending_reference, resolve_target_loaded};
pub use streaming::{level_loaded, unload_level};
pub use teardown::retract_target;
