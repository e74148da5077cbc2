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

//! # Strata Core
//!
//! Foundational crate containing the core types and interface contracts
//! shared by the streamed-world object store and the cross-level
//! reference subsystem.

#![warn(missing_docs)]

pub mod guid;
pub mod handle;
pub mod object;
pub mod slot;

pub use guid::ObjectGuid;
pub use handle::ObjectHandle;
pub use object::LevelObject;
pub use slot::{ReferenceFixup, SlotIndex};
