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

//! # Strata World
//!
//! The owning data layer of the streamed world: a generational
//! [`ObjectStore`] that holds every live object, and [`Level`] bookkeeping
//! that groups objects into independently streamable units with their
//! export GUID tables.
//!
//! This crate is deliberately passive. The cross-level reference protocol
//! (resolution, teardown, manager selection) lives in `strata-links` and
//! drives the store; the store only guarantees generation-checked access
//! and typed reference slots.

#![warn(missing_docs)]

mod error;
mod level;
mod store;


pub use error::WorldError;
pub use level::Level;
pub use store::ObjectStore;
