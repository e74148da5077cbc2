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

//! Read-only memory introspection for the reference managers.

use std::fmt;

/// A snapshot of one manager's map sizes.
///
/// `approx_bytes` is an estimate from entry counts and entry sizes; it
/// ignores hash-map capacity slack and allocator overhead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerMemoryUsage {
    /// Entries in the target-to-GUID reverse lookup.
    pub targets: usize,
    /// GUID buckets holding unresolved fixups.
    pub pending_buckets: usize,
    /// Total unresolved fixups across all buckets.
    pub pending_fixups: usize,
    /// Target buckets holding resolved fixups.
    pub active_buckets: usize,
    /// Total resolved fixups across all buckets.
    pub active_fixups: usize,
    /// Approximate byte footprint of the three maps.
    pub approx_bytes: usize,
}

impl fmt::Display for ManagerMemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} targets, {} pending fixups in {} buckets, {} active fixups in {} buckets, ~{} bytes",
            self.targets,
            self.pending_fixups,
            self.pending_buckets,
            self.active_fixups,
            self.active_buckets,
            self.approx_bytes
        )
    }
}

/// Memory usage of both managers of a [`ReferenceContext`].
///
/// [`ReferenceContext`]: crate::ReferenceContext
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryReport {
    /// The standard (authoring-world) manager.
    pub standard: ManagerMemoryUsage,
    /// The play-in-editor manager.
    pub play_in_editor: ManagerMemoryUsage,
}

impl fmt::Display for MemoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "standard:       {}", self.standard)?;
        write!(f, "play-in-editor: {}", self.play_in_editor)
    }
}
