// Copyright 2026 the Vestibule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vestibule_stage --heading-base-level=0

//! Vestibule Stage: frame-tick fan-out over mounted animations.
//!
//! A [`Stage`] owns the animated state of every currently-mounted view and
//! connects it to the host rendering loop: each frame the host calls
//! [`Stage::tick`] once with the elapsed-time delta, and the stage advances
//! every live entry. Anything implementing [`Animate`] can be mounted — an
//! entrance, press feedback, or a whole screen that forwards the tick to its
//! members.
//!
//! Entries are addressed by [`MountId`], a copyable generational handle.
//! Unmounting bumps the slot's generation, so a stale handle held past its
//! view's destruction can never read or mutate a later tenant of the same
//! slot: every operation on a stale handle is a quiet no-op. This is what
//! makes mid-animation teardown safe — the tick simply stops reaching state
//! that no longer exists, with no error and no leak.
//!
//! Scheduling is single-threaded and cooperative. The stage has no clock of
//! its own and never blocks; mounted entries are fully independent, with no
//! ordering between their completions.
//!
//! ## Minimal example
//!
//! ```
//! use vestibule_stage::Stage;
//! use vestibule_value::AnimatedValue;
//!
//! let mut stage = Stage::new();
//!
//! let mut fade = AnimatedValue::new(0.0);
//! fade.animate_to(1.0, 800.0)?;
//! let id = stage.mount(fade);
//!
//! stage.tick(400.0);
//! assert_eq!(stage.get(id).map(AnimatedValue::read), Some(0.5));
//!
//! // Unmounting mid-flight is fine; later ticks skip the slot.
//! stage.unmount(id);
//! stage.tick(400.0);
//! assert!(stage.get(id).is_none());
//! # Ok::<(), vestibule_value::ValueError>(())
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;
use vestibule_value::Animate;

/// Handle to an entry mounted on a [`Stage`].
///
/// Copyable and cheap to store. A handle is invalidated by
/// [`Stage::unmount`]; operations through an invalidated handle are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MountId {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<T>,
}

/// Owner of the animated state of every mounted view.
///
/// Slots are reused after unmount with a bumped generation, so the arena
/// never grows beyond the peak number of simultaneously mounted entries.
#[derive(Debug)]
pub struct Stage<T> {
    slots: Vec<Slot<T>>,
    free: SmallVec<[u32; 8]>,
    len: usize,
}

impl<T> Stage<T> {
    /// Creates an empty stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: SmallVec::new(),
            len: 0,
        }
    }

    /// Mounts an entry, returning its handle.
    pub fn mount(&mut self, entry: T) -> MountId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(entry);
            return MountId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            entry: Some(entry),
        });
        MountId {
            index,
            generation: 0,
        }
    }

    /// Unmounts an entry, returning it.
    ///
    /// A stale or already-unmounted handle returns `None` without touching
    /// anything. The slot's generation is bumped so the handle can never
    /// observe a later tenant.
    pub fn unmount(&mut self, id: MountId) -> Option<T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(entry)
    }

    /// Returns the entry for `id`, or `None` for a stale handle.
    #[must_use]
    pub fn get(&self, id: MountId) -> Option<&T> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    /// Mutable access to the entry for `id`, or `None` for a stale handle.
    #[must_use]
    pub fn get_mut(&mut self, id: MountId) -> Option<&mut T> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entry.as_mut()
    }

    /// Returns `true` while `id` refers to a mounted entry.
    #[must_use]
    pub fn contains(&self, id: MountId) -> bool {
        self.get(id).is_some()
    }

    /// Number of mounted entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Animate> Stage<T> {
    /// Delivers one frame tick: advances every mounted entry by `delta_ms`.
    ///
    /// Empty slots (views destroyed mid-animation) are skipped. Never fails.
    pub fn tick(&mut self, delta_ms: f64) {
        for slot in &mut self.slots {
            if let Some(entry) = slot.entry.as_mut() {
                entry.advance(delta_ms);
            }
        }
    }
}

impl<T> Default for Stage<T> {
    fn default() -> Self {
        Self::new()
    }
}
