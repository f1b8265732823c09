// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed values that automatically record changes for backtracking.

use super::{Trail, TrailRestore};
use std::marker::PhantomData;

/// A value that can be stored in a trail slot.
///
/// Old values are kept on the trail as raw `u64` words, so only small `Copy`
/// types with a lossless word encoding are supported.
pub trait TrailValue: Copy {
    /// Encode the value as a trail word.
    fn to_word(self) -> u64;

    /// Decode a word produced by [`TrailValue::to_word`].
    fn from_word(word: u64) -> Self;
}

macro_rules! impl_trail_value {
    ($($ty:ty),*) => {
        $(
            impl TrailValue for $ty {
                fn to_word(self) -> u64 {
                    self as u64
                }

                fn from_word(word: u64) -> Self {
                    word as $ty
                }
            }
        )*
    };
}

impl_trail_value!(u8, u16, u32, u64, usize);

impl TrailValue for bool {
    fn to_word(self) -> u64 {
        self as u64
    }

    fn from_word(word: u64) -> Self {
        word != 0
    }
}

/// Handle to a trailed slot holding a `T`.
///
/// Handles are plain indices into a [`TrailedStore`]; they are cheap to copy
/// and carry no borrow, so a constraint can keep them in its registers for the
/// whole generation run.
///
/// # Example
///
/// ```
/// use seqgen::trail::{Trail, TrailedStore};
///
/// let mut trail = Trail::new();
/// let mut store = TrailedStore::new();
/// let value = store.register(42u32);
///
/// let checkpoint = trail.checkpoint();
/// store.set(&mut trail, value, 100);
/// assert_eq!(store.get(value), 100);
///
/// trail.rewind_to(checkpoint, &mut store);
/// assert_eq!(store.get(value), 42);
/// ```
#[derive(Debug)]
pub struct Trailed<T: TrailValue> {
    id: usize,
    _phantom: PhantomData<T>,
}

impl<T: TrailValue> Clone for Trailed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TrailValue> Copy for Trailed<T> {}

impl<T: TrailValue> Trailed<T> {
    fn new(id: usize) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the slot ID for this trailed value.
    pub fn id(&self) -> usize {
        self.id
    }
}

/// A contiguous block of trailed slots, e.g. a bound stack or a used-flag array.
#[derive(Debug)]
pub struct TrailedArray<T: TrailValue> {
    base: usize,
    len: usize,
    _phantom: PhantomData<T>,
}

impl<T: TrailValue> Clone for TrailedArray<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TrailValue> Copy for TrailedArray<T> {}

impl<T: TrailValue> TrailedArray<T> {
    /// Number of slots in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the array has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle to the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> Trailed<T> {
        assert!(
            index < self.len,
            "Trailed array index out of bounds: {} (len {})",
            index,
            self.len
        );
        Trailed::new(self.base + index)
    }
}

/// Backing storage for every trailed slot of one generation run.
///
/// Slots are allocated by `register`/`register_array` and written through
/// `set`, which records the previous word on the trail.
#[derive(Debug, Default)]
pub struct TrailedStore {
    words: Vec<u64>,
}

impl TrailedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new trailed slot with an initial value.
    pub fn register<T: TrailValue>(&mut self, initial_value: T) -> Trailed<T> {
        let id = self.words.len();
        self.words.push(initial_value.to_word());
        Trailed::new(id)
    }

    /// Register `len` consecutive slots, all holding `initial_value`.
    pub fn register_array<T: TrailValue>(&mut self, len: usize, initial_value: T) -> TrailedArray<T> {
        let base = self.words.len();
        self.words.resize(base + len, initial_value.to_word());
        TrailedArray {
            base,
            len,
            _phantom: PhantomData,
        }
    }

    /// Get the current value of a slot.
    pub fn get<T: TrailValue>(&self, handle: Trailed<T>) -> T {
        T::from_word(self.words[handle.id])
    }

    /// Set a slot, recording the old value in the trail.
    pub fn set<T: TrailValue>(&mut self, trail: &mut Trail, handle: Trailed<T>, new_value: T) {
        let slot = &mut self.words[handle.id];
        trail.record_change(handle.id, *slot);
        *slot = new_value.to_word();
    }

    /// Set the value only if it differs from the current value.
    ///
    /// Returns true if the value was changed, false if it was already correct.
    pub fn maybe_set<T: TrailValue>(
        &mut self,
        trail: &mut Trail,
        handle: Trailed<T>,
        new_value: T,
    ) -> bool {
        if self.words[handle.id] != new_value.to_word() {
            self.set(trail, handle, new_value);
            true
        } else {
            false
        }
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no slot has been registered.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Raw words of every slot, in registration order.
    pub fn snapshot(&self) -> Vec<u64> {
        self.words.clone()
    }
}

impl TrailRestore for TrailedStore {
    fn restore(&mut self, id: usize, old_value: u64) {
        self.words[id] = old_value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailed_u64_basic() {
        let mut trail = Trail::new();
        let mut store = TrailedStore::new();
        let value = store.register(42u64);

        assert_eq!(store.get(value), 42);
        assert_eq!(value.id(), 0);

        store.set(&mut trail, value, 100);
        assert_eq!(store.get(value), 100);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_trailed_maybe_set() {
        let mut trail = Trail::new();
        let mut store = TrailedStore::new();
        let value = store.register(42u64);

        assert!(!store.maybe_set(&mut trail, value, 42));
        assert_eq!(trail.len(), 0);

        assert!(store.maybe_set(&mut trail, value, 100));
        assert_eq!(trail.len(), 1);
        assert_eq!(store.get(value), 100);
    }

    #[test]
    fn test_trailed_different_types() {
        let mut store = TrailedStore::new();

        let v1 = store.register(42u8);
        let v2 = store.register(100u16);
        let v3 = store.register(1000u32);
        let v4 = store.register(10000usize);
        let v5 = store.register(true);

        assert_eq!(
            [v1.id(), v2.id(), v3.id(), v4.id(), v5.id()],
            [0, 1, 2, 3, 4]
        );
        assert_eq!(store.get(v1), 42);
        assert_eq!(store.get(v4), 10000);
        assert!(store.get(v5));
    }

    #[test]
    fn test_bool_restore() {
        let mut trail = Trail::new();
        let mut store = TrailedStore::new();
        let flag = store.register(false);

        let checkpoint = trail.checkpoint();
        store.set(&mut trail, flag, true);
        assert!(store.get(flag));

        trail.rewind_to(checkpoint, &mut store);
        assert!(!store.get(flag));
    }

    #[test]
    fn test_array_slots_are_contiguous() {
        let mut store = TrailedStore::new();
        let before = store.register(7usize);
        let array = store.register_array(3, 0usize);
        let after = store.register(9usize);

        assert_eq!(array.len(), 3);
        assert_eq!(array.at(0).id(), before.id() + 1);
        assert_eq!(array.at(2).id() + 1, after.id());
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_array_rewind_restores_every_slot() {
        let mut trail = Trail::new();
        let mut store = TrailedStore::new();
        let array = store.register_array(4, 0u32);
        let initial = store.snapshot();

        let checkpoint = trail.checkpoint();
        for i in 0..array.len() {
            store.set(&mut trail, array.at(i), i as u32 + 1);
        }
        store.set(&mut trail, array.at(1), 99);
        assert_eq!(store.get(array.at(1)), 99);

        trail.rewind_to(checkpoint, &mut store);
        assert_eq!(store.snapshot(), initial);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_array_index_out_of_bounds() {
        let mut store = TrailedStore::new();
        let array = store.register_array(2, false);
        let _ = array.at(2);
    }
}
