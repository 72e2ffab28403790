//! The open-addressing table underneath [`HashMap`](crate::HashMap).
//!
//! Keys are hashed by the caller. The table maps each raw hash to a home slot
//! with [`slot_index`], probes linearly from there, and closes the gap left by
//! a removal with backward shifting.

use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;

use crate::error::InsertError;
use crate::error::TryReserveError;

/// ⌊2^32 / φ⌋, the 32-bit golden-ratio multiplier.
const HASH_CONSTANT: u32 = 0x9E37_79B9;

/// Slot count of a freshly created table.
const MIN_CAPACITY: u32 = 8;

/// Largest table a 32-bit slot index with a non-zero shift can address.
const MAX_CAPACITY: u32 = 1 << 31;

/// Maps a raw 32-bit hash to a slot of a table with `32 - shift` index bits.
///
/// The multiplication spreads the entropy of the raw hash into the high bits
/// and the shift keeps exactly as many of them as the table needs, so the
/// result always lies in `0..capacity` for `capacity = 1 << (32 - shift)`.
/// No division is involved, and hash functions with weak low bits still
/// scatter across the table.
///
/// # Examples
///
/// ```rust
/// use fib_map::hash_table::slot_index;
///
/// // An 8-slot table keeps the top three bits.
/// for hash in [0, 1, 42, u32::MAX] {
///     assert!(slot_index(hash, 29) < 8);
/// }
/// assert_eq!(slot_index(0, 29), 0);
/// ```
#[inline(always)]
pub fn slot_index(hash: u32, shift: u32) -> u32 {
    hash.wrapping_mul(HASH_CONSTANT) >> shift
}

#[inline(always)]
fn shift_for(capacity: u32) -> u32 {
    32 - capacity.trailing_zeros()
}

/// Smallest power-of-two slot count whose load factor covers `entries`.
fn capacity_for(entries: usize) -> Result<u32, TryReserveError> {
    let slots = entries
        .checked_mul(2)
        .and_then(usize::checked_next_power_of_two)
        .ok_or(TryReserveError::CapacityOverflow)?
        .max(MIN_CAPACITY as usize);

    if slots > MAX_CAPACITY as usize {
        return Err(TryReserveError::CapacityOverflow);
    }
    Ok(slots as u32)
}

/// Unwraps the result of a fallible allocation the way `alloc` collections
/// do for their infallible entry points.
pub(crate) fn infallible<T>(result: Result<T, TryReserveError>) -> T {
    match result {
        Ok(value) => value,
        Err(TryReserveError::CapacityOverflow) => panic!("hash table capacity overflow"),
        Err(TryReserveError::AllocError { layout }) => handle_alloc_error(layout),
    }
}

/// An active slot. Inactive slots are `None` in the cell array.
#[derive(Clone)]
struct Cell<K, V> {
    /// Cached home slot, `slot_index(raw_hash, shift)` for the current shift.
    hash: u32,
    key: K,
    value: V,
}

type Cells<K, V> = Box<[Option<Cell<K, V>>]>;

fn allocate_cells<K, V>(capacity: u32) -> Result<Cells<K, V>, TryReserveError> {
    let len = capacity as usize;
    let layout = Layout::array::<Option<Cell<K, V>>>(len)
        .map_err(|_| TryReserveError::CapacityOverflow)?;

    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| TryReserveError::AllocError { layout })?;
    cells.resize_with(len, || None);

    Ok(cells.into_boxed_slice())
}

/// Rewrites cached homes for a larger table in place.
///
/// `cells[..done]` already hold homes for the new shift. Dropping the guard
/// shifts them back by `bits`, which recovers the homes for the old shift
/// since both are prefixes of the same product.
struct Rehome<'a, K, V> {
    cells: &'a mut [Option<Cell<K, V>>],
    done: usize,
    bits: u32,
}

impl<K, V> Drop for Rehome<'_, K, V> {
    fn drop(&mut self) {
        for cell in self.cells[..self.done].iter_mut().flatten() {
            cell.hash >>= self.bits;
        }
    }
}

/// Outcome of a probe for a key.
enum Probe {
    /// The key lives at this index.
    Found(usize),
    /// The key is absent; this is the first inactive index of its run.
    Vacant(usize),
}

/// Statistics about the layout of a table.
///
/// Available in tests and with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries currently in the table
    pub populated: usize,
    /// Number of slots in the cell array
    pub capacity: usize,
    /// Entry count that triggers the next resize
    pub load_factor: usize,
    /// Fraction of slots holding an entry
    pub occupancy: f64,
    /// Longest distance of any entry from its home slot
    pub max_probe: usize,
    /// Average distance of an entry from its home slot
    pub mean_probe: f64,
    /// Bytes allocated for the cell array
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Statistics ===");
        println!(
            "Population: {}/{} slots ({:.2}% occupied, resize at {})",
            self.populated,
            self.capacity,
            self.occupancy * 100.0,
            self.load_factor
        );
        println!(
            "Probe distance: max {}, mean {:.3}",
            self.max_probe, self.mean_probe
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// An open-addressing hash table with linear probing and Fibonacci hashing.
///
/// `HashTable<K, V>` stores keys and values inline in a contiguous array of
/// cells whose length is always a power of two. Like `hashbrown`'s raw table,
/// it does not hash keys itself: every operation takes the raw 32-bit hash
/// of the key, plus a comparison for the stored keys. Operations that may
/// grow the table also take a `hasher` so every stored key can be rehashed
/// into the larger array.
///
/// The table grows once the number of entries reaches half of the slot count
/// and never shrinks. Removal uses backward shifting, so the table never
/// contains tombstones.
///
/// Most users want [`HashMap`](crate::HashMap), which binds a hasher and a
/// miss value to a table.
///
/// ## Example
///
/// ```rust
/// use fib_map::hash_table::HashTable;
///
/// fn hash(key: &u32) -> u32 {
///     key.wrapping_mul(31)
/// }
///
/// let mut table = HashTable::new();
/// assert!(table.add(hash(&7), 7u32, "seven", |a, b| a == b, hash));
/// assert!(!table.add(hash(&7), 7u32, "SEVEN", |a, b| a == b, hash));
/// assert_eq!(table.get(hash(&7), |k| *k == 7), Some(&"seven"));
///
/// assert!(table.remove(hash(&7), |k| *k == 7));
/// assert!(table.is_empty());
/// ```
#[derive(Clone)]
pub struct HashTable<K, V> {
    cells: Cells<K, V>,
    count: u32,
    capacity: u32,
    load_factor: u32,
    shift: u32,
}

impl<K, V> Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::format;
        use alloc::string::ToString;

        f.debug_struct("HashTable")
            .field(
                "cells",
                &self
                    .cells
                    .chunks(8)
                    .map(|row| {
                        row.iter()
                            .map(|cell| match cell {
                                Some(cell) => format!("{:02x}", cell.hash),
                                None => "..".to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>(),
            )
            .field("count", &self.count)
            .field("capacity", &self.capacity)
            .field("load_factor", &self.load_factor)
            .field("shift", &self.shift)
            .finish()
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table with 8 slots.
    ///
    /// # Panics
    ///
    /// Aborts through [`handle_alloc_error`] if the cell array cannot be
    /// allocated. Use [`try_new`](Self::try_new) to handle that case.
    pub fn new() -> Self {
        infallible(Self::try_new())
    }

    /// Creates an empty table with 8 slots, reporting allocation failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::hash_table::HashTable;
    ///
    /// let table: HashTable<u32, u32> = HashTable::try_new().unwrap();
    /// assert_eq!(table.capacity(), 8);
    /// assert_eq!(table.load_factor(), 4);
    /// ```
    pub fn try_new() -> Result<Self, TryReserveError> {
        Self::try_with_slots(MIN_CAPACITY)
    }

    /// Creates an empty table that holds at least `capacity` entries before
    /// its first resize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::hash_table::HashTable;
    ///
    /// let table: HashTable<u32, u32> = HashTable::with_capacity(100);
    /// assert!(table.load_factor() >= 100);
    /// assert_eq!(table.capacity(), 256);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::try_with_capacity(capacity))
    }

    /// Fallible version of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Self::try_with_slots(capacity_for(capacity)?)
    }

    fn try_with_slots(capacity: u32) -> Result<Self, TryReserveError> {
        debug_assert!(capacity.is_power_of_two() && capacity >= MIN_CAPACITY);

        Ok(Self {
            cells: allocate_cells(capacity)?,
            count: 0,
            capacity,
            load_factor: capacity / 2,
            shift: shift_for(capacity),
        })
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots in the cell array.
    ///
    /// Always a power of two, and at least 8.
    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    /// Returns the entry count at which the next insertion grows the table.
    ///
    /// This is half of [`capacity`](Self::capacity).
    pub fn load_factor(&self) -> usize {
        self.load_factor as usize
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.capacity as usize - 1
    }

    #[inline(always)]
    fn home(&self, hash: u32) -> u32 {
        slot_index(hash, self.shift)
    }

    /// Removes every entry, keeping the current capacity.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.count = 0;
    }

    /// Scans the run starting at `home` for a key accepted by `eq`.
    #[inline]
    fn probe(&self, home: u32, eq: impl Fn(&K) -> bool) -> Probe {
        let mask = self.mask();
        let mut index = home as usize;

        // The load factor keeps at least half of the slots inactive, so the
        // scan always terminates.
        while let Some(cell) = &self.cells[index] {
            if cell.hash == home && eq(&cell.key) {
                return Probe::Found(index);
            }
            index = (index + 1) & mask;
        }

        Probe::Vacant(index)
    }

    #[inline]
    fn find_index(&self, hash: u32, eq: impl Fn(&K) -> bool) -> Option<usize> {
        match self.probe(self.home(hash), eq) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) => None,
        }
    }

    fn cell(&self, index: usize) -> &Cell<K, V> {
        match &self.cells[index] {
            Some(cell) => cell,
            None => unreachable!("probe returned inactive slot {index}"),
        }
    }

    fn cell_mut(&mut self, index: usize) -> &mut Cell<K, V> {
        match &mut self.cells[index] {
            Some(cell) => cell,
            None => unreachable!("probe returned inactive slot {index}"),
        }
    }

    /// Writes a new entry into an inactive slot.
    #[inline]
    fn occupy(&mut self, index: usize, home: u32, key: K, value: V) {
        debug_assert!(self.cells[index].is_none());
        self.cells[index] = Some(Cell {
            hash: home,
            key,
            value,
        });
        self.count += 1;
    }

    /// Grows the table if it holds `load_factor` entries.
    #[inline]
    fn grow_if_full(&mut self, hasher: impl Fn(&K) -> u32) -> Result<(), TryReserveError> {
        if self.count == self.load_factor {
            let capacity = self
                .capacity
                .checked_mul(2)
                .filter(|&capacity| capacity <= MAX_CAPACITY)
                .ok_or(TryReserveError::CapacityOverflow)?;
            self.resize(capacity, hasher)?;
        }
        Ok(())
    }

    /// Moves every entry into a freshly allocated array of `capacity` slots.
    ///
    /// On allocation failure the table is left untouched.
    #[cold]
    fn resize(
        &mut self,
        capacity: u32,
        hasher: impl Fn(&K) -> u32,
    ) -> Result<(), TryReserveError> {
        debug_assert!(capacity.is_power_of_two() && capacity > self.capacity);

        let mut new_cells = match allocate_cells(capacity) {
            Ok(cells) => cells,
            Err(err) => {
                log::debug!(
                    "failed to grow hash table from {} to {} slots: {}",
                    self.capacity,
                    capacity,
                    err
                );
                return Err(err);
            }
        };

        // Every call into `hasher` happens before any entry moves. If it
        // unwinds, the guard restores the homes rewritten so far and the table
        // keeps its old array.
        let shift = shift_for(capacity);
        let mut rehome = Rehome {
            cells: &mut self.cells,
            done: 0,
            bits: self.shift - shift,
        };
        while rehome.done < rehome.cells.len() {
            if let Some(cell) = &mut rehome.cells[rehome.done] {
                cell.hash = slot_index(hasher(&cell.key), shift);
            }
            rehome.done += 1;
        }
        rehome.done = 0;
        drop(rehome);

        let mask = capacity as usize - 1;
        for cell in self.cells.iter_mut().filter_map(Option::take) {
            let mut index = cell.hash as usize;
            while new_cells[index].is_some() {
                index = (index + 1) & mask;
            }
            new_cells[index] = Some(cell);
        }

        self.cells = new_cells;
        let old_capacity = core::mem::replace(&mut self.capacity, capacity);
        self.load_factor = capacity / 2;
        self.shift = shift;

        log::trace!(
            "resized hash table from {} to {} slots ({} entries)",
            old_capacity,
            capacity,
            self.count
        );
        Ok(())
    }

    /// Reserves room for at least `additional` more entries before the next
    /// resize.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows, and aborts through
    /// [`handle_alloc_error`] if the allocation fails.
    pub fn reserve(&mut self, additional: usize, hasher: impl Fn(&K) -> u32) {
        infallible(self.try_reserve(additional, hasher));
    }

    /// Fallible version of [`reserve`](Self::reserve). On error the table is
    /// unchanged.
    pub fn try_reserve(
        &mut self,
        additional: usize,
        hasher: impl Fn(&K) -> u32,
    ) -> Result<(), TryReserveError> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(TryReserveError::CapacityOverflow)?;
        if required > self.load_factor() {
            self.resize(capacity_for(required)?, hasher)?;
        }
        Ok(())
    }

    /// Inserts a new entry unless an equal key is already present.
    ///
    /// Returns `true` if the entry was inserted. If `eq` matches a stored key,
    /// returns `false` and leaves the stored value untouched; the passed key
    /// and value are dropped.
    ///
    /// `hash` must be `hasher(&key)`, and `eq(stored, &key)` must agree with
    /// it: keys that compare equal must hash equally.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the table has to grow and cannot. See
    /// [`try_add`](Self::try_add).
    pub fn add(
        &mut self,
        hash: u32,
        key: K,
        value: V,
        eq: impl Fn(&K, &K) -> bool,
        hasher: impl Fn(&K) -> u32,
    ) -> bool {
        match self.try_add(hash, key, value, eq, hasher) {
            Ok(inserted) => inserted,
            Err(err) => infallible(Err(err.error().clone())),
        }
    }

    /// Fallible version of [`add`](Self::add).
    ///
    /// If the table is full and cannot grow, returns the key and value inside
    /// the error and leaves the table unchanged.
    pub fn try_add(
        &mut self,
        hash: u32,
        key: K,
        value: V,
        eq: impl Fn(&K, &K) -> bool,
        hasher: impl Fn(&K) -> u32,
    ) -> Result<bool, InsertError<K, V>> {
        if let Err(err) = self.grow_if_full(hasher) {
            return Err(InsertError::new(err, key, value));
        }

        let home = self.home(hash);
        match self.probe(home, |stored| eq(stored, &key)) {
            Probe::Found(_) => Ok(false),
            Probe::Vacant(index) => {
                self.occupy(index, home, key, value);
                Ok(true)
            }
        }
    }

    /// Inserts an entry, overwriting the value if the key is present.
    ///
    /// Returns the previous value when an existing entry was updated, in which
    /// case the stored key is kept and the passed key is dropped.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the table has to grow and cannot. See
    /// [`try_set`](Self::try_set).
    pub fn set(
        &mut self,
        hash: u32,
        key: K,
        value: V,
        eq: impl Fn(&K, &K) -> bool,
        hasher: impl Fn(&K) -> u32,
    ) -> Option<V> {
        match self.try_set(hash, key, value, eq, hasher) {
            Ok(previous) => previous,
            Err(err) => infallible(Err(err.error().clone())),
        }
    }

    /// Fallible version of [`set`](Self::set).
    pub fn try_set(
        &mut self,
        hash: u32,
        key: K,
        value: V,
        eq: impl Fn(&K, &K) -> bool,
        hasher: impl Fn(&K) -> u32,
    ) -> Result<Option<V>, InsertError<K, V>> {
        if let Err(err) = self.grow_if_full(hasher) {
            return Err(InsertError::new(err, key, value));
        }

        let home = self.home(hash);
        match self.probe(home, |stored| eq(stored, &key)) {
            Probe::Found(index) => Ok(Some(core::mem::replace(
                &mut self.cell_mut(index).value,
                value,
            ))),
            Probe::Vacant(index) => {
                self.occupy(index, home, key, value);
                Ok(None)
            }
        }
    }

    /// Returns the value of the entry whose key is accepted by `eq`.
    ///
    /// Never modifies or grows the table.
    pub fn get(&self, hash: u32, eq: impl Fn(&K) -> bool) -> Option<&V> {
        self.get_key_value(hash, eq).map(|(_, value)| value)
    }

    /// Returns the stored key and value of the entry accepted by `eq`.
    pub fn get_key_value(&self, hash: u32, eq: impl Fn(&K) -> bool) -> Option<(&K, &V)> {
        let index = self.find_index(hash, eq)?;
        let cell = self.cell(index);
        Some((&cell.key, &cell.value))
    }

    /// Returns a mutable reference to the value accepted by `eq`.
    pub fn get_mut(&mut self, hash: u32, eq: impl Fn(&K) -> bool) -> Option<&mut V> {
        let index = self.find_index(hash, eq)?;
        Some(&mut self.cell_mut(index).value)
    }

    /// Removes the entry accepted by `eq`. Returns `false` if there is none,
    /// in which case the table is unchanged.
    pub fn remove(&mut self, hash: u32, eq: impl Fn(&K) -> bool) -> bool {
        self.remove_entry(hash, eq).is_some()
    }

    /// Removes the entry accepted by `eq` and returns its key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::hash_table::HashTable;
    ///
    /// let hash = |key: &&str| key.len() as u32;
    ///
    /// let mut table = HashTable::new();
    /// table.add(hash(&"pig"), "pig", "oink", |a, b| a == b, hash);
    ///
    /// assert_eq!(table.remove_entry(hash(&"pig"), |k| *k == "pig"), Some(("pig", "oink")));
    /// assert_eq!(table.remove_entry(hash(&"pig"), |k| *k == "pig"), None);
    /// ```
    pub fn remove_entry(&mut self, hash: u32, eq: impl Fn(&K) -> bool) -> Option<(K, V)> {
        let start = self.find_index(hash, eq)?;
        let removed = self.cells[start].take()?;
        self.close_gap(start);
        self.count -= 1;

        Some((removed.key, removed.value))
    }

    /// Backward-shift deletion.
    ///
    /// `gap` has just been emptied. Walks the run after it once: an entry
    /// whose home is not in `(gap, index]` (cyclically) would become
    /// unreachable, so it moves into the gap and its old slot becomes the
    /// gap. Stops at the first inactive slot.
    fn close_gap(&mut self, mut gap: usize) {
        let mask = self.mask();
        let mut index = (gap + 1) & mask;

        while let Some(cell) = &self.cells[index] {
            let from_home = index.wrapping_sub(cell.hash as usize) & mask;
            let from_gap = index.wrapping_sub(gap) & mask;
            if from_home >= from_gap {
                self.cells[gap] = self.cells[index].take();
                gap = index;
            }
            index = (index + 1) & mask;
        }
    }

    /// Returns an iterator over all entries, in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.cells.iter(),
            remaining: self.len(),
        }
    }

    /// Returns an iterator that removes and yields every entry.
    ///
    /// Entries not consumed are removed when the iterator is dropped.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            table: self,
            index: 0,
        }
    }

    /// Counts entries by their distance from their home slot.
    ///
    /// Index `d` of the result is the number of entries stored `d` slots past
    /// their home.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mask = self.mask();
        let mut hist = alloc::vec![0usize; 1];

        for (index, cell) in self.cells.iter().enumerate() {
            if let Some(cell) = cell {
                let distance = index.wrapping_sub(cell.hash as usize) & mask;
                if distance >= hist.len() {
                    hist.resize(distance + 1, 0);
                }
                hist[distance] += 1;
            }
        }

        hist
    }

    /// Returns occupancy and probe-distance statistics.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let hist = self.probe_histogram();
        let total_distance: usize = hist
            .iter()
            .enumerate()
            .map(|(distance, count)| distance * count)
            .sum();

        DebugStats {
            populated: self.len(),
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            occupancy: self.count as f64 / self.capacity as f64,
            max_probe: hist.iter().rposition(|&count| count > 0).unwrap_or(0),
            mean_probe: if self.count == 0 {
                0.0
            } else {
                total_distance as f64 / self.count as f64
            },
            total_bytes: core::mem::size_of_val(&*self.cells),
        }
    }

    /// Pretty-prints the probe-distance histogram using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("probe histogram ({} entries):", self.count);
        for (distance, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", distance, "█".repeat(width), count);
        }
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// Created by [`HashTable::iter`].
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Option<Cell<K, V>>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for cell in self.inner.by_ref() {
            if let Some(cell) = cell {
                self.remaining -= 1;
                return Some((&cell.key, &cell.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A draining iterator over the entries of a [`HashTable`].
///
/// Created by [`HashTable::drain`].
pub struct Drain<'a, K, V> {
    table: &'a mut HashTable<K, V>,
    index: usize,
}

impl<K, V> Drop for Drain<'_, K, V> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.table.cells.len() {
            let cell = self.table.cells[self.index].take();
            self.index += 1;
            if let Some(cell) = cell {
                self.table.count -= 1;
                return Some((cell.key, cell.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.len(), Some(self.table.len()))
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
