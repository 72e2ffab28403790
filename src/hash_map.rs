use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::error::InsertError;
use crate::error::TryReserveError;
use crate::hash_table::HashTable;
use crate::hash_table::infallible;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = std::collections::hash_map::RandomState;
    } else {
        /// The hasher builder used when none is specified.
        pub type DefaultHashBuilder = crate::fnv::Fnv1aBuildHasher;
    }
}

/// Reduces a 64-bit hasher output to the 32-bit hash the table works with.
#[inline(always)]
fn fold(hash: u64) -> u32 {
    (hash ^ (hash >> 32)) as u32
}

#[inline(always)]
fn hash_key<Q, S>(hash_builder: &S, key: &Q) -> u32
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    fold(hash_builder.hash_one(key))
}

/// A hash map with linear probing, Fibonacci hashing and a miss value.
///
/// `HashMap<K, V, S>` stores key-value pairs inline in the cells of a
/// [`HashTable`]. Keys are hashed with the [`BuildHasher`] `S` (the 64-bit
/// output is folded to 32 bits) and compared with [`Eq`].
///
/// Lookups through [`get`](Self::get) never fail: a missing key yields the
/// map's *miss value*, which is `V::default()` unless configured with
/// [`with_miss_value`](Self::with_miss_value).
///
/// # Performance Characteristics
///
/// - **Memory**: the size of `Option<(u32, K, V)>` per slot, with between two
///   and four slots per entry.
/// - **Growth**: the slot count doubles once half of the slots are in use.
///
/// # Examples
///
/// ```rust
/// use fib_map::HashMap;
/// use fib_map::fnv::Fnv1aBuildHasher;
///
/// let mut map: HashMap<&str, &str, Fnv1aBuildHasher> = HashMap::new();
/// assert!(map.add("hello", "world"));
/// assert!(!map.add("hello", "moo"));
/// assert_eq!(*map.get("hello"), "world");
///
/// map.set("hello", "myst");
/// assert_eq!(*map.get("hello"), "myst");
/// assert_eq!(*map.get("goodbye"), "");
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<K, V>,
    hash_builder: S,
    miss: V,
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder and `V::default()`
    /// as miss value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let map: HashMap<u32, String, _> = HashMap::with_hasher(Fnv1aBuildHasher::default());
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self
    where
        V: Default,
    {
        Self::with_hasher_and_miss_value(hash_builder, V::default())
    }

    /// Creates an empty map that holds `capacity` entries before it grows.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self
    where
        V: Default,
    {
        infallible(Self::try_with_capacity_hasher_and_miss_value(
            capacity,
            hash_builder,
            V::default(),
        ))
    }

    /// Creates an empty map with the given hasher builder and miss value.
    pub fn with_hasher_and_miss_value(hash_builder: S, miss: V) -> Self {
        infallible(Self::try_with_capacity_hasher_and_miss_value(
            0,
            hash_builder,
            miss,
        ))
    }

    /// Creates an empty map, reporting allocation failure instead of
    /// aborting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::TryReserveError;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let map: HashMap<u32, i32, _> =
    ///     HashMap::try_with_capacity_hasher_and_miss_value(16, Fnv1aBuildHasher::default(), -1)
    ///         .unwrap();
    /// assert_eq!(*map.get(&3), -1);
    ///
    /// let err = HashMap::<u32, i32, _>::try_with_capacity_hasher_and_miss_value(
    ///     usize::MAX,
    ///     Fnv1aBuildHasher::default(),
    ///     -1,
    /// )
    /// .unwrap_err();
    /// assert_eq!(err, TryReserveError::CapacityOverflow);
    /// ```
    pub fn try_with_capacity_hasher_and_miss_value(
        capacity: usize,
        hash_builder: S,
        miss: V,
    ) -> Result<Self, TryReserveError> {
        Ok(Self {
            table: HashTable::try_with_capacity(capacity)?,
            hash_builder,
            miss,
        })
    }

    /// Replaces the value returned by [`get`](Self::get) for missing keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let map: HashMap<&str, i64, Fnv1aBuildHasher> = HashMap::new().with_miss_value(-1);
    /// assert_eq!(*map.get("absent"), -1);
    /// ```
    pub fn with_miss_value(mut self, miss: V) -> Self {
        self.miss = miss;
        self
    }

    /// Returns the value returned by [`get`](Self::get) for missing keys.
    pub fn miss_value(&self) -> &V {
        &self.miss
    }

    /// Returns a reference to the map's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the entry count at which the next insertion grows the map.
    pub fn load_factor(&self) -> usize {
        self.table.load_factor()
    }

    /// Removes all entries, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        infallible(self.try_reserve(additional));
    }

    /// Fallible version of [`reserve`](Self::reserve). On error the map is
    /// unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let hash_builder = &self.hash_builder;
        self.table
            .try_reserve(additional, |k| hash_key(hash_builder, k))
    }

    /// Inserts `key` with `value` if the key is not present yet.
    ///
    /// Returns `true` if the entry was inserted. If the key is already
    /// present, returns `false`, keeps the stored value and drops `key` and
    /// `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let mut map: HashMap<&str, &str, Fnv1aBuildHasher> = HashMap::new();
    /// assert!(map.add("pig", "oink"));
    /// assert!(!map.add("pig", "moo"));
    /// assert_eq!(*map.get("pig"), "oink");
    /// ```
    pub fn add(&mut self, key: K, value: V) -> bool {
        match self.try_add(key, value) {
            Ok(inserted) => inserted,
            Err(err) => infallible(Err(err.error().clone())),
        }
    }

    /// Fallible version of [`add`](Self::add).
    ///
    /// If the map is full and cannot grow, the key and value are returned in
    /// the error and the map is unchanged.
    pub fn try_add(&mut self, key: K, value: V) -> Result<bool, InsertError<K, V>> {
        let hash = hash_key(&self.hash_builder, &key);
        let hash_builder = &self.hash_builder;
        self.table.try_add(hash, key, value, |a, b| a == b, |k| {
            hash_key(hash_builder, k)
        })
    }

    /// Inserts `key` with `value`, replacing the value of an existing entry.
    ///
    /// Returns the replaced value, or `None` if the key was not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let mut map: HashMap<&str, &str, Fnv1aBuildHasher> = HashMap::new();
    /// assert_eq!(map.set("cow", "moo"), None);
    /// assert_eq!(map.set("cow", "mooo"), Some("moo"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.try_set(key, value) {
            Ok(previous) => previous,
            Err(err) => infallible(Err(err.error().clone())),
        }
    }

    /// Fallible version of [`set`](Self::set).
    pub fn try_set(&mut self, key: K, value: V) -> Result<Option<V>, InsertError<K, V>> {
        let hash = hash_key(&self.hash_builder, &key);
        let hash_builder = &self.hash_builder;
        self.table.try_set(hash, key, value, |a, b| a == b, |k| {
            hash_key(hash_builder, k)
        })
    }

    /// Returns the value stored for `key`, or the miss value if there is
    /// none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let mut map: HashMap<String, u32, Fnv1aBuildHasher> = HashMap::new();
    /// map.add("one".to_string(), 1);
    /// assert_eq!(*map.get("one"), 1);
    /// assert_eq!(*map.get("two"), 0);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_checked(key).unwrap_or(&self.miss)
    }

    /// Returns the value stored for `key`, or `None` if there is none.
    pub fn get_checked<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        self.table.get(hash, |k| <K as Borrow<Q>>::borrow(k) == key)
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        self.table.get_key_value(hash, |k| <K as Borrow<Q>>::borrow(k) == key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        self.table.get_mut(hash, |k| <K as Borrow<Q>>::borrow(k) == key)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_checked(key).is_some()
    }

    /// Removes `key` from the map. Returns `false`, leaving the map
    /// unchanged, if the key was not present.
    ///
    /// The removed key and value are dropped; use
    /// [`remove_entry`](Self::remove_entry) to take them back.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` from the map and returns the stored key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    /// use fib_map::fnv::Fnv1aBuildHasher;
    ///
    /// let mut map: HashMap<String, u32, Fnv1aBuildHasher> = HashMap::new();
    /// map.add("chicken".to_string(), 7);
    /// assert_eq!(map.remove_entry("chicken"), Some(("chicken".to_string(), 7)));
    /// assert_eq!(map.remove_entry("chicken"), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        self.table.remove_entry(hash, |k| <K as Borrow<Q>>::borrow(k) == key)
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns an iterator over all key-value pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over all keys in arbitrary order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over all values in arbitrary order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Removes and yields every key-value pair.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Returns probe-distance and occupancy statistics of the underlying
    /// table.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Returns the probe-distance histogram of the underlying table.
    #[cfg(feature = "stats")]
    pub fn probe_histogram(&self) -> alloc::vec::Vec<usize> {
        self.table.probe_histogram()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Default,
    S: BuildHasher + Default,
{
    /// Creates an empty map with 8 slots, the default hasher builder and
    /// `V::default()` as miss value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fib_map::HashMap;
    ///
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// assert_eq!(map.load_factor(), 4);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Fallible version of [`new`](Self::new).
    pub fn try_new() -> Result<Self, TryReserveError> {
        Self::try_with_capacity_hasher_and_miss_value(0, S::default(), V::default())
    }

    /// Creates an empty map that holds `capacity` entries before it grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Default,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Default,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, K, V>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::hash::BuildHasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;
    use crate::fnv::Fnv1aBuildHasher;

    #[derive(Clone)]
    struct SipHashBuilder {
        k1: u64,
        k2: u64,
    }

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(self.k1, self.k2)
        }
    }

    impl Default for SipHashBuilder {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    type StrMap = HashMap<&'static str, &'static str, Fnv1aBuildHasher>;

    #[test]
    fn test_new_and_with_hasher() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 8);
        assert_eq!(map.load_factor(), 4);

        let map2 = HashMap::<i32, String, _>::with_hasher(SipHashBuilder::default());
        assert!(map2.is_empty());
        assert_eq!(map2.miss_value(), "");
    }

    #[test]
    fn test_with_capacity() {
        let map: HashMap<i32, String, SipHashBuilder> = HashMap::with_capacity(100);
        assert!(map.load_factor() >= 100);
        assert!(map.is_empty());
    }

    #[test]
    fn test_add_new() {
        let mut map = StrMap::new();
        assert!(map.add("hello", "world"));
        assert_eq!(*map.get("hello"), "world");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_add_duplicate() {
        let mut map = StrMap::new();
        assert!(map.add("hello", "world"));
        assert!(!map.add("hello", "moo"));
        assert_eq!(*map.get("hello"), "world");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_set_new_and_old() {
        let mut map = StrMap::new();
        let count = map.len();
        assert_eq!(map.set("Alexander", "Hamilton"), None);
        assert_eq!(map.len(), count + 1);
        assert_eq!(*map.get("Alexander"), "Hamilton");

        map.add("cow", "moo");
        let count = map.len();
        assert_eq!(map.set("cow", "mooo"), Some("moo"));
        assert_eq!(map.len(), count);
        assert_eq!(*map.get("cow"), "mooo");
    }

    #[test]
    fn test_get_missing_returns_miss_value() {
        let map = StrMap::new();
        assert_eq!(*map.get("Aaron"), "");
        assert_eq!(map.get_checked("Aaron"), None);

        let map = StrMap::new().with_miss_value("<none>");
        assert_eq!(*map.get("Aaron"), "<none>");
    }

    #[test]
    fn test_remove() {
        let mut map = StrMap::new();
        map.set("chicken", "bock");
        map.add("pig", "oink");
        let count = map.len();

        assert!(map.remove("pig"));
        assert_eq!(map.len(), count - 1);
        assert_eq!(*map.get("pig"), "");
        assert_eq!(*map.get("chicken"), "bock");

        assert!(!map.remove("rooster"));
        assert_eq!(map.len(), count - 1);
    }

    #[test]
    fn test_resize_threshold() {
        let mut map = StrMap::new();
        for key in ["a", "b", "c", "d"] {
            assert!(map.add(key, key));
        }
        assert_eq!(map.load_factor(), 4);
        assert_eq!(map.capacity(), 8);

        assert!(map.add("e", "e"));
        assert_eq!(map.load_factor(), 8);
        assert_eq!(map.capacity(), 16);

        for key in ["a", "b", "c", "d", "e"] {
            assert_eq!(*map.get(key), key);
        }
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: HashMap<String, i32, SipHashBuilder> = HashMap::new();
        map.add("key".to_string(), 1);

        assert!(map.contains_key("key"));
        assert_eq!(map.get_key_value("key"), Some((&"key".to_string(), &1)));
        if let Some(v) = map.get_mut("key") {
            *v = 5;
        }
        assert_eq!(*map.get("key"), 5);
        assert_eq!(map.remove_entry("key"), Some(("key".to_string(), 5)));
        assert!(!map.contains_key("key"));
    }

    #[test]
    fn test_many_keys_with_sip() {
        let mut map: HashMap<u64, u64, SipHashBuilder> = HashMap::new();
        for k in 0..1000 {
            assert!(map.add(k, k * k));
        }
        for k in (0..1000).step_by(2) {
            assert!(map.remove(&k));
        }
        assert_eq!(map.len(), 500);
        for k in 0..1000 {
            let expected = if k % 2 == 0 { 0 } else { k * k };
            assert_eq!(*map.get(&k), expected);
        }
    }

    #[test]
    fn test_iterators() {
        let mut map: HashMap<u32, u32, Fnv1aBuildHasher> = HashMap::new();
        for k in 0..10 {
            map.add(k, k + 100);
        }

        let mut keys: Vec<u32> = map.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..10).collect::<Vec<_>>());

        let mut values: Vec<u32> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, (100..110).collect::<Vec<_>>());

        assert_eq!((&map).into_iter().len(), 10);
        assert_eq!(map.keys().len(), 10);
        assert_eq!(map.values().size_hint(), (10, Some(10)));

        let mut keys = map.keys();
        keys.next();
        assert_eq!(keys.len(), 9);

        let drain = map.drain();
        assert_eq!(drain.len(), 10);
        drop(drain);
        assert!(map.is_empty());

        for k in 0..10 {
            map.add(k, k + 100);
        }
        let mut drained: Vec<(u32, u32)> = map.drain().collect();
        drained.sort_unstable();
        assert_eq!(drained[0], (0, 100));
        assert!(map.is_empty());
    }

    #[test]
    fn test_extend_and_from_iter() {
        let map: HashMap<u32, u32, Fnv1aBuildHasher> = (0..20).map(|k| (k, k)).collect();
        assert_eq!(map.len(), 20);
        assert!(map.load_factor() >= 20);

        let mut map = map;
        map.extend([(0, 99), (100, 100)]);
        assert_eq!(map.len(), 21);
        assert_eq!(*map.get(&0), 99);
    }

    #[test]
    fn test_clear_and_reserve() {
        let mut map: HashMap<u32, u32, Fnv1aBuildHasher> = HashMap::new();
        map.reserve(50);
        let capacity = map.capacity();
        assert!(map.load_factor() >= 50);

        for k in 0..50 {
            map.add(k, k);
        }
        assert_eq!(map.capacity(), capacity);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert_eq!(
            map.try_reserve(usize::MAX),
            Err(TryReserveError::CapacityOverflow)
        );
    }

    #[test]
    fn test_debug_and_clone() {
        let mut map: HashMap<u32, &str, Fnv1aBuildHasher> = HashMap::new();
        map.add(1, "one");

        let cloned = map.clone();
        map.set(1, "uno");

        assert_eq!(alloc::format!("{:?}", cloned), "{1: \"one\"}");
        assert_eq!(*cloned.get(&1), "one");
        assert_eq!(*map.get(&1), "uno");
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<String, i32> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(*map.get("missing"), 0);
    }

    #[test]
    fn test_fold_keeps_32_bit_hashes() {
        assert_eq!(fold(0x1234_5678), 0x1234_5678);
        assert_eq!(fold(0xFFFF_FFFF_0000_0000), 0xFFFF_FFFF);
    }
}
