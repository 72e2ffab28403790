use core::alloc::Layout;
use core::fmt::Debug;

/// The error returned when the cell array of a table cannot be allocated.
///
/// Returned by [`HashTable::try_new`], the `try_reserve` methods and, wrapped
/// in an [`InsertError`], by the `try_add`/`try_set` methods when the growth
/// that precedes an insertion fails. In every case the table that produced
/// the error is left exactly as it was before the call.
///
/// [`HashTable::try_new`]: crate::hash_table::HashTable::try_new
#[derive(thiserror::Error, Clone, PartialEq, Eq, Debug)]
pub enum TryReserveError {
    /// The requested capacity exceeds the largest power-of-two table a 32-bit
    /// slot index can address, or its byte size overflows `isize`.
    #[error("hash table capacity overflow")]
    CapacityOverflow,

    /// The allocator refused to provide memory for the cell array.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError {
        /// The layout of the allocation that failed.
        layout: Layout,
    },
}

/// An insertion that could not complete because the table failed to grow.
///
/// Carries the key and value that were being inserted so the caller gets
/// ownership back.
#[derive(thiserror::Error)]
#[error("insertion failed: {source}")]
pub struct InsertError<K, V> {
    #[source]
    source: TryReserveError,
    key: K,
    value: V,
}

impl<K, V> InsertError<K, V> {
    pub(crate) fn new(source: TryReserveError, key: K, value: V) -> Self {
        Self { source, key, value }
    }

    /// Returns the allocation error that prevented the insertion.
    pub fn error(&self) -> &TryReserveError {
        &self.source
    }

    /// Returns the key and value that were not inserted.
    pub fn into_inner(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Debug for InsertError<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InsertError")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
