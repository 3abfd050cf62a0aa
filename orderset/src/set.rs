//! An insertion-ordered key/value set built on a key vector and a hash index.

mod iter;


pub use self::iter::{IntoIter, Iter, Keys, Values};

use std::borrow::Borrow;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use fxhash::FxBuildHasher;

use crate::SetError;

/// A key/value container whose iteration order is the order in which keys
/// were added.
///
/// # Order
///
/// Keys are appended to an internal sequence when they are first added.
/// [`upsert`][Self::upsert] on a present key only replaces its value, so the
/// key keeps its position.
///
/// [`remove`][Self::remove] and [`retain`][Self::retain] swap the last key
/// into the vacated slot. After a removal the sequence is no longer in
/// insertion order.
///
/// # Complexity
///
/// Lookup, [`add`][Self::add], [`upsert`][Self::upsert] and
/// [`pop`][Self::pop] are **O(1)** (amortized average). [`remove`][Self::remove]
/// has to find the key in the sequence and is **O(n)** in the worst case.
///
/// # Examples
///
/// ```
/// use orderset::{OrderedSet, SetError};
///
/// let mut set = OrderedSet::new();
/// set.add(1, 10).unwrap();
/// set.add(2, 20).unwrap();
/// set.add(3, 30).unwrap();
/// assert_eq!(set.add(2, 0), Err(SetError::AlreadyExists));
///
/// assert_eq!(set.remove(&1), Ok(10));
/// // 3 was moved into the slot of 1.
/// assert!(set.keys().eq(&[3, 2]));
/// ```
pub struct OrderedSet<K, V, S = FxBuildHasher> {
    order: Vec<K>,
    index: HashMap<K, V, S>,
    size: usize,
}

impl<K, V, S> Clone for OrderedSet<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        OrderedSet {
            order: self.order.clone(),
            index: self.index.clone(),
            size: self.size,
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.order.clone_from(&other.order);
        self.index.clone_from(&other.index);
        self.size = other.size;
    }
}

impl<K, V, S> fmt::Debug for OrderedSet<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Default for OrderedSet<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<K, V> OrderedSet<K, V> {
    /// Create a new set. (Does not allocate.)
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher::default())
    }

    /// Create a new set with capacity for `n` keys.
    /// (Does not allocate if `n` is zero.)
    pub fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, FxBuildHasher::default())
    }
}

impl<K, V, S> OrderedSet<K, V, S> {
    /// Create a new set with `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        OrderedSet {
            order: Vec::new(),
            index: HashMap::with_hasher(hash_builder),
            size: 0,
        }
    }

    /// Create a new set with capacity for `n` keys and `hash_builder`.
    pub fn with_capacity_and_hasher(n: usize, hash_builder: S) -> Self {
        OrderedSet {
            order: Vec::with_capacity(n),
            index: HashMap::with_capacity_and_hasher(n, hash_builder),
            size: 0,
        }
    }

    /// Return the number of keys the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.order.capacity().min(self.index.capacity())
    }

    /// Return a reference to the set's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }

    /// Return the number of keys in the set.
    ///
    /// Computes in **O(1)** time.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the set contains no keys.
    ///
    /// Computes in **O(1)** time.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Return an iterator over the keys, in their order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys::new(&self.order)
    }

    /// Return an iterator over the key-value pairs, in their order.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter::new(&self.order, &self.index)
    }

    /// Return an iterator over the values, in the order of their keys.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values::new(&self.order, &self.index)
    }
}

impl<K, V, S> OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Return `true` if `key` is present.
    ///
    /// Computes in **O(1)** time (average).
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.contains_key(key)
    }

    /// Add a new key with its value at the end of the order.
    ///
    /// Fails with [`SetError::AlreadyExists`] if the key is present; the
    /// bound value is left as it was.
    ///
    /// Computes in **O(1)** time (amortized average).
    pub fn add(&mut self, key: K, value: V) -> Result<(), SetError> {
        match self.index.entry(key) {
            Entry::Occupied(_) => {
                log::debug!("orderset: add of a present key rejected");
                Err(SetError::AlreadyExists)
            }
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(value);
                self.size += 1;
                log::trace!("orderset: added key at position {}", self.size - 1);
                self.debug_check();
                Ok(())
            }
        }
    }

    /// Bind `value` to `key`, adding the key at the end of the order if it is
    /// absent.
    ///
    /// A present key keeps its position; its previous value is returned.
    ///
    /// Computes in **O(1)** time (amortized average).
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = match self.index.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(value);
                self.size += 1;
                log::trace!("orderset: upsert added key at position {}", self.size - 1);
                None
            }
        };
        self.debug_check();
        replaced
    }

    /// Return a reference to the value bound to `key`.
    ///
    /// Fails with [`SetError::NotFound`] if the key is absent.
    #[allow(clippy::should_implement_trait)]
    pub fn borrow<Q>(&self, key: &Q) -> Result<&V, SetError>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get(key).ok_or(SetError::NotFound)
    }

    /// Return a mutable reference to the value bound to `key`.
    ///
    /// Fails with [`SetError::NotFound`] if the key is absent.
    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut<Q>(&mut self, key: &Q) -> Result<&mut V, SetError>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get_mut(key).ok_or(SetError::NotFound)
    }

    /// Return the value bound to `key`, or `default` if the key is absent.
    ///
    /// The set is never modified.
    pub fn borrow_with_default<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get(key).unwrap_or(default)
    }

    /// Return a mutable reference to the value bound to `key`, adding the key
    /// with `default` first if it is absent.
    pub fn borrow_mut_with_default(&mut self, key: K, default: V) -> &mut V {
        match self.index.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                self.size += 1;
                log::trace!("orderset: default added at position {}", self.size - 1);
                entry.insert(default)
            }
        }
    }

    /// Return a reference to the value bound to `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get(key)
    }

    /// Return the stored key and its value, if present.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get_key_value(key)
    }

    /// Return a mutable reference to the value bound to `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.index.get_mut(key)
    }

    /// Get a key-value pair by position in the order.
    ///
    /// Valid positions are `0 <= i < self.len()`.
    pub fn get_index(&self, i: usize) -> Option<(&K, &V)> {
        let key = self.order.get(i)?;
        self.index.get_key_value(key)
    }

    /// Get the first key-value pair in the order.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.get_index(0)
    }

    /// Get the last key-value pair in the order.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.get_index(self.size.checked_sub(1)?)
    }

    /// Remove `key` and return its value.
    ///
    /// Fails with [`SetError::NotFound`] if the key is absent.
    ///
    /// Like [`Vec::swap_remove`], the last key in the order takes the place
    /// of the removed one.
    ///
    /// Computes in **O(n)** time (worst case) to locate the key in the order.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, SetError>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove `key` and return the stored key and its value.
    ///
    /// Fails with [`SetError::NotFound`] if the key is absent. Reorders like
    /// [`remove`][Self::remove].
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V), SetError>
    where
        Q: ?Sized + Hash + Eq,
        K: Borrow<Q>,
    {
        let Some((key, value)) = self.index.remove_entry(key) else {
            log::debug!("orderset: remove of an absent key");
            return Err(SetError::NotFound);
        };
        if let Some(pos) = self.order.iter().position(|k| *k == key) {
            self.order.swap_remove(pos);
            log::trace!("orderset: removed key at position {pos}");
        }
        self.size -= 1;
        self.debug_check();
        Ok((key, value))
    }

    /// Remove the last key in the order and return it with its value.
    ///
    /// The order of the remaining keys is preserved.
    ///
    /// Computes in **O(1)** time (average).
    pub fn pop(&mut self) -> Option<(K, V)> {
        let key = self.order.pop()?;
        let value = self.index.remove(&key)?;
        self.size -= 1;
        self.debug_check();
        Some((key, value))
    }

    /// Remove every key, one at a time from the end of the order.
    ///
    /// Each value is dropped as its key is removed.
    ///
    /// Computes in **O(n)** time.
    pub fn empty(&mut self) {
        let len = self.size;
        while self.size > 0 {
            let Some(key) = self.order.pop() else {
                break;
            };
            self.index.remove(&key);
            self.size -= 1;
        }
        if len > 0 {
            log::trace!("orderset: emptied {len} keys");
        }
        self.debug_check();
    }

    /// Keep only the pairs for which `keep` returns `true`.
    ///
    /// Rejected keys are swap-removed like [`remove`][Self::remove], so the
    /// visiting order and the resulting order are not insertion order once a
    /// key has been dropped.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut pos = 0;
        while pos < self.order.len() {
            let key = &self.order[pos];
            let kept = match self.index.get_mut(key) {
                Some(value) => keep(key, value),
                None => false,
            };
            if kept {
                pos += 1;
            } else {
                let key = self.order.swap_remove(pos);
                self.index.remove(&key);
                self.size -= 1;
                log::trace!("orderset: retain dropped key at position {pos}");
            }
        }
        self.debug_check();
    }

    /// Call `f` on every key-value pair, in order, without consuming the set.
    pub fn for_each_ref<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    /// Call `f` on every key with a mutable reference to its value, in order.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V),
    {
        for key in &self.order {
            if let Some(value) = self.index.get_mut(key) {
                f(key, value);
            }
        }
    }

    /// Consume the set, passing every key and value to `f` in order.
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(K, V),
    {
        for (key, value) in self {
            f(key, value);
        }
    }

    /// Consume the set, passing every key and value to `f` in reverse order.
    pub fn for_each_reverse<F>(self, mut f: F)
    where
        F: FnMut(K, V),
    {
        for (key, value) in self.into_iter_rev() {
            f(key, value);
        }
    }

    /// Return an owning iterator over the key-value pairs in reverse order.
    pub fn into_iter_rev(self) -> IntoIter<K, V, S> {
        IntoIter::new(self.order, self.index)
    }

    #[inline]
    fn debug_check(&self) {
        #[cfg(any(test, feature = "invariant-check"))]
        self.check_invariants();
    }

    /// Panics if the key sequence and the hash index disagree.
    #[cfg(any(test, feature = "invariant-check"))]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.size, self.order.len(), "size and order length differ");
        assert_eq!(self.size, self.index.len(), "size and index length differ");
        let mut seen = fxhash::FxHashSet::default();
        for key in &self.order {
            assert!(self.index.contains_key(key), "key in order but not in index");
            assert!(seen.insert(key), "duplicate key in order");
        }
    }
}

impl<K, V, S> PartialEq for OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: PartialEq,
    S: BuildHasher,
{
    /// Two sets are equal when they hold the same pairs, whatever their order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V, S> Eq for OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, Q, S> Index<&Q> for OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value bound to `key`.
    ///
    /// ***Panics*** if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("OrderedSet: key not found")
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Upsert every pair from the iterator, in order.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        let iter = iterable.into_iter();
        let (lower, _) = iter.size_hint();
        self.order.reserve(lower);
        self.index.reserve(lower);
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedSet<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut set = Self::default();
        set.extend(iterable);
        set
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedSet<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from(arr: [(K, V); N]) -> Self {
        Self::from_iter(arr)
    }
}
