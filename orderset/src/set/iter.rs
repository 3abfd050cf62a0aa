use super::OrderedSet;

use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::slice::Iter as SliceIter;

impl<'a, K, V, S> IntoIterator for &'a OrderedSet<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for OrderedSet<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, S>;

    /// Consume the set in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        let OrderedSet {
            mut order, index, ..
        } = self;
        // drained from the back
        order.reverse();
        IntoIter::new(order, index)
    }
}

/// An iterator over the keys of an [`OrderedSet`].
///
/// This `struct` is created by the [`OrderedSet::keys`] method.
pub struct Keys<'a, K> {
    iter: SliceIter<'a, K>,
}

impl<'a, K> Keys<'a, K> {
    pub(super) fn new(order: &'a [K]) -> Self {
        Self { iter: order.iter() }
    }

    fn key(&self, key: &'a K) -> &'a K {
        key
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    iterator_methods!(key);
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    double_ended_iterator_methods!(key);
}

impl<K> ExactSizeIterator for Keys<'_, K> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            iter: self.iter.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the entries of an [`OrderedSet`].
///
/// This `struct` is created by the [`OrderedSet::iter`] method.
/// See its documentation for more.
pub struct Iter<'a, K, V, S> {
    iter: SliceIter<'a, K>,
    index: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Iter<'a, K, V, S> {
    pub(super) fn new(order: &'a [K], index: &'a HashMap<K, V, S>) -> Self {
        Self {
            iter: order.iter(),
            index,
        }
    }
}

impl<'a, K, V, S> Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn entry(&self, key: &'a K) -> (&'a K, &'a V) {
        let index: &'a HashMap<K, V, S> = self.index;
        (key, &index[key])
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    iterator_methods!(entry);
}

impl<K, V, S> DoubleEndedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    double_ended_iterator_methods!(entry);
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K, V, S> FusedIterator for Iter<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
            index: self.index,
        }
    }
}

impl<K, V, S> fmt::Debug for Iter<'_, K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the values of an [`OrderedSet`].
///
/// This `struct` is created by the [`OrderedSet::values`] method.
pub struct Values<'a, K, V, S> {
    iter: SliceIter<'a, K>,
    index: &'a HashMap<K, V, S>,
}

impl<'a, K, V, S> Values<'a, K, V, S> {
    pub(super) fn new(order: &'a [K], index: &'a HashMap<K, V, S>) -> Self {
        Self {
            iter: order.iter(),
            index,
        }
    }
}

impl<'a, K, V, S> Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn value(&self, key: &'a K) -> &'a V {
        let index: &'a HashMap<K, V, S> = self.index;
        &index[key]
    }
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = &'a V;

    iterator_methods!(value);
}

impl<K, V, S> DoubleEndedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    double_ended_iterator_methods!(value);
}

impl<K, V, S> ExactSizeIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K, V, S> FusedIterator for Values<'_, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Clone for Values<'_, K, V, S> {
    fn clone(&self) -> Self {
        Values {
            iter: self.iter.clone(),
            index: self.index,
        }
    }
}

/// An owning iterator over the entries of an [`OrderedSet`].
///
/// Created by [`OrderedSet::into_iter`] (insertion order) and
/// [`OrderedSet::into_iter_rev`] (reverse order). Each step takes the
/// pair out of the set's storage.
pub struct IntoIter<K, V, S> {
    // next key at the back
    order: Vec<K>,
    index: HashMap<K, V, S>,
}

impl<K, V, S> IntoIter<K, V, S> {
    pub(super) fn new(order: Vec<K>, index: HashMap<K, V, S>) -> Self {
        Self { order, index }
    }
}

impl<K, V, S> Iterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.pop()?;
        let value = self.index.remove(&key)?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.order.len(), Some(self.order.len()))
    }

    fn count(self) -> usize {
        self.order.len()
    }
}

impl<K, V, S> ExactSizeIterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K, V, S> FusedIterator for IntoIter<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for IntoIter<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iter = self.order.iter().rev().map(|key| (key, &self.index[key]));
        f.debug_list().entries(iter).finish()
    }
}
