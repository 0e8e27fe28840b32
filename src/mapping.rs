use std::hash::{BuildHasher, Hash};

use crate::{
    bijection::{Bijection, Iter},
    error::BijectionError,
    evicted::Evicted,
    inverse::{Inverse, InverseIter, InverseMut},
};

/// Read access shared by every direction of a bijection.
///
/// Code written against `Mapping` works the same on a [`Bijection`] and on either of its inverse
/// views.
///
/// # Examples
/// ```rust
/// use bijection::{Bijection, Mapping};
///
/// fn total<M: Mapping<u64, u64>>(map: &M) -> u64 {
///     map.iter().map(|(k, v)| k * v).sum()
/// }
///
/// let map: Bijection<u64, u64> = [(1, 2), (3, 4)].into();
/// assert_eq!(total(&map), 14);
/// assert_eq!(total(&map.inverse()), 14);
/// ```
pub trait Mapping<K, V> {
    /// The iterator over the pairs of this direction
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Gets a reference to the value paired with the given key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns the number of pairs.
    fn len(&self) -> usize;

    /// Returns an iterator over the pairs.
    fn iter(&self) -> Self::Iter<'_>;

    /// Like [`get`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// [`get`]: trait.Mapping.html#tymethod.get
    fn try_get(&self, key: &K) -> Result<&V, BijectionError> {
        self.get(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Returns `true` if the key is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if there are no pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access shared by the mutable directions of a bijection.
pub trait MappingMut<K, V>: Mapping<K, V> {
    /// Pairs `key` with `value`, evicting whatever either of them was paired with.
    fn insert(&mut self, key: K, value: V) -> Evicted<K, V>;

    /// Removes a key along with its paired value, returning the value.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Like [`remove`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// [`remove`]: trait.MappingMut.html#tymethod.remove
    fn try_remove(&mut self, key: &K) -> Result<V, BijectionError> {
        self.remove(key).ok_or(BijectionError::KeyNotFound)
    }
}

impl<A, B, S> Mapping<A, B> for Bijection<A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = Iter<'a, A, B>
    where
        Self: 'a,
        A: 'a,
        B: 'a;

    fn get(&self, key: &A) -> Option<&B> {
        Bijection::get(self, key)
    }

    fn len(&self) -> usize {
        Bijection::len(self)
    }

    fn iter(&self) -> Iter<'_, A, B> {
        Bijection::iter(self)
    }
}

impl<A, B, S> MappingMut<A, B> for Bijection<A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: A, value: B) -> Evicted<A, B> {
        Bijection::insert(self, key, value)
    }

    fn remove(&mut self, key: &A) -> Option<B> {
        Bijection::remove(self, key)
    }
}

impl<'m, A, B, S> Mapping<B, A> for Inverse<'m, A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = InverseIter<'a, A, B>
    where
        Self: 'a,
        B: 'a,
        A: 'a;

    fn get(&self, key: &B) -> Option<&A> {
        Inverse::get(self, key)
    }

    fn len(&self) -> usize {
        Inverse::len(self)
    }

    fn iter(&self) -> InverseIter<'_, A, B> {
        Inverse::iter(self)
    }
}

impl<'m, A, B, S> Mapping<B, A> for InverseMut<'m, A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a> = InverseIter<'a, A, B>
    where
        Self: 'a,
        B: 'a,
        A: 'a;

    fn get(&self, key: &B) -> Option<&A> {
        InverseMut::get(self, key)
    }

    fn len(&self) -> usize {
        InverseMut::len(self)
    }

    fn iter(&self) -> InverseIter<'_, A, B> {
        InverseMut::iter(self)
    }
}

impl<'m, A, B, S> MappingMut<B, A> for InverseMut<'m, A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: B, value: A) -> Evicted<B, A> {
        InverseMut::insert(self, key, value)
    }

    fn remove(&mut self, key: &B) -> Option<A> {
        InverseMut::remove(self, key)
    }
}
