use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
};

use hashbrown::hash_map::DefaultHashBuilder;

use crate::{
    bijection::{Bijection, Iter, Keys, Values},
    error::BijectionError,
    evicted::Evicted,
    utils::*,
};

/// A read-only view of a [`Bijection`] with its keys and values trading places.
///
/// The view borrows the map's storage, so it is free to create and always agrees with the map.
/// Obtained from [`Bijection::inverse`].
///
/// # Examples
/// ```rust
/// use bijection::Bijection;
///
/// let map: Bijection<&str, u64> = [("a", 1), ("b", 2)].into();
/// let inv = map.inverse();
///
/// assert_eq!(inv.get(&1), Some(&"a"));
/// assert!(inv.contains_key(&2));
/// assert!(inv.contains_value("b"));
/// assert_eq!(inv.len(), map.len());
/// ```
pub struct Inverse<'a, A, B, S = DefaultHashBuilder> {
    map: &'a Bijection<A, B, S>,
}

/// A mutable view of a [`Bijection`] with its keys and values trading places.
///
/// Every mutation made through the view is made to the underlying map, and both of its sets are
/// kept in sync exactly as they are by the map's own methods. Obtained from
/// [`Bijection::inverse_mut`].
///
/// # Examples
/// ```rust
/// use bijection::{Bijection, Evicted};
///
/// let mut map: Bijection<&str, u64> = [("a", 1), ("b", 2)].into();
/// let mut inv = map.inverse_mut();
///
/// // From this side, 1 is a key
/// assert_eq!(inv.insert(1, "c"), Evicted::ByKey(1, "a"));
/// assert_eq!(inv.remove(&2), Some("b"));
///
/// assert_eq!(map.get("c"), Some(&1));
/// assert_eq!(map.len(), 1);
/// ```
pub struct InverseMut<'a, A, B, S = DefaultHashBuilder> {
    map: &'a mut Bijection<A, B, S>,
}

impl<'a, A, B, S> Inverse<'a, A, B, S> {
    pub(crate) fn new(map: &'a Bijection<A, B, S>) -> Self {
        Self { map }
    }

    /// Returns the map this view inverts.
    pub fn inverse(&self) -> &'a Bijection<A, B, S> {
        self.map
    }

    /// Returns the number of pairs in the map
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no pairs are in the map and false otherwise
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over the keys of this view, which are the values of the map.
    pub fn keys(&self) -> Values<'a, A, B> {
        self.map.values()
    }

    /// Returns an iterator over the values of this view, which are the keys of the map.
    pub fn values(&self) -> Keys<'a, A, B> {
        self.map.keys()
    }
}

impl<'a, A, B, S> Inverse<'a, A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    /// Gets a reference to the map's key paired with the given value.
    pub fn get<Q>(&self, key: &Q) -> Option<&'a A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_by_value(key)
    }

    /// Gets references to the stored value and the key it is paired with.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&'a B, &'a A)>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let map = self.map;
        get_pair(&map.hash_builder, &map.backward, &map.forward, key)
    }

    /// Like [`get`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// [`get`]: struct.Inverse.html#method.get
    pub fn try_get<Q>(&self, key: &Q) -> Result<&'a A, BijectionError>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Returns `true` if the given value of the map is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_value(key)
    }

    /// Returns `true` if the given key of the map is present.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Returns an iterator over the pairs, each flipped.
    ///
    /// The pairs come in the same order as [`Bijection::iter`] yields them.
    pub fn iter(&self) -> InverseIter<'a, A, B> {
        InverseIter {
            inner: self.map.iter(),
        }
    }
}

impl<A, B, S> Clone for Inverse<'_, A, B, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B, S> Copy for Inverse<'_, A, B, S> {}

impl<A, B, S> fmt::Debug for Inverse<'_, A, B, S>
where
    A: Hash + Eq + fmt::Debug,
    B: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, A, B, S> IntoIterator for Inverse<'a, A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a B, &'a A);
    type IntoIter = InverseIter<'a, A, B>;

    fn into_iter(self) -> InverseIter<'a, A, B> {
        self.iter()
    }
}

impl<'a, A, B, S> InverseMut<'a, A, B, S> {
    pub(crate) fn new(map: &'a mut Bijection<A, B, S>) -> Self {
        Self { map }
    }

    /// Returns the map this view inverts.
    pub fn inverse(&self) -> &Bijection<A, B, S> {
        &*self.map
    }

    /// Returns the map this view inverts, mutably.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map: Bijection<&str, u64> = Bijection::new();
    /// let mut inv = map.inverse_mut();
    /// inv.inverse_mut().insert("a", 1);
    /// assert_eq!(inv.get(&1), Some(&"a"));
    /// ```
    pub fn inverse_mut(&mut self) -> &mut Bijection<A, B, S> {
        &mut *self.map
    }

    /// Consumes the view and hands back the map for the rest of the original borrow.
    pub fn into_inverse(self) -> &'a mut Bijection<A, B, S> {
        self.map
    }

    /// Returns a read-only view in the same direction.
    pub fn as_inverse(&self) -> Inverse<'_, A, B, S> {
        Inverse::new(&*self.map)
    }

    /// Returns the number of pairs in the map
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no pairs are in the map and false otherwise
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all pairs from the map.
    pub fn clear(&mut self) {
        self.map.clear()
    }

    /// Returns an iterator over the keys of this view, which are the values of the map.
    pub fn keys(&self) -> Values<'_, A, B> {
        self.map.values()
    }

    /// Returns an iterator over the values of this view, which are the keys of the map.
    pub fn values(&self) -> Keys<'_, A, B> {
        self.map.keys()
    }
}

impl<'a, A, B, S> InverseMut<'a, A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    /// Pairs `key` (a value of the map) with `value` (a key of the map).
    ///
    /// Collisions are evicted exactly as in [`Bijection::insert`], and are reported from this
    /// view's side: `ByKey` holds the pair that owned `key`.
    pub fn insert(&mut self, key: B, value: A) -> Evicted<B, A> {
        let map = &mut *self.map;
        insert_pair(
            &map.hash_builder,
            &mut map.counter,
            &mut map.backward,
            &mut map.forward,
            key,
            value,
        )
    }

    /// Gets a reference to the map's key paired with the given value.
    pub fn get<Q>(&self, key: &Q) -> Option<&A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_by_value(key)
    }

    /// Gets references to the stored value and the key it is paired with.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&B, &A)>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.as_inverse().get_key_value(key)
    }

    /// Like [`get`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// [`get`]: struct.InverseMut.html#method.get
    pub fn try_get<Q>(&self, key: &Q) -> Result<&A, BijectionError>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Returns `true` if the given value of the map is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_value(key)
    }

    /// Returns `true` if the given key of the map is present.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Removes a value of the map along with its paired key, returning the key.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove_by_value(key)
    }

    /// Removes a value of the map, returning it along with its paired key.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(B, A)>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let map = &mut *self.map;
        remove_pair(&map.hash_builder, &mut map.backward, &mut map.forward, key)
    }

    /// Like [`remove`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// [`remove`]: struct.InverseMut.html#method.remove
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<A, BijectionError>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Removes a key of the map along with its paired value, returning the value.
    pub fn remove_by_value<Q>(&mut self, value: &Q) -> Option<B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(value)
    }

    /// Retains only the pairs for which the predicate returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&B, &A) -> bool,
    {
        self.map.retain(|a, b| f(b, a))
    }

    /// Returns an iterator over the pairs, each flipped.
    pub fn iter(&self) -> InverseIter<'_, A, B> {
        InverseIter {
            inner: self.map.iter(),
        }
    }
}

impl<A, B, S> fmt::Debug for InverseMut<'_, A, B, S>
where
    A: Hash + Eq + fmt::Debug,
    B: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_inverse(), f)
    }
}

/// An iterator over the pairs of a `Bijection`, each flipped.
pub struct InverseIter<'a, A, B> {
    inner: Iter<'a, A, B>,
}

impl<A, B> Clone for InverseIter<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A, B> fmt::Debug for InverseIter<'_, A, B>
where
    A: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, A, B> Iterator for InverseIter<'a, A, B> {
    type Item = (&'a B, &'a A);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(a, b)| (b, a))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<A, B> ExactSizeIterator for InverseIter<'_, A, B> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<A, B> FusedIterator for InverseIter<'_, A, B> {}
