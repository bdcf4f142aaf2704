//! Optics for keyed and sequence containers.
//!
//! - [`at`]: a [`Lens`] on the optional value stored under a key. Viewing
//!   returns the lookup result; updating with `Some` inserts or replaces and
//!   updating with `None` removes the entry.
//! - [`ix`]: an [`Affine`] on an existing entry. Missing keys (or
//!   out-of-bounds indices for `Vec`) are absent for both reads and writes;
//!   `ix` never inserts.
//! - [`first_where`]: an [`Affine`] on the first element of a `Vec` that
//!   satisfies a predicate.
//!
//! # Difference between `at` and `ix`
//!
//! Both read the same way: `at(key)` composed with [`some`](super::some)
//! previews the value only when the key is present, like `ix(key)`. They
//! differ on writes. The promoted `some` rebuilds `Some(value)` wholesale, so
//! writing through `at(key)` then `some` inserts a missing key, while writing
//! through `ix(key)` on a missing key is absent.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use optica::optics::{Affine, Lens, at, ix, some};
//!
//! let scores = BTreeMap::from([("ann".to_string(), 3)]);
//!
//! let ann = at("ann".to_string());
//! assert_eq!(ann.view(&scores), Some(3));
//!
//! let bob = ix("bob".to_string());
//! assert_eq!(bob.try_update(&scores, 5), None);
//!
//! let bob_at = at("bob".to_string()).to_affine().compose_prism(some());
//! let inserted = bob_at.try_update(&scores, 5);
//! assert_eq!(inserted.and_then(|scores| scores.get("bob").copied()), Some(5));
//!
//! let scores = at("bob".to_string()).update(scores, Some(5));
//! assert_eq!(scores.get("bob"), Some(&5));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::affine::{Affine, IntoAffine};
use super::lens::{Lens, LensAsAffine};

// =============================================================================
// at: Lens<Map, Option<V>>
// =============================================================================

/// A lens on the optional value stored under a key in a map.
///
/// Implemented for [`HashMap`] and [`BTreeMap`]. See [`at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAt<K> {
    key: K,
}

impl<K> KeyAt<K> {
    /// Creates a new `KeyAt` for the given key.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key this lens focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Returns a lens on the optional value stored under `key`.
#[must_use]
pub const fn at<K>(key: K) -> KeyAt<K> {
    KeyAt::new(key)
}

impl<K, V, H> Lens<HashMap<K, V, H>, Option<V>> for KeyAt<K>
where
    K: Clone + Eq + Hash,
    V: Clone,
    H: BuildHasher,
{
    fn view(&self, source: &HashMap<K, V, H>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn update(&self, mut source: HashMap<K, V, H>, value: Option<V>) -> HashMap<K, V, H> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K, V> Lens<BTreeMap<K, V>, Option<V>> for KeyAt<K>
where
    K: Clone + Ord,
    V: Clone,
{
    fn view(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn update(&self, mut source: BTreeMap<K, V>, value: Option<V>) -> BTreeMap<K, V> {
        match value {
            Some(value) => {
                source.insert(self.key.clone(), value);
            }
            None => {
                source.remove(&self.key);
            }
        }
        source
    }
}

impl<K, M, V> IntoAffine<M, Option<V>> for KeyAt<K>
where
    Self: Lens<M, Option<V>>,
    M: Clone,
{
    type Output = LensAsAffine<Self, M, Option<V>>;

    fn into_affine(self) -> Self::Output {
        LensAsAffine::new(self)
    }
}

// =============================================================================
// ix: Affine<Map, V> / Affine<Vec<T>, T>
// =============================================================================

/// An affine optic on an existing entry of a map or an existing element of a `Vec`.
///
/// See [`ix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyIx<K> {
    key: K,
}

impl<K> KeyIx<K> {
    /// Creates a new `KeyIx` for the given key or index.
    #[must_use]
    pub const fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key this optic focuses on.
    pub const fn key(&self) -> &K {
        &self.key
    }
}

/// Returns an affine optic on the existing entry under `key`.
///
/// For `Vec<T>`, use a `usize` index.
#[must_use]
pub const fn ix<K>(key: K) -> KeyIx<K> {
    KeyIx::new(key)
}

impl<K, V, H> Affine<HashMap<K, V, H>, V> for KeyIx<K>
where
    K: Clone + Eq + Hash,
    V: Clone,
    H: BuildHasher + Clone,
{
    fn preview(&self, source: &HashMap<K, V, H>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn try_update(&self, source: &HashMap<K, V, H>, value: V) -> Option<HashMap<K, V, H>> {
        if !source.contains_key(&self.key) {
            return None;
        }
        let mut updated = source.clone();
        updated.insert(self.key.clone(), value);
        Some(updated)
    }
}

impl<K, V> Affine<BTreeMap<K, V>, V> for KeyIx<K>
where
    K: Clone + Ord,
    V: Clone,
{
    fn preview(&self, source: &BTreeMap<K, V>) -> Option<V> {
        source.get(&self.key).cloned()
    }

    fn try_update(&self, source: &BTreeMap<K, V>, value: V) -> Option<BTreeMap<K, V>> {
        if !source.contains_key(&self.key) {
            return None;
        }
        let mut updated = source.clone();
        updated.insert(self.key.clone(), value);
        Some(updated)
    }
}

impl<T: Clone> Affine<Vec<T>, T> for KeyIx<usize> {
    fn preview(&self, source: &Vec<T>) -> Option<T> {
        source.get(self.key).cloned()
    }

    fn try_update(&self, source: &Vec<T>, value: T) -> Option<Vec<T>> {
        if self.key >= source.len() {
            return None;
        }
        let mut updated = source.clone();
        updated[self.key] = value;
        Some(updated)
    }
}

impl<K, M, V> IntoAffine<M, V> for KeyIx<K>
where
    Self: Affine<M, V>,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

// =============================================================================
// first_where: Affine<Vec<T>, T>
// =============================================================================

/// An affine optic on the first element of a `Vec` satisfying a predicate.
///
/// Writing replaces the element at the position found by the predicate,
/// even when the new value no longer satisfies it. The position is not
/// searched again after the write, so a subsequent preview may focus on a
/// different element.
///
/// See [`first_where`].
#[derive(Clone)]
pub struct FirstWhere<F> {
    predicate: F,
}

impl<F> FirstWhere<F> {
    /// Creates a new `FirstWhere` from a predicate.
    #[must_use]
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

/// Returns an affine optic on the first element satisfying `predicate`.
///
/// # Example
///
/// ```
/// use optica::optics::{Affine, first_where};
///
/// let first_negative = first_where(|value: &i32| *value < 0);
///
/// let readings = vec![3, -1, 4, -5];
/// assert_eq!(first_negative.preview(&readings), Some(-1));
/// assert_eq!(first_negative.try_update(&readings, 0), Some(vec![3, 0, 4, -5]));
/// assert_eq!(first_negative.try_update(&vec![1, 2], 0), None);
/// ```
#[must_use]
pub const fn first_where<F>(predicate: F) -> FirstWhere<F> {
    FirstWhere::new(predicate)
}

impl<T, F> Affine<Vec<T>, T> for FirstWhere<F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    fn preview(&self, source: &Vec<T>) -> Option<T> {
        source.iter().find(|element| (self.predicate)(element)).cloned()
    }

    fn try_update(&self, source: &Vec<T>, value: T) -> Option<Vec<T>> {
        let position = source.iter().position(|element| (self.predicate)(element))?;
        let mut updated = source.clone();
        updated[position] = value;
        Some(updated)
    }
}

impl<T, F> IntoAffine<Vec<T>, T> for FirstWhere<F>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    type Output = Self;

    fn into_affine(self) -> Self::Output {
        self
    }
}

impl<F> std::fmt::Debug for FirstWhere<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FirstWhere").finish_non_exhaustive()
    }
}
