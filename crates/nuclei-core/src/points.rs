use std::collections::btree_map;
use std::collections::BTreeMap;

/// Physical `(x, y, z)` position of a point.
pub type Position = [f64; 3];

/// Values keyed by point id, iterated in ascending id order.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMap<T> {
    entries: BTreeMap<u64, T>,
}

impl<T> Default for PointMap<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> PointMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one previously stored under `id`.
    pub fn insert(&mut self, id: u64, value: T) -> Option<T> {
        self.entries.insert(id, value)
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> + '_ {
        self.entries.iter().map(|(&id, v)| (id, v))
    }
}

impl<T> FromIterator<(u64, T)> for PointMap<T> {
    fn from_iter<I: IntoIterator<Item = (u64, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for PointMap<T> {
    type Item = (u64, T);
    type IntoIter = btree_map::IntoIter<u64, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
