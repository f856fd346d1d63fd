/// Running sums keyed by `K`, remembering the order in which keys first
/// appeared.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    entries: Vec<(K, V)>,
    index: std::collections::HashMap<K, usize>,
}

impl<K, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
            index: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    /// Order-sensitive.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `value` to `key`'s total. A key seen for the first time starts at
    /// `V::default()` and is placed after every existing key.
    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Default + std::ops::AddAssign,
    {
        let i = *self.index.entry(key).or_insert_with(|| {
            self.entries.push((key, V::default()));
            self.entries.len() - 1
        });
        self.entries[i].1 += value;
    }

    /// Iterates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy,
        V: Copy,
    {
        self.entries.iter().copied()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
