//! On/off preference sets.

use std::fmt::Debug;

/// A key in a fixed set of boolean preferences.
pub trait ToggleKey: Copy + Eq + Debug + 'static {
    /// Every key, in display order.
    const ALL: &'static [Self];

    /// Stable identifier used in URLs and JSON.
    fn slug(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn icon(&self) -> &'static str;

    /// Value before the user changes anything.
    fn default_value(&self) -> bool;

    /// Look up a key by slug.
    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.slug() == slug)
    }
}

/// Current values for every key of `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<K: ToggleKey> {
    values: Vec<(K, bool)>,
}

impl<K: ToggleKey> Default for ToggleSet<K> {
    fn default() -> Self {
        Self {
            values: K::ALL.iter().map(|k| (*k, k.default_value())).collect(),
        }
    }
}

impl<K: ToggleKey> ToggleSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: K) -> bool {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .is_some_and(|(_, v)| *v)
    }

    pub fn set(&mut self, key: K, value: bool) {
        if let Some(entry) = self.values.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        }
    }

    /// Flip a value and return the new one.
    pub fn toggle(&mut self, key: K) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }

    /// Keys and values in display order.
    pub fn iter(&self) -> impl Iterator<Item = (K, bool)> + '_ {
        self.values.iter().copied()
    }

    /// Number of keys switched on.
    pub fn enabled_count(&self) -> usize {
        self.values.iter().filter(|(_, v)| *v).count()
    }
}
