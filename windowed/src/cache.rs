#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemStyle;

#[cfg(feature = "std")]
type StyleMap<K> = HashMap<K, ItemStyle>;
#[cfg(not(feature = "std"))]
type StyleMap<K> = BTreeMap<K, ItemStyle>;

#[cfg(feature = "std")]
pub(crate) trait StyleKey: core::hash::Hash + Eq + Copy {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Copy> StyleKey for K {}

#[cfg(not(feature = "std"))]
pub(crate) trait StyleKey: Ord + Copy {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Copy> StyleKey for K {}

/// Memoized per-item placement, keyed by index (lists) or `(row, column)`
/// (grids).
///
/// Positions are scroll-independent, so entries survive scroll events and
/// re-renders. The whole map drops when the stamp changes: a size policy,
/// layout axis, or reading direction change shifts offsets for every index,
/// so per-entry invalidation would be wrong.
#[derive(Clone, Debug)]
pub(crate) struct LayoutCache<K, S> {
    stamp: Option<S>,
    styles: StyleMap<K>,
}

impl<K: StyleKey, S: Copy + PartialEq> LayoutCache<K, S> {
    pub(crate) fn new() -> Self {
        Self {
            stamp: None,
            styles: StyleMap::new(),
        }
    }

    pub(crate) fn style_for(
        &mut self,
        stamp: S,
        key: K,
        build: impl FnOnce() -> ItemStyle,
    ) -> ItemStyle {
        if self.stamp != Some(stamp) {
            self.styles.clear();
            self.stamp = Some(stamp);
        }
        if let Some(style) = self.styles.get(&key) {
            return *style;
        }
        let style = build();
        self.styles.insert(key, style);
        style
    }

    pub(crate) fn clear(&mut self) {
        self.styles.clear();
    }
}
