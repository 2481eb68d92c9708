use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Per-index size lookup for variable policies.
///
/// The function is assumed stable: for a given index it must return the same
/// size on every call until [`SizePolicy::reset_from`] (or the engine's
/// `reset_after_index`) explicitly invalidates it.
pub type SizeFn = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// Tail pricing for variable policies before their items are resolved.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: u32 = 50;

/// Item sizing along one axis, chosen once at configuration time.
#[derive(Clone)]
pub enum SizePolicy {
    /// Every item shares a single size; all lookups are O(1) closed forms.
    Fixed(u32),
    /// Sizes come from a per-index function, resolved lazily and cached.
    Variable(VariableSize),
}

impl SizePolicy {
    pub fn fixed(size: u32) -> Self {
        Self::Fixed(size)
    }

    pub fn variable(size_of: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::Variable(VariableSize::new(size_of, DEFAULT_ESTIMATED_ITEM_SIZE))
    }

    /// Like [`SizePolicy::variable`], with an explicit estimate for items not
    /// yet resolved (used by [`SizePolicy::total_size`] to price the tail).
    pub fn variable_with_estimate(
        size_of: impl Fn(usize) -> u32 + Send + Sync + 'static,
        estimated_item_size: u32,
    ) -> Self {
        Self::Variable(VariableSize::new(size_of, estimated_item_size))
    }

    /// Size of the item at `index`.
    ///
    /// Panics when `index` is outside `[0, count)`; callers clamp first.
    pub fn size_of(&self, index: usize, count: usize) -> u32 {
        assert!(
            index < count,
            "item index out of bounds (index={index}, count={count})"
        );
        match self {
            Self::Fixed(size) => *size,
            Self::Variable(v) => v.span(index).size,
        }
    }

    /// Start offset of the item at `index`.
    ///
    /// Panics when `index` is outside `[0, count)`; callers clamp first.
    pub fn offset_of(&self, index: usize, count: usize) -> u64 {
        assert!(
            index < count,
            "item index out of bounds (index={index}, count={count})"
        );
        match self {
            Self::Fixed(size) => index as u64 * *size as u64,
            Self::Variable(v) => v.span(index).offset,
        }
    }

    /// Total extent of all `count` items.
    ///
    /// Exact for fixed policies; for variable policies the unresolved tail is
    /// priced at the configured estimated item size.
    pub fn total_size(&self, count: usize) -> u64 {
        match self {
            Self::Fixed(size) => count as u64 * *size as u64,
            Self::Variable(v) => v.total_size(count),
        }
    }

    /// The largest index whose offset is ≤ `offset`, clamped to
    /// `[0, count - 1]`. Returns 0 when `count == 0`.
    pub fn index_for_offset(&self, offset: u64, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        match self {
            Self::Fixed(size) => {
                if *size == 0 {
                    return 0;
                }
                ((offset / *size as u64) as usize).min(count - 1)
            }
            Self::Variable(v) => v.index_for_offset(offset, count).min(count - 1),
        }
    }

    /// Discards cached spans at and after `index` (variable policies only).
    ///
    /// Call after the size function's answers changed for those indices;
    /// downstream offsets are recomputed on the next lookup.
    pub fn reset_from(&self, index: usize) {
        if let Self::Variable(v) = self {
            v.reset_from(index);
        }
    }

    /// Cache stamp component: changes whenever cached offsets may have
    /// shifted for every index.
    pub(crate) fn fingerprint(&self) -> PolicyFingerprint {
        match self {
            Self::Fixed(size) => PolicyFingerprint::Fixed(*size),
            Self::Variable(v) => PolicyFingerprint::Variable(v.generation()),
        }
    }
}

impl fmt::Debug for SizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::Variable(v) => f.debug_tuple("Variable").field(v).finish(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PolicyFingerprint {
    Fixed(u32),
    Variable(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    offset: u64,
    size: u32,
}

#[derive(Clone, Debug, Default)]
struct SpanCache {
    spans: Vec<Span>,
    generation: u64,
}

/// Variable sizing with a lazily extended span table.
///
/// Spans are materialized front-to-back on demand, so a lookup near index `i`
/// costs O(i) once and O(log i) afterwards. Offset lookups binary-search the
/// resolved prefix and fall back to exponential search past it.
#[derive(Clone)]
pub struct VariableSize {
    size_of: SizeFn,
    estimated_item_size: u32,
    cache: RefCell<SpanCache>,
}

impl VariableSize {
    fn new(size_of: impl Fn(usize) -> u32 + Send + Sync + 'static, estimated_item_size: u32) -> Self {
        Self {
            size_of: Arc::new(size_of),
            estimated_item_size,
            cache: RefCell::new(SpanCache::default()),
        }
    }

    fn span(&self, index: usize) -> Span {
        let mut cache = self.cache.borrow_mut();
        if index >= cache.spans.len() {
            let mut offset = cache
                .spans
                .last()
                .map(|s| s.offset.saturating_add(s.size as u64))
                .unwrap_or(0);
            for i in cache.spans.len()..=index {
                let size = (self.size_of)(i);
                cache.spans.push(Span { offset, size });
                offset = offset.saturating_add(size as u64);
            }
        }
        cache.spans[index]
    }

    fn total_size(&self, count: usize) -> u64 {
        let cache = self.cache.borrow();
        let resolved = cache.spans.len().min(count);
        let resolved_extent = match resolved.checked_sub(1).map(|i| cache.spans[i]) {
            Some(last) => last.offset.saturating_add(last.size as u64),
            None => 0,
        };
        let tail = (count - resolved) as u64 * self.estimated_item_size as u64;
        resolved_extent.saturating_add(tail)
    }

    fn index_for_offset(&self, offset: u64, count: usize) -> usize {
        let resolved = self.cache.borrow().spans.len().min(count);
        let frontier_offset = match resolved.checked_sub(1) {
            Some(i) => self.cache.borrow().spans[i].offset,
            None => 0,
        };
        if resolved > 0 && frontier_offset >= offset {
            self.search_resolved(resolved - 1, 0, offset)
        } else {
            self.search_past_frontier(resolved.saturating_sub(1), offset, count)
        }
    }

    fn search_resolved(&self, high: usize, low: usize, offset: u64) -> usize {
        let mut low = low as isize;
        let mut high = high as isize;
        while low <= high {
            let middle = low + (high - low) / 2;
            let current = self.span(middle as usize).offset;
            if current == offset {
                return middle as usize;
            } else if current < offset {
                low = middle + 1;
            } else {
                high = middle - 1;
            }
        }
        if low > 0 { (low - 1) as usize } else { 0 }
    }

    fn search_past_frontier(&self, start: usize, offset: u64, count: usize) -> usize {
        let mut index = start;
        let mut interval = 1;
        while index < count && self.span(index).offset < offset {
            index += interval;
            interval *= 2;
        }
        self.search_resolved(index.min(count - 1), index / 2, offset)
    }

    fn reset_from(&self, index: usize) {
        let mut cache = self.cache.borrow_mut();
        if index < cache.spans.len() {
            cache.spans.truncate(index);
        }
        cache.generation = cache.generation.wrapping_add(1);
    }

    fn generation(&self) -> u64 {
        self.cache.borrow().generation
    }
}

impl fmt::Debug for VariableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableSize")
            .field("estimated_item_size", &self.estimated_item_size)
            .field("resolved", &self.cache.borrow().spans.len())
            .finish_non_exhaustive()
    }
}
