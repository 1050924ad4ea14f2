use std::collections::{vec_deque, VecDeque};

pub const DEFAULT_TRACE_SIZE: usize = 30;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TraceError {
    #[error("Trace buffer must hold at least one entry")]
    ZeroCapacity,
}

/// Bounded history of rendered curves, oldest first.
#[derive(Debug, Clone)]
pub struct TraceBuffer<T> {
    // Contract: entries.len() <= max_len and max_len > 0
    entries: VecDeque<T>,
    max_len: usize,
}

impl<T> Default for TraceBuffer<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(DEFAULT_TRACE_SIZE),
            max_len: DEFAULT_TRACE_SIZE,
        }
    }
}

impl<T> TraceBuffer<T> {
    pub fn new(max_len: usize) -> Result<Self, TraceError> {
        if max_len == 0 {
            return Err(TraceError::ZeroCapacity);
        }
        Ok(Self {
            entries: VecDeque::with_capacity(max_len),
            max_len,
        })
    }

    /// Appends `item`, evicting the oldest entries once the bound is exceeded.
    pub fn push(&mut self, item: T) {
        self.entries.push_back(item);
        while self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
    }

    /// Drops everything retained and applies `max_len` from now on.
    pub fn resize(&mut self, max_len: usize) -> Result<(), TraceError> {
        if max_len == 0 {
            return Err(TraceError::ZeroCapacity);
        }
        self.entries.clear();
        self.max_len = max_len;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<'a, T> IntoIterator for &'a TraceBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How far the entry at `index` (0 = oldest) has faded: 1.0 for the oldest,
/// falling linearly by `1 / max_len` per newer entry.
pub fn fade_level(index: usize, max_len: usize) -> f32 {
    if max_len == 0 {
        return 1.0;
    }
    let index = index.min(max_len);
    (max_len - index) as f32 / max_len as f32
}
