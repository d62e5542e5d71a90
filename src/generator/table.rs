use std::collections::HashMap;

use crate::generator::partial::PartialResult;

/// Achievable values mapped to the ways of reaching them, at most `cap`
/// ways per value (unbounded when `cap` is `None`)
#[derive(Debug, Clone, Default)]
pub struct SubexpressionTable {
    entries: HashMap<i64, Vec<PartialResult>>,
    cap: Option<usize>,
}

impl SubexpressionTable {
    pub fn new(cap: Option<usize>) -> Self {
        Self {
            entries: HashMap::new(),
            cap,
        }
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    /// Whether another way of reaching `value` would still be kept
    pub fn has_room(&self, value: i64) -> bool {
        match (self.cap, self.entries.get(&value)) {
            (None, _) | (_, None) => true,
            (Some(cap), Some(existing)) => existing.len() < cap,
        }
    }

    /// Insert `partial` unless its value is already at the cap
    pub fn insert(&mut self, partial: PartialResult) -> bool {
        if !self.has_room(partial.value()) {
            return false;
        }
        self.entries.entry(partial.value()).or_default().push(partial);
        true
    }

    /// Append every entry of `other`, keeping its per-value order
    pub fn merge(&mut self, other: SubexpressionTable) {
        for (_, partials) in other.entries {
            for partial in partials {
                self.insert(partial);
            }
        }
    }

    pub fn get(&self, value: i64) -> Option<&[PartialResult]> {
        self.entries.get(&value).map(Vec::as_slice)
    }

    /// Achievable values, ascending
    pub fn sorted_values(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.entries.keys().copied().collect();
        values.sort_unstable();
        values
    }

    /// Number of distinct achievable values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn partial_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
