/// Every ordered selection of `length` items drawn from a slice with
/// repetition, in lexicographic order (the last position varies fastest).
///
/// This uses an odometer over item indices so nothing is materialized up
/// front.
#[derive(Debug, Clone)]
pub struct Selections<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T: Copy> Selections<'a, T> {
    pub fn new(items: &'a [T], length: usize) -> Self {
        Self {
            items,
            indices: vec![0; length],
            exhausted: items.is_empty() && length > 0,
        }
    }

    fn advance(&mut self) {
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < self.items.len() {
                return;
            }
            *index = 0;
        }
        // every position wrapped around
        self.exhausted = true;
    }
}

impl<T: Copy> Iterator for Selections<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self
            .indices
            .iter()
            .filter_map(|&i| self.items.get(i).copied())
            .collect();
        self.advance();
        Some(current)
    }
}
