use rand::{seq::SliceRandom, Rng};

/// Unordered working set of a greedy phase.
///
/// Iteration order is the order of the backing vector, fixed by one shuffle
/// at construction. `pop` removes the last element, `sample` is a prefix of at
/// most `size` elements, and `take` swap-removes, so the tail element moves
/// into the freed slot.
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Pool<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn shuffled<R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Self {
        items.shuffle(rng);
        Self { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn sample(&self, size: usize) -> &[T] {
        &self.items[..size.min(self.items.len())]
    }

    pub fn take(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    /// Index and score of the best element in the sample. A later element
    /// replaces the current best only when its score is strictly greater.
    pub fn best_in_sample<S, F>(&self, size: usize, mut score: F) -> Option<(usize, S)>
    where
        S: Ord,
        F: FnMut(&T) -> S,
    {
        let mut best: Option<(usize, S)> = None;
        for (i, item) in self.sample(size).iter().enumerate() {
            let s = score(item);
            let replace = match &best {
                Some((_, best_score)) => s > *best_score,
                None => true,
            };
            if replace {
                best = Some((i, s));
            }
        }
        best
    }
}
