use crate::sequence::Sequence;

/// Direction for [`Sequence::sort_with`] and [`Sequence::sort_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Must `earlier` move behind `later`? Equal keys never do.
    fn out_of_order<K: PartialOrd>(self, earlier: &K, later: &K) -> bool {
        match self {
            SortOrder::Ascending => earlier > later,
            SortOrder::Descending => earlier < later,
        }
    }
}

impl<T> Sequence<T> {
    /// Sort ascending in place. Stable.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_with(SortOrder::Ascending)
    }

    /// Sort in place in the given direction. Stable.
    pub fn sort_with(&mut self, order: SortOrder)
    where
        T: PartialOrd,
    {
        self.bubble_sort(|a, b| order.out_of_order(a, b))
    }

    /// Sort in place comparing `key(value)` instead of the values themselves.
    /// Stable: elements with equal keys keep their relative order.
    ///
    /// `key` is called twice per comparison; it is not cached.
    pub fn sort_by_key<K, F>(&mut self, order: SortOrder, mut key: F)
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.bubble_sort(|a, b| order.out_of_order(&key(a), &key(b)))
    }

    /// Bubble sort by relinking nodes: passes over adjacent pairs until one
    /// pass makes no swap. Values never move between nodes.
    fn bubble_sort<F>(&mut self, mut out_of_order: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut swapped = true;
        while swapped {
            swapped = false;
            let mut prev = None;
            while let Some(first) = self.next_of(prev) {
                let Some(second) = self.next_of(Some(first)) else {
                    break;
                };
                if out_of_order(&self.nodes[&first].value, &self.nodes[&second].value) {
                    self.swap_after(prev);
                    swapped = true;
                    // `first` moved one step on; compare it with its new successor.
                    prev = Some(second);
                } else {
                    prev = Some(first);
                }
            }
        }
        debug_assert!(self.chain_is_consistent());
    }

    /// Swap the two nodes following `prev` (the head pair when `None`):
    /// `prev -> a -> b -> rest` becomes `prev -> b -> a -> rest`.
    fn swap_after(&mut self, prev: Option<usize>) {
        let Some(first) = self.next_of(prev) else {
            return;
        };
        let Some(second) = self.next_of(Some(first)) else {
            return;
        };
        let rest = self.next_of(Some(second));
        self.set_next(first, rest);
        self.set_next(second, Some(first));
        self.set_link(prev, Some(second));
        if self.tail == Some(second) {
            self.tail = Some(first);
        }
    }
}
