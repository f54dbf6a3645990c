// Opaque accumulator: callers see only add_number/sum; storage lives in a private module.

use tracing::trace;

mod inner {
    /// Storage behind `DataProcessor`. Can change without touching callers.
    #[derive(Debug, Default)]
    pub(super) struct Inner {
        data: Vec<i32>,
    }

    impl Inner {
        pub(super) fn push(&mut self, n: i32) {
            self.data.push(n);
        }

        pub(super) fn sum(&self) -> i64 {
            self.data.iter().map(|&n| i64::from(n)).sum()
        }

        pub(super) fn len(&self) -> usize {
            self.data.len()
        }
    }
}

#[derive(Debug, Default)]
pub struct DataProcessor {
    inner: Box<inner::Inner>,
}

impl DataProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_number(&mut self, number: i32) {
        trace!(number, "add");
        self.inner.push(number);
    }

    /// Arithmetic sum of everything added so far; independent of insertion order.
    pub fn sum(&self) -> i64 {
        self.inner.sum()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<i32> for DataProcessor {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for n in iter {
            self.add_number(n);
        }
    }
}

impl FromIterator<i32> for DataProcessor {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut p = Self::new();
        p.extend(iter);
        p
    }
}
