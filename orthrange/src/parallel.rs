use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{rectangle::Rectangle, search::RangeSearch};

/// Answers every query using multiple CPU threads with [rayon](https://github.com/rayon-rs/rayon).
///
/// Indexes are immutable once built, so any number of queries can read one concurrently. The
/// result of the `i`-th query is at index `i` of the returned vector.
pub fn query_all<T, P>(index: &T, queries: &[Rectangle]) -> Vec<Vec<P>>
where
    T: RangeSearch<P> + Sync + ?Sized,
    P: Send,
{
    queries
        .par_iter()
        .map(|query| index.query(query))
        .collect()
}
