use crate::Result;
use std::future::Future;

/// A named remote list used as a FIFO queue: push to the tail, pop from the head
pub trait ListQueue: Send + Sync {
    /// Name of the list every producer and consumer must agree on
    fn name(&self) -> &str;

    /// Append an entry to the tail, returning the list length after the push
    fn push<'a>(&'a self, entry: &'a str) -> impl Future<Output = Result<usize>> + Send + 'a;

    /// Remove and return the head entry, `None` when the list is empty
    fn pop(&self) -> impl Future<Output = Result<Option<String>>> + Send + '_;

    /// Round-trip liveness check against the store holding the list
    fn ping(&self) -> impl Future<Output = Result<String>> + Send + '_;
}
