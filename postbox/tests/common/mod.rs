#![allow(dead_code, unused_imports)]

use postbox::core::{BlogPost, ListQueue, PostboxError, Result};
#[cfg(feature = "consume")]
use postbox::consume::Handler;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the remote list; clones share the same entries
#[derive(Clone, Default)]
pub struct MemoryQueue {
    entries: Arc<Mutex<VecDeque<String>>>,
    pops: Arc<AtomicUsize>,
    failing_pops: Arc<AtomicUsize>,
    failing_pushes: Arc<AtomicBool>,
}

impl MemoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<S: ToString>(entries: impl IntoIterator<Item = S>) -> Self {
        let queue = Self::new();
        queue
            .entries
            .lock()
            .unwrap()
            .extend(entries.into_iter().map(|e| e.to_string()));
        queue
    }

    /// Make the next `count` pops fail like a dropped connection would
    pub fn fail_next_pops(&self, count: usize) {
        self.failing_pops.store(count, Ordering::SeqCst);
    }

    pub fn fail_pushes(&self, fail: bool) {
        self.failing_pushes.store(fail, Ordering::SeqCst);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    pub fn pop_count(&self) -> usize {
        self.pops.load(Ordering::SeqCst)
    }
}

fn connection_reset() -> PostboxError {
    PostboxError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "connection reset by peer",
    ))
}

impl ListQueue for MemoryQueue {
    fn name(&self) -> &str {
        "test_queue"
    }

    async fn push(&self, entry: &str) -> Result<usize> {
        if self.failing_pushes.load(Ordering::SeqCst) {
            return Err(connection_reset());
        }
        let mut entries = self.entries.lock().unwrap();
        entries.push_back(entry.to_string());
        Ok(entries.len())
    }

    async fn pop(&self) -> Result<Option<String>> {
        self.pops.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failing_pops
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(connection_reset());
        }
        Ok(self.entries.lock().unwrap().pop_front())
    }

    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }
}

/// Remembers every post it is given; fails them all when `failing`
#[cfg(feature = "consume")]
#[derive(Clone, Default)]
pub struct RecordingHandler {
    posts: Arc<Mutex<Vec<BlogPost>>>,
    failing: bool,
}

#[cfg(feature = "consume")]
impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn posts(&self) -> Vec<BlogPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[cfg(feature = "consume")]
impl Handler for RecordingHandler {
    async fn handle(&self, post: &BlogPost) -> Result<()> {
        self.posts.lock().unwrap().push(post.clone());
        if self.failing {
            return Err(PostboxError::InvalidConfig("handler refuses posts".to_string()));
        }
        Ok(())
    }
}

/// Collects everything the fmt subscriber writes while installed on the current thread
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self, level: &str) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .filter(|line| line.contains(level))
            .map(str::to_string)
            .collect()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
