//! Postbox consumer components for polling posts from a queue
//!
//! The Consumer pops entries from the head of the queue at a fixed interval,
//! parses them into posts and passes them to a Handler.

mod consumer;
mod consumer_config;
mod handler;

pub use consumer::{Consumer, Poll};
pub use consumer_config::ConsumerConfig;
pub use handler::{Handler, LogHandler};

pub mod prelude {
    pub use crate::{Consumer, ConsumerConfig, Handler, LogHandler, Poll};
}
