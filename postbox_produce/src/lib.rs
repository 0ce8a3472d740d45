//! `postbox_produce` publishes canned blog posts to Postbox queues.
//!
//! A [`Producer`] walks a fixed catalog in round-robin order and pushes each
//! selected post to the tail of the queue. The [`server`] module exposes that
//! as `GET /publish`.

mod catalog;
mod producer;
mod server_config;

pub mod server;

pub use catalog::default_catalog;
pub use producer::{Producer, Published};
pub use server::PublishResponse;
pub use server_config::ServerConfig;

pub mod prelude {
    pub use crate::{Producer, Published, PublishResponse, ServerConfig};
}
