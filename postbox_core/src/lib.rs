//! `postbox_core` provides shared utilities for the Postbox queue system.
//!
//! This crate includes the message type, the store clients (Upstash REST and
//! native Redis), queue contexts, error types and the startup connectivity check.

mod blog_post;
mod context;
mod error;
mod forum;
mod queue;
mod rest;
mod store_config;

pub mod startup;

pub use blog_post::BlogPost;
pub use context::{Context, DEFAULT_QUEUE};
pub use error::{PostboxError, Result};
pub use forum::Forum;
pub use queue::ListQueue;
pub use rest::RestClient;
pub use store_config::{
    PLACEHOLDER_TOKEN, PLACEHOLDER_URL, StoreConfig, TOKEN_ENV_VAR, Transport, URL_ENV_VAR,
};

pub mod prelude {
    pub use crate::{BlogPost, Context, Forum, ListQueue, PostboxError, StoreConfig};
}
