//! Postbox is a work queue demo on a managed Redis list.
//!
//! This is an _umbrella crate_ for re-exporting the components from a single
//! place according to the features enabled: `produce` for the `postbox_produce`
//! crate with the `GET /publish` endpoint, `consume` for the `postbox_consume`
//! crate with the polling consumer.
//!
//! Shared utilities from `core` will always be available, regardless of
//! the features enabled.

pub mod logging;

pub use postbox_core as core;

#[cfg(feature = "produce")]
pub use postbox_produce as produce;

#[cfg(feature = "consume")]
pub use postbox_consume as consume;

pub mod prelude {
    pub use crate::core::prelude::*;

    #[cfg(feature = "produce")]
    pub use crate::produce::prelude::*;

    #[cfg(feature = "consume")]
    pub use crate::consume::prelude::*;
}
