//! Configuration store and its shared handle
//!
//! [`Config`] is the single-threaded engine. [`ConfigHandle`] wraps it in a
//! mutex so an application can hand the same store to every consumer.

mod coerce;
mod handle;
mod store;

pub use handle::ConfigHandle;
pub use store::{Config, URL_CONFIG_PREFIX};
