#![forbid(unsafe_code)]

//! # pedestal-net
//!
//! HTTP transport for pedestal.
//!
//! Downloads a remote resource into a uniquely named temp file inside a
//! caller-provided staging directory. The staging directory is expected to
//! live on the same filesystem as the final cache location, so that the
//! caller's subsequent rename is atomic.
//!
//! The [`Net`] trait is the seam for higher layers; [`HttpClient`] is the
//! reqwest-backed implementation.

mod client;
mod error;
mod traits;
mod types;

pub use client::HttpClient;
pub use error::{NetError, NetResult};
pub use traits::Net;
pub use types::NetOptions;
