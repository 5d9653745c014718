#![forbid(unsafe_code)]

//! # pedestal
//!
//! Fetch-and-cache coordinator for remote 3D preview assets.
//!
//! Given an `http(s)` URL, [`PreviewResolver::resolve`] returns a
//! [`PreviewHandle`] over a local copy of the resource: from the persistent
//! disk cache when a valid copy exists, otherwise by downloading, atomically
//! replacing any stale copy, and recording the new location keyed by the
//! original URL.
//!
//! ## Contract
//!
//! - Exactly one terminal result per call: `Ok(handle)` or one
//!   [`PreviewError`]. A cache hit returns immediately and never triggers a
//!   redundant download.
//! - The renderability decision belongs to the presentation layer; it is
//!   injected through the [`Renderability`] seam and consulted on every
//!   successful resolution, hit or fresh fetch.
//! - Concurrent resolves of the same URL are serialized, so a URL is fetched
//!   at most once at a time and remove/rename placements cannot interleave.
//!
//! ## Example
//!
//! ```ignore
//! let resolver = PreviewResolver::new(ResolverOptions::new("/var/cache/previews"))?;
//! let handle = resolver.resolve(&url).await?;
//! viewer.present(handle.local_path());
//! ```

mod error;
mod handle;
mod options;
mod renderable;
mod resolver;

pub use error::{PreviewError, PreviewResult};
pub use handle::PreviewHandle;
pub use options::{LoadingHook, ResolverOptions};
pub use renderable::{ExtensionRenderability, Renderability};
pub use resolver::PreviewResolver;

// Re-exported so callers can configure or mock the transport without
// depending on the transport crate directly.
pub use pedestal_net::{HttpClient, Net, NetError, NetOptions};
