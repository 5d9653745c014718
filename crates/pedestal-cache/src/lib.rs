#![forbid(unsafe_code)]

//! # pedestal-cache
//!
//! Persistent URL-keyed cache for downloaded preview assets.
//!
//! ## Key mapping (normative)
//!
//! - Cache key: fixed namespace prefix + full URL string (see [`cache_key`]).
//!   The prefix keeps preview entries from colliding with unrelated data if
//!   the index file is ever shared.
//! - On-disk name: hex-truncated SHA-256 of the full URL, plus the extension
//!   of the URL's last path segment (see [`cached_file_name`]). Hashing the
//!   full URL means two different URLs sharing a basename can never overwrite
//!   each other's cached file.
//!
//! ## Validity (normative)
//!
//! A recorded mapping is never trusted blindly: [`CacheIndex::lookup`] also
//! checks that the mapped file still exists on disk. A stale mapping behaves
//! as a miss, not an error. The filesystem is the source of truth; the index
//! is metadata that can be rebuilt by re-fetching.

mod error;
mod index;
mod key;
mod placement;

pub use error::{CacheError, CacheResult};
pub use index::CacheIndex;
pub use key::{cache_key, cached_file_name};
pub use placement::place;
