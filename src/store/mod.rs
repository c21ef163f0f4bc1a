//! Authoritative content collection and its persistence
//!
//! The [`ContentStore`] owns the ordered collection and writes the full
//! collection to a [`KeyValueStore`] under [`STORAGE_KEY`] after every mutation.
//!
//! # Error Handling Strategy
//!
//! - **Load**: a missing key, an unreadable value or malformed JSON all start
//!   the store empty. A warning is logged; nothing is returned to the caller.
//! - **Validation**: `add` rejects blank text with [`StoreError::Validation`]
//!   and leaves the collection untouched.
//! - **Ids**: a persisted id of `u64::MAX` leaves nothing to assign, so the
//!   load is treated as malformed. `add` returns [`StoreError::IdsExhausted`]
//!   instead of wrapping.
//! - **Write failures**: a mutation that fails to persist still succeeds in
//!   memory. The failure is logged, [`ContentStore::is_diverged`] reports the
//!   drift, and the next successful write clears it. [`ContentStore::flush`]
//!   retries and returns [`StoreError::Persistence`] on failure.

pub mod codec;
pub mod content_store;
pub mod error;
pub mod provider;

pub use codec::{decode_items, encode_items};
pub use content_store::{ContentStore, STORAGE_KEY};
pub use error::StoreError;
pub use provider::{FileStorage, KeyValueStore, MemoryStorage};
