//! Topic search for OctoFlow.
//!
//! GitHub topics have no typed surface in the generic search transport, so
//! this crate carries its own small REST client for the endpoint plus the
//! task that drives it. The artifact contract is the same as the other
//! search tasks: one JSON line per topic, streamed to blob storage in
//! response order.
//!
//! ## Architectural Layer
//!
//! **Infrastructure + one task.** [`TopicSearchClient`] is the only HTTP
//! code in the workspace; everything else reaches GitHub through the
//! transport port in the `tasks` crate.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`client`] | [`TopicFinder`] port, [`TopicSearchClient`], URL rendering |
//! | [`model`] | Wire shapes: [`Topic`], [`TopicSearchResponse`] |
//! | [`search`] | The [`Search`] task |

pub mod client;
pub mod model;
pub mod search;

pub use client::{TopicFinder, TopicSearchClient};
pub use model::{Topic, TopicSearchResponse};
pub use search::{Is, Search};
