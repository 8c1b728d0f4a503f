//! Core services for the Haunted Nexus backend.
//!
//! This crate contains:
//! - TTL cache with lazy expiry
//! - External source identifiers, normalizer, and the uniform response envelope
//! - Archived-page snapshot retrieval
//! - Journal emotion classification, haunted-location catalog, and stitching
//! - HTTP transport abstraction and process configuration

pub mod cache;
pub mod config;
pub mod emotion;
pub mod envelope;
pub mod http_client;
pub mod locations;
pub mod snapshot;
pub mod source;
pub mod sources;
pub mod stitch;
pub mod timestamp;

pub use cache::CacheStore;
pub use config::Config;
pub use emotion::Emotion;
pub use envelope::NormalizedResponse;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use locations::HauntedLocation;
pub use snapshot::{ArchiveSnapshot, SnapshotError, SnapshotService};
pub use source::{SourceError, SourceId};
pub use sources::ExternalSources;
pub use stitch::stitch;
pub use timestamp::UtcDateTime;
