//! Transcoding between the JSON form of WebAuthn ceremony options issued by a
//! relying party and the binary structures a platform credential API expects.
//!
//! Requests travel `json` -> [`transcode::request`] -> [`api`] -> [`Platform`],
//! results travel back through [`transcode::response`]. [`Ceremony`] ties the
//! three steps together for one registration or authentication.

pub mod api;
pub mod ceremony;
pub mod codec;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod json;
pub mod platform;
pub mod transcode;

pub use ceremony::{Ceremony, CeremonyStage};
pub use config::{CeremonyConfig, TypeHints};
pub use error::{Error, Result};
pub use platform::Platform;
