//! playground-common - Shared state types for the pattern playground
//!
//! Holds the editor state record, its URL fragment encoding, and the
//! restore logic used when the page loads from a share link. Nothing in here
//! touches the browser; the web crate supplies the fragment through
//! [`FragmentSource`].

pub mod codec;
pub mod config;
pub mod lang;
pub mod mode;
pub mod share;
pub mod state;

pub use codec::{decode_patch, deserialize, serialize, CodecError};
pub use config::{ConfigError, PlaygroundConfig};
pub use lang::{Lang, NotSupported};
pub use mode::{Mode, UnknownMode};
pub use share::{fragment_of, restore_state, restore_state_from, share_url, FragmentSource};
pub use state::{State, StatePatch};
