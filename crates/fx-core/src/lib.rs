//! Platform-independent state for the landing-stage effects.
//!
//! Everything in this crate is pure Rust with no DOM or canvas references, so
//! it builds and tests on the host. The web frontend consumes these types to
//! drive element styles and canvas draws once per animation frame: listeners
//! enqueue [`events::InputEvent`]s, the frame callback feeds them to
//! [`stage::Stage::handle_event`], then calls [`stage::Stage::tick`] and
//! writes out whatever the effect states computed.

pub mod config;
pub mod constants;
pub mod events;
pub mod follower;
pub mod input;
pub mod orbit;
pub mod stage;
pub mod starfield;

pub use config::*;
pub use events::InputEvent;
pub use orbit::{OrbitRing, TagPlacement};
pub use stage::Stage;
