//! # rpsls
//!
//! Domain logic for a Rock-Paper-Scissors-Lizard-Spock browser front-end.
//!
//! The browser UI (see the `rpsls_web` crate) is thin glue; everything with
//! observable rules lives here so it can be unit-tested on the host without a
//! wasm toolchain:
//!
//! - [`model`]: wire types for choices, play results, rounds, and scores
//! - [`window`]: the fixed-capacity trailing window behind "last 5" views
//! - [`projection`]: loading/error lifecycle of one read projection
//! - [`live`]: the live-match state machine driven by hub events
//! - [`protocol`]: JSON messages exchanged over the game hub
//! - [`endpoints`]: the REST endpoint catalog and hub URL
//!
//! ## Quick start
//!
//! ```
//! use rpsls::prelude::*;
//!
//! let mut game = LiveMatch::new();
//! assert!(game.join());
//! game.opened();
//!
//! let effects = game.on_event(ServerEvent::GameStarted {
//!     message: "Game started!".to_string(),
//! });
//! assert_eq!(effects, vec![LiveEffect::ReloadChoices]);
//! assert_eq!(game.phase(), LivePhase::InRound);
//! ```

pub mod endpoints;
pub mod error;
pub mod live;
pub mod model;
pub mod projection;
pub mod protocol;
pub mod window;

pub use error::Error;

pub mod prelude {
    pub use crate::endpoints::Endpoints;
    pub use crate::error::Error;
    pub use crate::live::{LiveEffect, LiveMatch, LivePhase};
    pub use crate::model::{selected_player, Choice, ChoiceSet, PlayResult, RoundRecord, ScoreRecord};
    pub use crate::projection::Projection;
    pub use crate::protocol::{ClientCommand, ServerEvent};
    pub use crate::window::{TrailingWindow, RECENT_WINDOW};
}
