//! Roster client
//!
//! Typed HTTP client for the Roster API and the page controller that keeps a
//! view in step with it:
//! - `client`: `NamesApi` port and its reqwest implementation
//! - `controller`: load/submit flow with scoped busy state
//! - `view`: the rendering surface the controller drives
//! - `terminal`: a plain-text view for the `roster` binary

pub mod client;
pub mod controller;
pub mod error;
pub mod terminal;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use client::{AddedName, NamesApi, RosterClient};
pub use controller::{PageController, SubmitOutcome, NOTICE_DURATION};
pub use error::ClientError;
pub use terminal::{Command, TerminalView};
pub use view::PageView;
