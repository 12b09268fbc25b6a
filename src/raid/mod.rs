//! Raid Module
//!
//! Application-side collaborators of the layout engine: who the raiders
//! are, which slot each one takes, and the session that ties roster,
//! boundary and layout together.

pub mod assign;
pub mod roster;
pub mod session;

pub use assign::{auto_assign, carry_over, clear_assignments};
pub use roster::{ImportFormat, ImportReport, MAX_RAIDERS, Raider, RaiderId, Roster, RosterError};
pub use session::{LayoutSession, SetupError, SetupExport};
