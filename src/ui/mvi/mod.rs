//! Model-View-Intent (MVI) primitives for the widget state layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value type holding the selector fields and derived date
//! - **Intent**: a requested field update
//! - **Reducer**: pure function mapping (state, intent) to the next state
//!
//! The controller in [`crate::ui::date_select`] layers the two
//! synchronization directions on top of this loop; the loop itself stays
//! pure and deterministic.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{apply, Reducer};
pub use state::UiState;
