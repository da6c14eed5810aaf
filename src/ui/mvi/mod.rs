//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow for the UI layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are the only place state transitions happen; side effects
//! (rasterization, network, clipboard) are performed by the session
//! controller after the transition.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
