//! Model-View-Intent (MVI) primitives for the gallery table.
//!
//! Every piece of table state is an immutable value that is only ever
//! replaced wholesale by a reducer, so observers see one atomic value per
//! change and never a half-applied edit.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers (fetch controller, renderer)
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
