mod intent;
mod reducer;
mod state;

pub use intent::ResultsIntent;
pub use reducer::ResultsReducer;
pub use state::ResultState;
