mod field;
mod intent;
mod reducer;
mod state;

pub use field::{Field, UnknownField};
pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{FilterMeta, Filters, LazyState, MatchMode, SortOrder, DEFAULT_PAGE_SIZE};
