pub mod criteria;
pub mod query;
pub mod state;

pub use criteria::{FilterCriteria, SortKey, LEVELS_THREE_PLUS};
pub use query::{query, PageRequest, QueryResult};
pub use state::CatalogState;
