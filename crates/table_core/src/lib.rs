//! Filter, search and sort rules for the product table, independent of any renderer.

pub mod collate;
pub mod pipeline;
pub mod table;
pub mod view_state;

pub use pipeline::visible;
pub use table::{TableRow, TableView, UserTone, NO_MATCHES_MESSAGE};
pub use view_state::{SortColumn, SortIndicator, SortOrder, ViewEvent, ViewState};
