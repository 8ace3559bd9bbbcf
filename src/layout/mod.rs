//! Layout: capacity measurement and pagination

mod measure;
mod pagination;
pub mod style;

pub use measure::CapacityMeasurer;
pub use pagination::{page_index_for_offset, paginate, Page, Paginator, PaginatorOptions};
pub use style::{Style, UnitMetrics, DEFAULT_FONT_SIZE};
