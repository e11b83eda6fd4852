pub mod pagination;
pub mod params;

pub use pagination::{read_pagination_params, Paginated, PaginationParams};
pub use params::{SortDir, TranslationFilter};
