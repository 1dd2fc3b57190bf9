mod config;
mod cursor;
mod page;
mod urls;

pub use config::PaginationConfig;
pub use cursor::{PageCursor, PageRequest};
pub use page::Page;
pub use urls::{append_param, build_paginated_url};
