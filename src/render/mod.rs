mod layout;
mod players;

pub use layout::document;
pub use players::{PlayerRows, RowElement};
