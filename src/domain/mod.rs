pub mod page;

pub use page::{PageLookup, EMPTY_PAGE};
