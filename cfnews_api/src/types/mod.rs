mod page;
pub use self::page::{shape, PageResult};
