//! Domain logic - pure release-notes types independent of git operations

pub mod category;
pub mod commit;

pub use category::Category;
pub use commit::{CategoryBucket, ClassifiedItem};
