pub mod disk;
pub mod error;
pub mod input;
pub mod paging;
pub mod report;
