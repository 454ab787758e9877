pub mod observability;
pub mod storage;
