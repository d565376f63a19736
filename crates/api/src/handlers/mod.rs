pub mod internal;
pub mod records;
