pub mod field;
pub mod record_set;
