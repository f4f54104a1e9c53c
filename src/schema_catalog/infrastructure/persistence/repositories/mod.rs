pub mod metadata_source;
pub mod postgres;
pub mod table_administration_repository;
