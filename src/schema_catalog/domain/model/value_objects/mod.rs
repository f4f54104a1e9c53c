pub mod column_descriptor;
pub mod table_name;
