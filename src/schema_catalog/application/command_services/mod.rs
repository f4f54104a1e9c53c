pub mod table_catalog_command_service_impl;
