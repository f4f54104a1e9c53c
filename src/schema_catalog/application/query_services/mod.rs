pub mod table_catalog_query_service_impl;
