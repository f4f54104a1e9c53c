pub mod table_listing_resource;
