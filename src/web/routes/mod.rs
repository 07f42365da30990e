pub mod entry_routes;
