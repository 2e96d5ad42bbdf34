pub mod bus_routes;
pub mod client_type_routes;
pub mod stats_routes;
pub mod transaction_routes;
