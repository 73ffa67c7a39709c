pub mod audit;
pub mod beeminder;
pub mod http;
