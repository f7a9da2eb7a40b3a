pub mod app;
mod deserializers;
pub mod error;
mod extract;
mod pagination;
pub mod routes;
