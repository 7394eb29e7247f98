pub mod api;
pub mod azure;
pub mod factory;
pub mod index;
pub mod rest;
