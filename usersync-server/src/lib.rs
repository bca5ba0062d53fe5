// Library exports for usersync-server
// Integration tests drive the router and services through these modules

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod projection;
pub mod remote;
pub mod service;
pub mod state;
pub mod sync;
