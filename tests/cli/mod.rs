pub mod support;

mod config;
mod distance;
mod logging;
mod misc;
mod routes;
mod session;
mod shortest;
mod trips;
