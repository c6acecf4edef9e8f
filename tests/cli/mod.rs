pub mod support;

mod compare;
mod config;
mod demo;
mod logging;
mod solve;
