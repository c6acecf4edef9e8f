pub mod compare;
pub mod config;
pub mod demo;
pub mod dispatch;
pub mod render;
pub mod solve;
