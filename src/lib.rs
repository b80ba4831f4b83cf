pub mod action;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod optimistic;
pub mod remote;
pub mod search;
