//! Campus navigator server.
//!
//! Helps students at the University of Ghana, Legon find shuttle and
//! trotro routes: search the catalog by route, stop or place, then open a
//! route to see its stops, fare and running times.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod domain;
pub mod help;
pub mod search;
pub mod session;
pub mod theme;
pub mod web;
