// ABOUTME: Library crate for Caprae exposing the app, pages and components for the binary and tests

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod filter;
pub mod models;
pub mod notify;
pub mod pages;
pub mod router;
pub mod wizard;
