#![allow(warnings)]
//! Phonebook Frontend Entry Point

mod models;
mod validation;
mod error;
mod config;
mod cache;
mod repository;
mod view_model;
mod routes;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init(log::LevelFilter::Debug, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
