//! Docentes Directory
//!
//! Browser host for the live teacher directory, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It polls the directory endpoint over HTTP and renders the
//! shared `docentes` view tree as DOM plus a canvas bar chart.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
