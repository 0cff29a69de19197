#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod clipboard;
mod config;
mod logging;
mod modal;
mod particles;
mod pointer;
mod projects;
mod reveal;
mod ripple;
mod scheduler;
mod scroll;
mod styles;
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("The portfolio effects run in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
