//! Binary entry point for `prefix-rename`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = prefix_rename::run() {
        eprintln!("Error [{}]: {}", e.kind(), e);
        process::exit(1);
    }
}
