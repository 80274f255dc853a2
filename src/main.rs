//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local port.

#![cfg_attr(target_arch = "wasm32", allow(unused))]

use std::process::{Command, ExitCode, Stdio};

const PORT: &str = "8000";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("building wasm bundle");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => {
            log::error!("wasm-pack exited with {status}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            log::warn!("wasm-pack not runnable ({err}); serving whatever is in static/pkg");
        }
    }

    log::info!("serving static/ at http://127.0.0.1:{PORT}");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status();

    match server {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            log::error!("http server exited with {status}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("failed to start http server: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
