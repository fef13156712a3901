//! External generator and server boundary
//!
//! Thin wrappers around the `hexo` binary. Invocations are
//! fire-and-forget: exit codes are not inspected, only spawn-level
//! failures are reported.

use crate::errors::PostError;
use crate::theme;
use std::net::{SocketAddr, TcpStream};
use std::process::Command;
use std::time::Duration;

/// Generator binary name
pub const HEXO_BIN: &str = "hexo";

/// Port the local preview server listens on
pub const SERVER_PORT: u16 = 4000;

/// Run one generator command with inherited stdio.
pub fn run(args: &[&str]) {
    println!("\n{} {} {}", theme::info("Executing:"), HEXO_BIN, args.join(" "));
    if let Err(e) = Command::new(HEXO_BIN).args(args).status() {
        eprintln!("{} {}", theme::error("Error:"), e);
    }
}

/// Regenerate the site from scratch (`hexo clean && hexo g`).
pub fn refresh() {
    run(&["clean"]);
    run(&["g"]);
}

/// Deploy the generated site (`hexo d`).
pub fn deploy() {
    run(&["d"]);
}

/// Probe whether something already listens on `port` locally.
pub fn port_in_use(port: u16) -> bool {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpStream::connect_timeout(&addr, Duration::from_secs(1)).is_ok()
}

/// Start the preview server; blocks until the server process exits.
pub fn start_server() -> Result<(), PostError> {
    if port_in_use(SERVER_PORT) {
        return Err(PostError::PortInUse(SERVER_PORT));
    }
    run(&["s"]);
    Ok(())
}

/// Open the local preview URL in the default browser.
pub fn open_preview() {
    let url = format!("http://localhost:{}", SERVER_PORT);
    println!("\n{} {}", theme::info("Opening:"), url);

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", &url]).status();
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(&url).status();
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let result = Command::new("xdg-open").arg(&url).status();

    if let Err(e) = result {
        eprintln!("{} {}", theme::error("Error:"), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_port_in_use_detects_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        assert!(port_in_use(port));

        drop(listener);
        assert!(!port_in_use(port));
    }
}
