//! ANSI color helpers shared by the server's request log and the probe's
//! terminal output.

pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const BLUE: &str = "\x1b[94m";
pub const CYAN: &str = "\x1b[96m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

pub fn paint(text: &str, color: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// Emit one status-colored line per handled request, e.g.
/// `[200] GET /page/1/ ?s=test page=1`. Green below 300, yellow below
/// 400, red otherwise.
pub fn log_request(status: u16, method: &str, path: &str, note: &str) {
    let color = if status < 300 {
        GREEN
    } else if status < 400 {
        YELLOW
    } else {
        RED
    };
    log::info!("{color}[{status}]{RESET} {method} {path} {note}");
}
