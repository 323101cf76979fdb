use std::io::Write;

use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
/// Diagnostics go to stderr; stdout is reserved for echoed paths, the
/// updating progress line and the final summary, so scripts can consume it.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Used for echoed source paths
/// which users may pipe into other tools.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Render the single updating progress line ("\r" returns to column 0; the
/// next render overwrites it). Flushed because there is no newline.
pub fn print_progress_line(attempted: usize, target: usize) {
    if target == 0 {
        return;
    }
    let pct = (attempted as f64 / target as f64) * 100.0;
    print!("\rcopied {:3.0}%", pct);
    let _ = std::io::stdout().flush();
}

/// Final summary; "\r" overwrites a leftover progress line.
pub fn print_summary(copied: usize) {
    println!("\rCopied {} files.", copied);
}
