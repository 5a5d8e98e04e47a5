//! Interactive front-end: reads `add <int>` / `remove <int>` lines from stdin
//! and prints the result and the tree after each command.
//!
//! Logging is configured through `RUST_LOG`.

use owned_avl::command::{HELP, Shell};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", HELP)?;

    let mut shell = Shell::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match shell.run_line(&line) {
            Ok(outcome) => {
                writeln!(out, "Command Result: {}", outcome)?;
                writeln!(out, "{}", shell.render())?;
            }
            Err(e) => eprintln!("ignored `{}`: {}", line.trim(), e),
        }
        out.flush()?;
    }
    Ok(())
}
