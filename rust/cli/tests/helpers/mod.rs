//! Shared helpers for driving the CLI in-process.

use std::io::Cursor;

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI with `args` (program name excluded) and `input` as stdin.
#[allow(dead_code)]
pub fn run_cli(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["cardroom"];
    argv.extend_from_slice(args);
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit_code = cardroom_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Sum of the chip counts on the final `Stacks:` line.
#[allow(dead_code)]
pub fn total_chips(stdout: &str) -> u32 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Stacks:"))
        .expect("stacks line");
    line.split_whitespace()
        .skip(1)
        .map(|kv| {
            kv.split_once('=')
                .and_then(|(_, v)| v.parse::<u32>().ok())
                .expect("name=chips")
        })
        .sum()
}

/// Sets environment variables for the lifetime of the guard and restores
/// the previous values on drop. Callers must hold `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for (key, value) in pairs {
            let previous = std::env::var(key).ok();
            // SAFETY: tests touching the environment run under #[serial]
            unsafe { std::env::set_var(key, value) };
            restores.push((key.to_string(), previous));
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            // SAFETY: see `apply`
            unsafe {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
