use std::process::Stdio;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail};
use tokio::process::Command;
use tokio::runtime::{Builder, Handle};

/// Runs a helper program and returns its stdout.
///
/// Blocking: call it from a sampling thread, never from an async task.
pub fn run(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    let task = run_async(program, args, timeout);
    match Handle::try_current() {
        Ok(handle) => handle.block_on(task),
        Err(_) => Builder::new_current_thread()
            .enable_all()
            .build()
            .wrap_err("failed to start helper runtime")?
            .block_on(task),
    }
}

pub async fn run_async(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .wrap_err_with(|| format!("failed to spawn {program}"))?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => output.wrap_err_with(|| format!("failed to read {program} output"))?,
        Err(_) => bail!("{program} timed out after {timeout:?}"),
    };

    if !output.status.success() {
        bail!("{program} exited with {}", output.status);
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
