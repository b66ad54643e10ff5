//! Helpers for running child processes and capturing their output.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, warn};

/// Captured child process output.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Run a command to completion and capture stdout/stderr without risking pipe deadlocks.
///
/// Both pipes are drained concurrently while the child runs. With `echo` set, each stdout
/// line is also written to this process's stdout as it arrives. There is no timeout: the
/// call blocks until the child exits.
pub fn run_command(mut cmd: Command, echo: bool) -> Result<CommandOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(program = ?cmd.get_program(), echo, "spawning child process");
    let mut child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return Err(e).with_context(|| format!("spawn {:?}", cmd.get_program()));
        }
    };

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("stdout was not piped"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow!("stderr was not piped"))?;

    let stdout_handle = thread::spawn(move || read_stream_with_tee(stdout, echo));
    let stderr_handle = thread::spawn(move || read_stream(stderr));

    let status = child.wait().context("wait for command")?;

    let stdout = join_output(stdout_handle).context("join stdout")?;
    let stderr = join_output(stderr_handle).context("join stderr")?;

    debug!(exit_code = ?status.code(), "command finished");
    Ok(CommandOutput {
        status,
        stdout,
        stderr,
    })
}

fn join_output(handle: thread::JoinHandle<Result<Vec<u8>>>) -> Result<Vec<u8>> {
    match handle.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("output reader thread panicked")),
    }
}

/// Read a stream line by line, optionally tee-ing each line to stdout.
fn read_stream_with_tee<R: Read>(reader: R, echo: bool) -> Result<Vec<u8>> {
    let mut buf_reader = BufReader::new(reader);
    let mut collected = Vec::new();

    loop {
        let start = collected.len();
        let n = buf_reader
            .read_until(b'\n', &mut collected)
            .context("read line")?;
        if n == 0 {
            break;
        }

        if echo {
            let mut console = io::stdout().lock();
            if let Err(e) = console
                .write_all(&collected[start..])
                .and_then(|()| console.flush())
            {
                warn!(err = %e, "failed to echo command output");
            }
        }
    }

    Ok(collected)
}

fn read_stream<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).context("read output")?;
    Ok(buf)
}
