//! A running build-tool process.

use std::collections::VecDeque;
use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tracing::{debug, info};

use super::types::{BuildError, BuildInvocation, BuildStep, BuildSummary};
use crate::sink::OutputSink;

/// How many trailing output lines a failed run keeps for its error.
const TAIL_LINES: usize = 20;

/// One build-tool process and its output stream.
///
/// Created by [`BuildSession::launch`], drained by [`BuildSession::stream`], finished by
/// [`BuildSession::wait`]. Dropping a session before `wait` kills the process.
pub struct BuildSession {
  step: BuildStep,
  child: Child,
  stdout: Option<BufReader<ChildStdout>>,
  started: Instant,
  lines: usize,
  tail: VecDeque<String>,
}

impl BuildSession {
  /// Start the process described by `invocation` with its stdout piped back to us.
  ///
  /// Must be called from within a tokio runtime.
  pub fn launch(invocation: &BuildInvocation) -> Result<Self, BuildError> {
    let mut command = Command::new(&invocation.program);
    command
      .args(&invocation.args)
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::inherit())
      .kill_on_drop(true);

    if let Some(dir) = &invocation.working_dir {
      command.current_dir(dir);
    }

    debug!(
      step = %invocation.step,
      program = %invocation.program.display(),
      args = ?invocation.args,
      "spawning build tool"
    );

    let mut child = command.spawn().map_err(|source| BuildError::LaunchFailed {
      step: invocation.step,
      program: invocation.program.clone(),
      source,
    })?;

    let stdout = child.stdout.take().map(BufReader::new);

    Ok(Self {
      step: invocation.step,
      child,
      stdout,
      started: Instant::now(),
      lines: 0,
      tail: VecDeque::with_capacity(TAIL_LINES),
    })
  }

  /// Forward every stdout line to `sink` as soon as it is read.
  ///
  /// Returns once the process closes its stdout. Lines are decoded lossily and stripped of their
  /// `\n` / `\r\n` terminator. Returns the number of lines forwarded so far.
  pub async fn stream(&mut self, sink: &dyn OutputSink) -> Result<usize, BuildError> {
    let Some(mut reader) = self.stdout.take() else {
      return Ok(self.lines);
    };

    let mut buf = Vec::new();
    loop {
      buf.clear();
      let read = reader
        .read_until(b'\n', &mut buf)
        .await
        .map_err(|source| BuildError::Stream { step: self.step, source })?;
      if read == 0 {
        break;
      }

      let line = decode_line(&buf);
      sink.line(&line);
      self.remember(line);
    }

    Ok(self.lines)
  }

  /// Wait for the process to exit and turn its status into the session outcome.
  pub async fn wait(mut self) -> Result<BuildSummary, BuildError> {
    let status = self
      .child
      .wait()
      .await
      .map_err(|source| BuildError::Wait { step: self.step, source })?;
    let elapsed = self.started.elapsed();

    if !status.success() {
      info!(step = %self.step, code = ?status.code(), "build tool failed");
      return Err(BuildError::CompileFailed {
        step: self.step,
        code: status.code(),
        tail: self.tail.into(),
      });
    }

    info!(step = %self.step, lines = self.lines, elapsed_ms = elapsed.as_millis() as u64, "build tool finished");
    Ok(BuildSummary {
      step: self.step,
      lines: self.lines,
      elapsed,
    })
  }

  fn remember(&mut self, line: String) {
    self.lines += 1;
    if self.tail.len() == TAIL_LINES {
      self.tail.pop_front();
    }
    self.tail.push_back(line);
  }
}

fn decode_line(raw: &[u8]) -> String {
  let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
  let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
  String::from_utf8_lossy(raw).into_owned()
}

impl BuildInvocation {
  /// Launch, stream output to `sink`, and wait for the result.
  pub async fn run(&self, sink: &dyn OutputSink) -> Result<BuildSummary, BuildError> {
    let mut session = BuildSession::launch(self)?;
    session.stream(sink).await?;
    session.wait().await
  }
}
