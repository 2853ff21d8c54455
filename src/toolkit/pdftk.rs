//! `pdftk` command-line toolkit

use super::{PdfToolkit, ToolError};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default pdftk executable, resolved through `PATH`
pub const DEFAULT_PDFTK_BINARY: &str = "pdftk";

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Toolkit shelling out to `pdftk`
#[derive(Debug, Clone)]
pub struct Pdftk {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl Default for Pdftk {
    fn default() -> Self {
        Self::new()
    }
}

impl Pdftk {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_PDFTK_BINARY),
            timeout: None,
        }
    }

    /// Use a specific pdftk executable
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Kill pdftk if a call takes longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the executable can be started
    pub fn check_available(&self) -> Result<(), ToolError> {
        let output = Command::new(&self.binary).arg("--version").output();
        match output {
            Ok(result) if result.status.success() => Ok(()),
            Ok(_) | Err(_) => Err(ToolError::NotFound(self.binary.clone())),
        }
    }

    fn run(&self, command: &mut Command) -> Result<Vec<u8>, ToolError> {
        debug!("Running {:?}", command);
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ToolError::NotFound(self.binary.clone()),
                _ => ToolError::Spawn(e.to_string()),
            })?;

        // Pipes are drained on their own threads while the child is polled.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match self.timeout {
            None => child.wait().map_err(|e| ToolError::Spawn(e.to_string()))?,
            Some(timeout) => wait_with_timeout(&mut child, timeout)?,
        };

        let stdout = stdout.map(join_drain).unwrap_or_default();
        let stderr = stderr.map(join_drain).unwrap_or_default();

        if !status.success() {
            return Err(ToolError::Failed {
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }
        Ok(stdout)
    }
}

impl PdfToolkit for Pdftk {
    fn dump_fields(&self, template: &Path) -> Result<String, ToolError> {
        let stdout = self.run(
            Command::new(&self.binary)
                .arg(template)
                .arg("dump_data_fields_utf8"),
        )?;
        String::from_utf8(stdout).map_err(|e| ToolError::InvalidOutput(e.to_string()))
    }

    fn fill_form(&self, template: &Path, data: &Path, output: &Path) -> Result<(), ToolError> {
        self.run(
            Command::new(&self.binary)
                .arg(template)
                .arg("fill_form")
                .arg(data)
                .arg("output")
                .arg(output),
        )?;
        Ok(())
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> std::thread::JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn join_drain(handle: std::thread::JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}

fn wait_with_timeout(
    child: &mut std::process::Child,
    timeout: Duration,
) -> Result<ExitStatus, ToolError> {
    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if start.elapsed() > timeout {
                    warn!("pdftk timed out after {:?}, killing", timeout);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ToolError::TimedOut(timeout));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(ToolError::Spawn(e.to_string())),
        }
    }
}
