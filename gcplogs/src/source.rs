//! Ambient sources the project resolver reads from.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Environment variables and files.
pub trait Environment: std::fmt::Debug + Send + Sync {
    /// Returns the value of the environment variable `name`, if it is set
    /// and valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Reads the whole file at `path`.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// [`Environment`] backed by the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Runs external programs.
pub trait CommandRunner: std::fmt::Debug + Send + Sync {
    /// Runs `program` with `args` and returns its standard output.
    ///
    /// A program that cannot be found or exits unsuccessfully is an error.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// [`CommandRunner`] that spawns child processes.
///
/// The program is looked up on the `PATH` of the current process and the
/// call blocks until the child exits.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let path = env::var_os("PATH")
            .and_then(|paths| find_executable(program, &paths))
            .ok_or_else(|| Error::CommandNotFound(program.to_string()))?;
        let output = Command::new(&path).args(args).output()?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Finds `program` in the directories listed by `paths`.
pub(crate) fn find_executable(program: &str, paths: &OsStr) -> Option<PathBuf> {
    env::split_paths(paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

// gcloud ships as gcloud.cmd on Windows
#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    ["", ".exe", ".cmd", ".bat"]
        .iter()
        .map(|ext| dir.join(format!("{program}{ext}")))
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
