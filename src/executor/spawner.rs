use std::os::fd::RawFd;
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};
use crate::error::ExecError;
use super::argv::Argv;

/// Exit code of a child whose program could not be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code of a child whose program was found but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;
/// Exit code of a child that failed to redirect its standard streams.
pub const EXIT_REDIRECT_FAILED: i32 = 1;

/// Everything a child needs between fork and exec. Built in the parent so
/// the child does not allocate.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRequest<'a> {
    pub argv: &'a Argv,
    /// Becomes fd 0 of the child.
    pub stdin: Option<RawFd>,
    /// Becomes fd 1 of the child.
    pub stdout: Option<RawFd>,
    /// Channel endpoints the child closes after redirecting.
    pub close: &'a [RawFd],
}

impl<'a> SpawnRequest<'a> {
    /// A child that keeps the shell's stdin/stdout.
    pub fn inherit(argv: &'a Argv) -> Self {
        SpawnRequest { argv, stdin: None, stdout: None, close: &[] }
    }
}

pub trait Spawner {
    /// Starts one process and returns without waiting for it.
    fn spawn(&mut self, request: &SpawnRequest<'_>) -> Result<Pid, ExecError>;
    /// Blocks until `pid` terminates and returns its exit code.
    fn wait(&mut self, pid: Pid) -> Result<i32, ExecError>;
}

/// fork + dup2 + execvp, reaped with waitpid.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForkSpawner;

impl Spawner for ForkSpawner {
    fn spawn(&mut self, request: &SpawnRequest<'_>) -> Result<Pid, ExecError> {
        match syscall(|| unsafe { unistd::fork() }).map_err(ExecError::Spawn)? {
            ForkResult::Parent { child } => {
                tracing::debug!(pid = %child, program = ?request.argv.program(), "spawned");
                Ok(child)
            }
            ForkResult::Child => exec_child(request),
        }
    }

    fn wait(&mut self, pid: Pid) -> Result<i32, ExecError> {
        loop {
            match syscall(|| waitpid(pid, None)).map_err(ExecError::Wait)? {
                WaitStatus::Exited(_, code) => {
                    tracing::debug!(%pid, code, "exited");
                    return Ok(code);
                }
                WaitStatus::Signaled(_, signal, _) => {
                    tracing::debug!(%pid, ?signal, "killed by signal");
                    return Ok(128 + signal as i32);
                }
                // Stop/continue notifications are not requested; keep waiting.
                _ => continue,
            }
        }
    }
}

/// Runs in the forked child. No allocation from here on: only dup2, close,
/// signal, execvp, write and _exit.
fn exec_child(request: &SpawnRequest<'_>) -> ! {
    if let Some(fd) = request.stdin {
        if let Err(e) = redirect(fd, libc::STDIN_FILENO) {
            report_child_failure(b"cannot redirect stdin", e);
            exit_child(EXIT_REDIRECT_FAILED);
        }
    }
    if let Some(fd) = request.stdout {
        if let Err(e) = redirect(fd, libc::STDOUT_FILENO) {
            report_child_failure(b"cannot redirect stdout", e);
            exit_child(EXIT_REDIRECT_FAILED);
        }
    }
    for &fd in request.close {
        unsafe {
            libc::close(fd);
        }
    }

    // The runtime ignores SIGPIPE in the shell; programs expect the default.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    // Only returns on failure.
    unsafe {
        libc::execvp(request.argv.program().as_ptr(), request.argv.as_ptr());
    }
    let err = Errno::last();
    report_child_failure(request.argv.program().to_bytes(), err);
    exit_child(if err == Errno::ENOENT { EXIT_NOT_FOUND } else { EXIT_NOT_EXECUTABLE })
}

fn redirect(fd: RawFd, target: RawFd) -> Result<(), Errno> {
    syscall(|| Errno::result(unsafe { libc::dup2(fd, target) })).map(drop)
}

fn report_child_failure(what: &[u8], err: Errno) {
    let reason = if err == Errno::ENOENT { "command not found" } else { err.desc() };
    let parts: [&[u8]; 5] = [b"pipesh: ", what, b": ", reason.as_bytes(), b"\n"];
    for part in parts {
        unsafe {
            libc::write(libc::STDERR_FILENO, part.as_ptr().cast(), part.len());
        }
    }
}

fn exit_child(code: i32) -> ! {
    // _exit: no atexit handlers or stdio flushing of the parent's buffers.
    unsafe { libc::_exit(code) }
}

/// Retries `f` while it fails with EINTR.
pub(crate) fn syscall<F, T>(f: F) -> Result<T, Errno>
where
    F: Fn() -> Result<T, Errno>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => (),
            result => return result,
        }
    }
}
