use crate::toolchain::{CommandOutput, CommandRunner, ExecutableResolver, OutputMode};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Resolver backed by a fixed name -> path table.
#[derive(Default)]
pub(crate) struct FakeResolver {
    paths: HashMap<String, PathBuf>,
}

impl FakeResolver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, name: &str, path: &str) -> Self {
        self.paths.insert(name.to_string(), PathBuf::from(path));
        self
    }
}

impl ExecutableResolver for FakeResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.paths.get(name).cloned()
    }
}

/// Runner that replays canned outputs and records every invocation.
///
/// Programs without a canned output fail to spawn with `NotFound`. Outside
/// [`OutputMode::Capture`] only the exit code is returned, as with a real
/// child that wrote to the terminal.
#[derive(Default)]
pub(crate) struct FakeRunner {
    outputs: HashMap<PathBuf, CommandOutput>,
    calls: RefCell<Vec<Vec<String>>>,
    modes: RefCell<Vec<OutputMode>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, program: &str, code: i32, stdout: &str) -> Self {
        self.with_output(program, code, stdout, "")
    }

    pub(crate) fn respond_err(self, program: &str, code: i32, stderr: &str) -> Self {
        self.with_output(program, code, "", stderr)
    }

    fn with_output(mut self, program: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.outputs.insert(
            PathBuf::from(program),
            CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Every invocation so far as `[program, args...]`.
    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// The output mode of every invocation so far.
    pub(crate) fn modes(&self) -> Vec<OutputMode> {
        self.modes.borrow().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &Path, args: &[String], mode: OutputMode) -> io::Result<CommandOutput> {
        let mut call = vec![program.to_string_lossy().into_owned()];
        call.extend(args.iter().cloned());
        self.calls.borrow_mut().push(call);
        self.modes.borrow_mut().push(mode);

        let output = self.outputs.get(program).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", program.display()),
            )
        })?;

        Ok(match mode {
            OutputMode::Capture => output,
            OutputMode::Inherit | OutputMode::InheritToStderr => CommandOutput {
                code: output.code,
                stdout: String::new(),
                stderr: String::new(),
            },
        })
    }
}
