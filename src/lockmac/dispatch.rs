//! Argument classification and the lock decision.
//!
//! The dispatcher is pure: it scans the argument vector once, in order, and
//! returns a [`DispatchResult`] saying whether the lock action should run,
//! plus the exit code and the messages the CLI layer should render. It never
//! touches stdout/stderr itself.
//!
//! Two rules drive everything:
//!
//! - The presence of *any* argument, recognized or not, suppresses the lock
//!   action. Arguments mean "answer the flag, don't lock".
//! - The scan never stops early: every token is classified. Recognized flags
//!   emit their text once per occurrence; each unrecognized token gets its
//!   own two-line error block. Only the zero/nonzero distinction of the exit
//!   code is contractual.

use crate::error::Result;
use crate::session::SessionLock;

/// Program version reported by `-v` / `--version`.
pub const VERSION: u32 = 1;

const HELP_TEXT: &str = concat!(
    "Lock the current desktop session\n",
    "Options: \n",
    " --help    -h   Show help text.\n",
    " --version -v   Show program version.",
);

/// Where a message belongs: Info renders to stdout, Error to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of one argument scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// True exactly when zero arguments were supplied.
    pub should_lock: bool,

    /// 0 on success; 1 once any unrecognized token has been seen.
    pub exit_code: i32,

    /// Ordered output for the CLI layer to render.
    pub messages: Vec<CmdMessage>,
}

impl DispatchResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Classify the argument vector, in order.
///
/// `program` is argv[0] as invoked; it appears only in the usage hint of the
/// unrecognized-argument error block. Matching is exact and case-sensitive:
/// `-h`, `--help`, `-v` and `--version` are the whole recognized grammar.
pub fn scan<A: AsRef<str>>(program: &str, args: &[A]) -> DispatchResult {
    let mut result = DispatchResult {
        should_lock: args.is_empty(),
        ..DispatchResult::default()
    };

    for arg in args {
        match arg.as_ref() {
            "-h" | "--help" => result.add_message(CmdMessage::info(HELP_TEXT)),
            "-v" | "--version" => {
                result.add_message(CmdMessage::info(format!("Version {}", VERSION)))
            }
            unknown => {
                result.add_message(CmdMessage::error(format!(
                    "Unknown option argument: {}",
                    unknown
                )));
                result.add_message(CmdMessage::error(format!(
                    "Get help by typing \"{} -h\"",
                    program
                )));
                result.exit_code = 1;
            }
        }
    }

    result
}

/// Scan the arguments and, when nothing suppressed it, perform the lock
/// action exactly once.
///
/// The lock runs only after the whole scan completes and only when zero
/// arguments were supplied. The capability call is the only fallible part.
pub fn run<L: SessionLock, A: AsRef<str>>(
    lock: &L,
    program: &str,
    args: &[A],
) -> Result<DispatchResult> {
    let result = scan(program, args);
    if result.should_lock {
        lock.lock_now()?;
    }
    Ok(result)
}
