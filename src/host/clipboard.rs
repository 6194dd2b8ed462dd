use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use tracing::debug;

use super::Clipboard;
use crate::error::HostError;

/// Writes to the system clipboard by piping text into a helper program.
pub(crate) struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// `command` overrides program discovery, e.g. `"xclip -selection clipboard"`.
    pub(crate) fn new(command: Option<&str>) -> Self {
        let command = command
            .map(|c| c.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());
        Self { command }
    }

    fn candidates() -> Vec<Vec<&'static str>> {
        if cfg!(target_os = "macos") {
            vec![vec!["pbcopy"]]
        } else if cfg!(windows) {
            vec![vec!["clip"]]
        } else {
            let mut list = Vec::new();
            if std::env::var_os("WAYLAND_DISPLAY").is_some() {
                list.push(vec!["wl-copy"]);
            }
            list.push(vec!["xclip", "-selection", "clipboard"]);
            list.push(vec!["xsel", "--clipboard", "--input"]);
            list
        }
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), HostError> {
        if let Some(parts) = &self.command {
            let (program, args) = parts.split_first().ok_or_else(|| {
                HostError::ClipboardUnavailable("empty clipboard command".to_string())
            })?;
            return pipe_to(program, args, text);
        }

        let candidates = Self::candidates();
        for parts in &candidates {
            let (program, args) = (parts[0], &parts[1..]);
            match pipe_to(program, args, text) {
                Err(HostError::ClipboardNotFound(_)) => {
                    debug!(program, "clipboard program not installed");
                }
                other => return other,
            }
        }

        let tried: Vec<&str> = candidates.iter().map(|p| p[0]).collect();
        Err(HostError::ClipboardUnavailable(tried.join(", ")))
    }
}

/// Feed `text` to `program` and wait for it to exit.
///
/// `wl-copy` and `xclip` fork a child that keeps serving the selection and
/// inherits the helper's stdio. No output is piped, so only the helper's own
/// exit status is awaited.
fn pipe_to<S: AsRef<str>>(program: &str, args: &[S], text: &str) -> Result<(), HostError> {
    let command_err = |message: String| HostError::ClipboardCommand {
        program: program.to_string(),
        message,
    };

    let mut child = Command::new(program)
        .args(args.iter().map(AsRef::as_ref))
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                HostError::ClipboardNotFound(program.to_string())
            } else {
                command_err(e.to_string())
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| command_err(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| command_err(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(command_err(status.to_string()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn configured_command_receives_text() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("clip.txt");
        let clipboard = SystemClipboard::new(Some(&format!("tee {}", out.display())));

        clipboard.write_text("2023-05-06").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "2023-05-06");
    }

    #[test]
    fn missing_program_is_not_found() {
        let clipboard = SystemClipboard::new(Some("copymeta-no-such-clipboard-tool"));
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, HostError::ClipboardNotFound(_)));
    }

    #[test]
    fn failing_program_reports_status() {
        let clipboard = SystemClipboard::new(Some("false"));
        let err = clipboard.write_text("x").unwrap_err();
        assert!(matches!(err, HostError::ClipboardCommand { .. }));
    }

    #[test]
    fn returns_when_helper_exits_despite_background_child() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("daemonizing-copy.sh");
        std::fs::write(&script, "cat >/dev/null\n(sleep 5) &\nexit 0\n").unwrap();
        let clipboard = SystemClipboard::new(Some(&format!("sh {}", script.display())));

        let started = Instant::now();
        clipboard.write_text("2023-05-06").unwrap();
        assert!(started.elapsed() < Duration::from_secs(3), "{:?}", started.elapsed());
    }

    #[test]
    fn blank_command_falls_back_to_discovery() {
        let clipboard = SystemClipboard::new(Some("   "));
        assert!(clipboard.command.is_none());
    }
}
