use crate::error::{PrdError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(PrdError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    // Try xclip first, then xsel
    match pipe_to("xclip", &["-selection", "clipboard"], text) {
        Ok(()) => Ok(()),
        Err(_) => pipe_to("xsel", &["--clipboard", "--input"], text).map_err(|e| {
            PrdError::Api(format!("{}. Install xclip or xsel.", e))
        }),
    }
}

fn pipe_to(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| PrdError::Api(format!("Failed to spawn {}: {}", cmd, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PrdError::Api(format!("Failed to write to {}: {}", cmd, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PrdError::Api(format!("Failed to wait for {}: {}", cmd, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PrdError::Api(format!("{} exited with error", cmd)))
    }
}
