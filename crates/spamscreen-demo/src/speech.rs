//! Spoken announcements via the platform text-to-speech command

use spamscreen_session::Announcer;
use tokio::process::Command;

#[cfg(target_os = "macos")]
const TTS_COMMAND: &str = "say";
#[cfg(not(target_os = "macos"))]
const TTS_COMMAND: &str = "espeak";

/// Announcer that speaks phrases through the system TTS command.
///
/// Each announcement runs on a detached task; failures are logged and
/// otherwise ignored so audio problems never affect classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpeechAnnouncer;

impl SpeechAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl Announcer for SpeechAnnouncer {
    fn announce(&self, text: &str) {
        let text = text.to_string();
        tokio::spawn(async move {
            match Command::new(TTS_COMMAND).arg(&text).status().await {
                Ok(status) if !status.success() => {
                    tracing::warn!(command = TTS_COMMAND, %status, "speech command failed");
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(command = TTS_COMMAND, error = %e, "could not run speech command");
                }
            }
        });
    }
}
