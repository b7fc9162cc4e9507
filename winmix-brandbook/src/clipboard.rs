//! Clipboard access for copying swatch values and font sizes

use std::io::{self, Write};

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::ClipboardError;

/// Where copied text goes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// System clipboard, falling back to OSC 52 when it is unavailable
    #[default]
    System,
    /// Terminal clipboard escape sequence only (works over SSH)
    Osc52,
}

pub fn copy(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => match copy_system(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(error = %e, "system clipboard failed, using OSC 52");
                copy_osc52(text)
            }
        },
        ClipboardBackend::Osc52 => copy_osc52(text),
    }
}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text))?;
    Ok(())
}

fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}
