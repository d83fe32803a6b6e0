use crate::error::{Result, SnapeError};
use arboard::Clipboard;

/// Anything that can receive the text of a chosen snippet.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, backed by `arboard`.
///
/// The connection is opened on first use, so a missing display only matters
/// once something is copied. The handle must stay alive until the process is
/// about to exit: on some platforms the clipboard contents are owned by the
/// process that set them.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn connect(&mut self) -> Result<&mut Clipboard> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| SnapeError::Clipboard(e.to_string()))?,
        };
        Ok(self.inner.insert(clipboard))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.connect()?
            .set_text(text.to_owned())
            .map_err(|e| SnapeError::Clipboard(e.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creating_the_system_clipboard_does_not_connect() {
        let clipboard = SystemClipboard::new();
        assert!(clipboard.inner.is_none());
    }
}
