//! Message boxes.

use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, IDYES, MB_ICONQUESTION, MB_TOPMOST, MB_YESNO,
};

use crate::model::constants::{UPDATE_PROMPT_TEXT, UPDATE_PROMPT_TITLE};
use crate::update::UpdatePrompt;

/// Yes/No box asking whether to install a new version.
///
/// Runs on the update worker thread with no owner window, so the host's
/// message loop keeps running while it is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageBoxPrompt;

impl UpdatePrompt for MessageBoxPrompt {
    fn confirm(&self) -> bool {
        let title: Vec<u16> = UPDATE_PROMPT_TITLE
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        let text: Vec<u16> = UPDATE_PROMPT_TEXT
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();

        let answer = unsafe {
            MessageBoxW(
                None,
                PCWSTR(text.as_ptr()),
                PCWSTR(title.as_ptr()),
                MB_YESNO | MB_ICONQUESTION | MB_TOPMOST,
            )
        };
        answer == IDYES
    }
}
