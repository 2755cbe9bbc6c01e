//! System tray (notification area) icon for Windows.
//!
//! The popup menu is rebuilt from [`MenuEntry`] snapshots every time it is
//! shown, so labels and check marks always match the dispatcher's state.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
    NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadImageW, SetForegroundWindow,
    TrackPopupMenu, HICON, HMENU, IMAGE_ICON, LR_DEFAULTSIZE, LR_SHARED, MENU_ITEM_FLAGS,
    MF_CHECKED, MF_POPUP, MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN,
    TPM_RIGHTBUTTON, WM_USER,
};

use crate::events::AppEvent;
use crate::menu::MenuEntry;
use crate::model::Mirror;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Menu item IDs
pub const MENU_TOGGLE: u32 = 1001;
pub const MENU_UPDATE: u32 = 1002;
pub const MENU_QUIT: u32 = 1003;
/// Mirror items use `MENU_MIRROR_BASE + Mirror::index()`.
pub const MENU_MIRROR_BASE: u32 = 1100;

const TRAY_ICON_ID: u32 = 1;

/// Map a `WM_COMMAND` id back to the event it stands for.
pub fn command_event(id: u32) -> Option<AppEvent> {
    match id {
        MENU_TOGGLE => Some(AppEvent::ToggleMonitoring),
        MENU_UPDATE => Some(AppEvent::CheckForUpdates),
        MENU_QUIT => Some(AppEvent::Quit),
        id if id >= MENU_MIRROR_BASE => {
            Mirror::from_index((id - MENU_MIRROR_BASE) as usize).map(AppEvent::SelectMirror)
        }
        _ => None,
    }
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

fn fill_tip(tip: &mut [u16; 128], text: &str) {
    for (slot, c) in tip.iter_mut().zip(text.encode_utf16().take(127)) {
        *slot = c;
    }
}

fn notify_data(hwnd: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: hwnd,
        uID: TRAY_ICON_ID,
        ..Default::default()
    }
}

/// Add the tray icon. The icon is resource ID 1 from the embedded `.rc`.
pub fn install_tray_icon(hwnd: HWND, tooltip: &str) -> windows::core::Result<()> {
    unsafe {
        let hinstance = GetModuleHandleW(None)?;
        let hicon = match LoadImageW(
            Some(hinstance.into()),
            PCWSTR(1 as *const u16),
            IMAGE_ICON,
            16,
            16,
            LR_DEFAULTSIZE | LR_SHARED,
        ) {
            Ok(handle) => HICON(handle.0),
            Err(_) => HICON::default(),
        };

        let mut nid = NOTIFYICONDATAW {
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..notify_data(hwnd)
        };
        fill_tip(&mut nid.szTip, tooltip);

        Shell_NotifyIconW(NIM_ADD, &nid).ok()
    }
}

/// Remove the tray icon.
pub fn remove_tray_icon(hwnd: HWND) {
    unsafe {
        let _ = Shell_NotifyIconW(NIM_DELETE, &notify_data(hwnd));
    }
}

/// Replace the tooltip text.
pub fn update_tray_tooltip(hwnd: HWND, tooltip: &str) {
    let mut nid = NOTIFYICONDATAW {
        uFlags: NIF_TIP,
        ..notify_data(hwnd)
    };
    fill_tip(&mut nid.szTip, tooltip);
    unsafe {
        let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
    }
}

unsafe fn append(menu: HMENU, flags: MENU_ITEM_FLAGS, id: usize, label: &str) {
    let label = wide(label);
    let _ = AppendMenuW(menu, flags, id, PCWSTR(label.as_ptr()));
}

unsafe fn build_menu(entries: &[MenuEntry]) -> windows::core::Result<HMENU> {
    let menu = CreatePopupMenu()?;
    for entry in entries {
        match entry {
            MenuEntry::Toggle { label } => append(menu, MF_STRING, MENU_TOGGLE as usize, label),
            MenuEntry::Mirrors { title, options } => {
                let submenu = CreatePopupMenu()?;
                for option in options {
                    let flags = if option.checked {
                        MF_STRING | MF_CHECKED
                    } else {
                        MF_STRING
                    };
                    let id = MENU_MIRROR_BASE as usize + option.mirror.index();
                    append(submenu, flags, id, option.label());
                }
                // The parent menu owns the submenu from here on
                append(menu, MF_STRING | MF_POPUP, submenu.0 as usize, title);
            }
            MenuEntry::Separator => {
                let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
            }
            MenuEntry::CheckForUpdates { label } => {
                append(menu, MF_STRING, MENU_UPDATE as usize, label)
            }
            MenuEntry::Quit { label } => append(menu, MF_STRING, MENU_QUIT as usize, label),
        }
    }
    Ok(menu)
}

/// Show the context menu at the cursor. The click arrives as `WM_COMMAND`.
pub fn show_tray_menu(hwnd: HWND, entries: &[MenuEntry]) {
    unsafe {
        let menu = match build_menu(entries) {
            Ok(menu) => menu,
            Err(e) => {
                tracing::warn!("Failed to build tray menu: {}", e);
                return;
            }
        };

        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);

        // Required for menu to close when clicking outside
        let _ = SetForegroundWindow(hwnd);

        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            None,
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);
    }
}
