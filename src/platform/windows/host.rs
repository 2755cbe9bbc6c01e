//! Hidden window that owns the tray icon and pumps the event bus.

use std::cell::RefCell;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{debug, error, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, KillTimer,
    PostQuitMessage, RegisterClassW, SetTimer, TranslateMessage, MSG, WINDOW_EX_STYLE,
    WINDOW_STYLE, WM_COMMAND, WM_DESTROY, WM_LBUTTONUP, WM_RBUTTONUP, WM_TIMER, WNDCLASSW,
};

use super::tray::{self, WM_TRAYICON};
use crate::app::App;
use crate::handlers::Flow;
use crate::model::APP_TITLE;
use crate::update::relaunch;

const TIMER_EVENTS: usize = 1;
const TIMER_INTERVAL_MS: u32 = 50;

thread_local! {
    static HOST: RefCell<Option<App>> = const { RefCell::new(None) };
    static RESTART: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Run the tray host until Quit or an installed update.
pub fn run(app: App) -> anyhow::Result<()> {
    let hwnd = unsafe { create_window()? };

    let tooltip = app.menu().tooltip();
    tray::install_tray_icon(hwnd, tooltip).context("failed to add the tray icon")?;
    if let Err(e) = app.start_background() {
        tray::remove_tray_icon(hwnd);
        return Err(e).context("failed to start background threads");
    }
    HOST.with(|h| *h.borrow_mut() = Some(app));

    unsafe {
        SetTimer(Some(hwnd), TIMER_EVENTS, TIMER_INTERVAL_MS, None);

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        let _ = KillTimer(Some(hwnd), TIMER_EVENTS);
    }
    tray::remove_tray_icon(hwnd);
    HOST.with(|h| h.borrow_mut().take());

    if let Some(exe) = RESTART.with(|r| r.borrow_mut().take()) {
        if let Err(e) = relaunch(&exe) {
            error!("Update installed but restart failed: {}", e);
        }
    }
    info!("Exiting");
    Ok(())
}

unsafe fn create_window() -> anyhow::Result<HWND> {
    let instance = GetModuleHandleW(None)?;
    let class_name = w!("TwitterUrlFixerHost");

    let wc = WNDCLASSW {
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        lpszClassName: class_name,
        ..Default::default()
    };
    if RegisterClassW(&wc) == 0 {
        bail!("failed to register the host window class");
    }

    let title: Vec<u16> = APP_TITLE.encode_utf16().chain(std::iter::once(0)).collect();

    // Never shown; it only receives tray and timer messages
    let hwnd = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class_name,
        PCWSTR(title.as_ptr()),
        WINDOW_STYLE::default(),
        0,
        0,
        0,
        0,
        None,
        None,
        Some(instance.into()),
        None,
    )?;
    Ok(hwnd)
}

fn pump(hwnd: HWND) {
    let flow = HOST.with(|h| {
        let mut host = h.borrow_mut();
        let app = host.as_mut()?;
        let flow = app.pump();
        tray::update_tray_tooltip(hwnd, app.menu().tooltip());
        Some(flow)
    });

    match flow {
        Some(Flow::Continue) | None => {}
        Some(Flow::Exit) => unsafe {
            let _ = DestroyWindow(hwnd);
        },
        Some(Flow::Restart(exe)) => {
            info!("Restarting into {}", exe.display());
            RESTART.with(|r| *r.borrow_mut() = Some(exe));
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_TIMER => {
                if wparam.0 == TIMER_EVENTS {
                    pump(hwnd);
                }
                LRESULT(0)
            }

            msg if msg == WM_TRAYICON => {
                let event = (lparam.0 as u32) & 0xFFFF;
                if event == WM_RBUTTONUP || event == WM_LBUTTONUP {
                    // Snapshot first: TrackPopupMenu runs a nested message loop
                    // that can re-enter this procedure
                    let entries = HOST.with(|h| h.borrow().as_ref().map(|app| app.menu().entries()));
                    if let Some(entries) = entries {
                        tray::show_tray_menu(hwnd, &entries);
                    }
                }
                LRESULT(0)
            }

            WM_COMMAND => {
                let id = (wparam.0 & 0xFFFF) as u32;
                match tray::command_event(id) {
                    Some(event) => {
                        debug!("Menu command {}: {}", id, event.description());
                        HOST.with(|h| {
                            if let Some(app) = h.borrow().as_ref() {
                                app.publisher().publish(event);
                            }
                        });
                        pump(hwnd);
                    }
                    None => debug!("Ignoring unknown menu command {}", id),
                }
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
