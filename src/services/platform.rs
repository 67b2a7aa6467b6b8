//! OS keyboard-state probes.
//!
//! Two queries, both infallible by contract: the active input language
//! of the foreground window (defaulting to English on any failure) and
//! the Caps Lock toggle state (defaulting to off). On Windows these go
//! through Win32; other platforms get the defaults.

use std::sync::Arc;

use crate::models::Language;

/// Read access to the OS keyboard state.
///
/// Implementations must never fail: they fold errors into the default
/// values instead of surfacing them.
pub trait SystemProbe: Send + Sync {
    /// The input language of the foreground window. English when the
    /// query fails or the language is anything but Russian.
    fn active_language(&self) -> Language;

    /// Whether Caps Lock is toggled on. Off when the query fails.
    fn caps_lock_on(&self) -> bool;
}

/// The probe for the current platform.
pub fn system_probe() -> Arc<dyn SystemProbe> {
    #[cfg(windows)]
    {
        Arc::new(WinApiProbe)
    }
    #[cfg(not(windows))]
    {
        Arc::new(StubProbe)
    }
}

/// Win32-backed probe.
#[cfg(windows)]
pub struct WinApiProbe;

#[cfg(windows)]
impl SystemProbe for WinApiProbe {
    fn active_language(&self) -> Language {
        use windows::Win32::UI::Input::KeyboardAndMouse::GetKeyboardLayout;
        use windows::Win32::UI::WindowsAndMessaging::{
            GetForegroundWindow, GetWindowThreadProcessId,
        };

        // LANGID is the low word of the HKL; 0x0419 is ru-RU.
        const LANGID_RUSSIAN: usize = 0x0419;

        let langid = unsafe {
            let hwnd = GetForegroundWindow();
            let thread_id = GetWindowThreadProcessId(hwnd, None);
            GetKeyboardLayout(thread_id).0 as usize & 0xFFFF
        };
        if langid == LANGID_RUSSIAN {
            Language::Russian
        } else {
            Language::English
        }
    }

    fn caps_lock_on(&self) -> bool {
        use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, VK_CAPITAL};

        // The low-order bit of GetKeyState reflects the toggle state.
        let state = unsafe { GetKeyState(i32::from(VK_CAPITAL.0)) };
        state & 1 == 1
    }
}

/// Probe for platforms without a layout query; always reports the
/// defaults (English, Caps Lock off).
#[cfg(not(windows))]
pub struct StubProbe;

#[cfg(not(windows))]
impl SystemProbe for StubProbe {
    fn active_language(&self) -> Language {
        Language::English
    }

    fn caps_lock_on(&self) -> bool {
        false
    }
}
