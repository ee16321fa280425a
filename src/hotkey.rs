//! Global hotkey that toggles the HUD from any application

use anyhow::{anyhow, Result};
use global_hotkey::{
    hotkey::{Code, HotKey, Modifiers},
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
};
use tracing::{debug, info};

const LETTERS: [Code; 26] = [
    Code::KeyA, Code::KeyB, Code::KeyC, Code::KeyD, Code::KeyE, Code::KeyF, Code::KeyG,
    Code::KeyH, Code::KeyI, Code::KeyJ, Code::KeyK, Code::KeyL, Code::KeyM, Code::KeyN,
    Code::KeyO, Code::KeyP, Code::KeyQ, Code::KeyR, Code::KeyS, Code::KeyT, Code::KeyU,
    Code::KeyV, Code::KeyW, Code::KeyX, Code::KeyY, Code::KeyZ,
];

const DIGITS: [Code; 10] = [
    Code::Digit0, Code::Digit1, Code::Digit2, Code::Digit3, Code::Digit4,
    Code::Digit5, Code::Digit6, Code::Digit7, Code::Digit8, Code::Digit9,
];

const FUNCTION_KEYS: [Code; 12] = [
    Code::F1, Code::F2, Code::F3, Code::F4, Code::F5, Code::F6,
    Code::F7, Code::F8, Code::F9, Code::F10, Code::F11, Code::F12,
];

/// Parses a hotkey string like "F9", "Ctrl+Shift+H", "Cmd+Alt+N" into a HotKey
pub fn parse_hotkey(hotkey_str: &str) -> Result<HotKey> {
    let mut modifiers = Modifiers::empty();
    let mut key_code: Option<Code> = None;

    for part in hotkey_str.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let upper = part.to_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => modifiers |= Modifiers::CONTROL,
            "SHIFT" => modifiers |= Modifiers::SHIFT,
            "ALT" | "OPTION" | "OPT" => modifiers |= Modifiers::ALT,
            "CMD" | "COMMAND" | "SUPER" | "META" | "WIN" => modifiers |= Modifiers::SUPER,
            _ => {
                if key_code.is_some() {
                    return Err(anyhow!("More than one key in hotkey '{}'", hotkey_str));
                }
                key_code = Some(parse_key_code(&upper)?);
            }
        }
    }

    let code = key_code.ok_or_else(|| anyhow!("No key code found in hotkey string"))?;
    Ok(HotKey::new(Some(modifiers), code))
}

/// Parse an upper-cased key name into a Code
fn parse_key_code(key: &str) -> Result<Code> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() {
            return Ok(LETTERS[(c as u8 - b'A') as usize]);
        }
        if c.is_ascii_digit() {
            return Ok(DIGITS[(c as u8 - b'0') as usize]);
        }
    }

    if let Some(n) = key.strip_prefix('F').and_then(|n| n.parse::<usize>().ok()) {
        if (1..=FUNCTION_KEYS.len()).contains(&n) {
            return Ok(FUNCTION_KEYS[n - 1]);
        }
    }

    let code = match key {
        "SPACE" => Code::Space,
        "ENTER" | "RETURN" => Code::Enter,
        "TAB" => Code::Tab,
        "ESCAPE" | "ESC" => Code::Escape,
        "BACKSPACE" => Code::Backspace,
        "DELETE" | "DEL" => Code::Delete,
        "HOME" => Code::Home,
        "END" => Code::End,
        "PAGEUP" | "PGUP" => Code::PageUp,
        "PAGEDOWN" | "PGDN" => Code::PageDown,
        "UP" => Code::ArrowUp,
        "DOWN" => Code::ArrowDown,
        "LEFT" => Code::ArrowLeft,
        "RIGHT" => Code::ArrowRight,
        "`" | "BACKQUOTE" => Code::Backquote,
        _ => return Err(anyhow!("Unknown key code: {}", key)),
    };

    Ok(code)
}

/// Owns the registration of the HUD toggle hotkey
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    toggle_hotkey: Option<HotKey>,
}

impl HotkeyManager {
    /// Create a new hotkey manager
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create hotkey manager: {:?}", e))?;

        Ok(Self {
            manager,
            toggle_hotkey: None,
        })
    }

    /// Register `hotkey_str` as the toggle hotkey, replacing any previous one
    pub fn register_toggle_hotkey(&mut self, hotkey_str: &str) -> Result<()> {
        self.unregister_toggle_hotkey();

        let hotkey = parse_hotkey(hotkey_str)?;
        self.manager
            .register(hotkey)
            .map_err(|e| anyhow!("Failed to register hotkey: {:?}", e))?;

        self.toggle_hotkey = Some(hotkey);
        info!("Registered HUD toggle hotkey: {}", hotkey_str);
        Ok(())
    }

    /// Unregister the toggle hotkey
    pub fn unregister_toggle_hotkey(&mut self) {
        if let Some(hotkey) = self.toggle_hotkey.take() {
            let _ = self.manager.unregister(hotkey);
        }
    }

    /// Drain pending hotkey events.
    /// Returns true if the toggle hotkey was pressed.
    pub fn poll_events(&self) -> bool {
        let Some(toggle_id) = self.toggle_hotkey.map(|h| h.id()) else {
            return false;
        };

        let mut pressed = false;
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.id == toggle_id && event.state == HotKeyState::Pressed {
                debug!("HUD toggle hotkey pressed");
                pressed = true;
            }
        }
        pressed
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        self.unregister_toggle_hotkey();
    }
}
