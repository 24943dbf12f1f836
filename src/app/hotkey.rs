use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::{FilterError, Result};

/// A parsed key combination such as `shift+f` or `ctrl+alt+k`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || FilterError::InvalidHotkey(raw.to_string());
        let parts: Vec<String> = raw
            .split('+')
            .map(|part| part.trim().to_lowercase())
            .collect();
        let Some((key, mods)) = parts.split_last() else {
            return Err(invalid());
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods {
            modifiers |= match part.as_str() {
                "shift" => KeyModifiers::SHIFT,
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "option" => KeyModifiers::ALT,
                _ => return Err(invalid()),
            };
        }

        let code = match key.as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            _ => {
                if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                    KeyCode::F(n)
                } else {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => KeyCode::Char(ch),
                        _ => return Err(invalid()),
                    }
                }
            }
        };

        Ok(Self { code, modifiers })
    }

    /// Terminals report shifted letters as uppercase chars, with or without
    /// the SHIFT flag, so letters compare case-insensitively when shift is part
    /// of the combination.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let wanted = self.modifiers.difference(KeyModifiers::SHIFT);
        let got = key.modifiers.difference(KeyModifiers::SHIFT);
        if wanted != got {
            return false;
        }

        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) if a.is_alphabetic() => {
                let shifted = key.modifiers.contains(KeyModifiers::SHIFT) || b.is_uppercase();
                let wants_shift = self.modifiers.contains(KeyModifiers::SHIFT);
                shifted == wants_shift && a.eq_ignore_ascii_case(&b)
            }
            (a, b) => {
                a == b
                    && self.modifiers.contains(KeyModifiers::SHIFT)
                        == key.modifiers.contains(KeyModifiers::SHIFT)
            }
        }
    }
}
