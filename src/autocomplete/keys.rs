//! Control keys intercepted on key-down

/// Keys the controller reacts to; everything else passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a legacy DOM `keyCode`
    pub fn from_key_code(code: u32) -> Self {
        match code {
            38 => Key::ArrowUp,
            40 => Key::ArrowDown,
            13 => Key::Enter,
            27 => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }

    /// Whether the host should suppress its default handling
    pub fn is_intercepted(&self) -> bool {
        !matches!(self, Key::Other)
    }
}
