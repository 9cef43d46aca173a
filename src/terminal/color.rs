// src/terminal/color.rs

//! Terminal color table

/// SGR foreground codes, indexed by [`TerminalColor`]
pub const ANSI_COLORS: [u8; 3] = [33, 32, 34];

/// Colors selectable through [`set_color`](super::set_color)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColor {
    Yellow = 0,
    Green = 1,
    Blue = 2,
}

impl TerminalColor {
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(TerminalColor::Yellow),
            1 => Some(TerminalColor::Green),
            2 => Some(TerminalColor::Blue),
            _ => None,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// SGR parameter for this color
    pub const fn ansi_code(self) -> u8 {
        ANSI_COLORS[self as usize]
    }
}
