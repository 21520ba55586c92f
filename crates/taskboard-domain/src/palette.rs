//! Deterministic badge colours.
//!
//! A tag's colour is the sum of the UTF-16 code units of its id modulo the
//! palette size. Keep the algorithm stable: existing boards rely on tags
//! keeping their colour across clients.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Teal,
}

pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor::Red,
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Yellow,
    PaletteColor::Purple,
    PaletteColor::Pink,
    PaletteColor::Indigo,
    PaletteColor::Teal,
];

impl PaletteColor {
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Indigo => "indigo",
            PaletteColor::Teal => "teal",
        }
    }

    pub fn css_class(self) -> String {
        format!("bg-{}-500", self.name())
    }
}

pub fn palette_index(id: &str) -> usize {
    let sum: u64 = id.encode_utf16().map(u64::from).sum();
    (sum % PALETTE.len() as u64) as usize
}

pub fn color_for_id(id: &str) -> PaletteColor {
    PALETTE[palette_index(id)]
}
