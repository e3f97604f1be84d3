//! Discord presentation: embeds, buttons, select menus, and modals.

pub mod component;
pub mod embed;

pub const COLOUR_BLURPLE: u32 = 0x5865F2;
pub const COLOUR_GREEN: u32 = 0x00FF00;
pub const COLOUR_ORANGE: u32 = 0xFFA500;
pub const COLOUR_RED: u32 = 0xFF0000;
