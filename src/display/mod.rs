// Display module - frame buffer and master palette
//
// This module provides:
// - NES master color palette (64 entries, "RGB" PPU variant)
// - Frame buffer (256×240 palette indices, RGBA8 conversion)
//
// Presenting the image (window, texture upload, vsync) belongs to the host.

pub mod framebuffer;
pub mod palette;

pub use framebuffer::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use palette::{palette_to_rgba, NES_PALETTE};
