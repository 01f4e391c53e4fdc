// NES emulation core
//
// The hardware lives here: the 6502 CPU, the 2C02 PPU, the two address
// buses, the cartridge mappers and the console master loop. Presentation
// (window, texture upload, input polling, audio playback) belongs to the
// host, which drives `Console::step`, reads frames out of `frame` and
// feeds controller snapshots back in.

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod console;
pub mod cpu;
pub mod display;
pub mod error;
pub mod input;
pub mod ppu;
pub mod ram;

#[cfg(test)]
mod testing;

// Re-export the main types for convenience
pub use apu::{Apu, AudioSink};
pub use bus::CpuBus;
pub use cartridge::{Cartridge, Mirroring};
pub use console::Console;
pub use cpu::Cpu;
pub use display::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use error::{NesError, Result};
pub use input::{Button, Controller};
pub use ppu::Ppu;
