//! PPU unit tests
//!
//! Organized by functionality: register behavior, scroll and pixel
//! pipeline arithmetic, and frame/NMI timing. Shared helpers build a PPU
//! over an in-memory NROM cartridge.

mod registers;
mod rendering;
mod timing;

use super::*;
use crate::cartridge::{create_mapper, Cartridge, Mirroring};
use std::cell::RefCell;
use std::rc::Rc;

/// Register numbers as the CPU bus delivers them (address & 7)
const CTRL: u16 = 0;
const MASK: u16 = 1;
const STATUS: u16 = 2;
const OAMADDR: u16 = 3;
const OAMDATA: u16 = 4;
const SCROLL: u16 = 5;
const ADDR: u16 = 6;
const DATA: u16 = 7;

/// Build a PPU over an NROM cartridge with the given CHR payload
fn ppu_with_chr(chr: Vec<u8>, mirroring: Mirroring) -> Ppu {
    let cartridge = Cartridge {
        prg_rom: vec![0; 0x4000],
        chr_rom: chr,
        chr_is_ram: false,
        mapper: 0,
        mirroring,
        extra_flags: [0; 5],
    };
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
    Ppu::new(PpuBus::new(mapper))
}

/// Build a PPU with blank CHR and horizontal mirroring
fn test_ppu() -> Ppu {
    ppu_with_chr(vec![0; 0x2000], Mirroring::Horizontal)
}

/// Step the PPU to exactly (scanline, dot), from wherever it is now
fn step_to(ppu: &mut Ppu, scanline: u16, dot: u16) -> StepResult {
    loop {
        let result = ppu.step().unwrap();
        if ppu.scanline == scanline && ppu.cycle == dot {
            return result;
        }
    }
}
