// Test support - in-memory cartridges and pre-wired component stacks
//
// Unit tests across the crate need a CPU bus with a live cartridge behind
// it; these helpers build one around an NROM image without touching disk.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::CpuBus;
use crate::cartridge::{create_mapper, Cartridge, Mirroring};
use crate::ppu::{Ppu, PpuBus};

/// Build an NROM cartridge around the given payloads
pub(crate) fn nrom_cartridge(prg_rom: Vec<u8>, chr_rom: Vec<u8>) -> Cartridge {
    Cartridge {
        prg_rom,
        chr_rom,
        chr_is_ram: false,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        extra_flags: [0; 5],
    }
}

/// Build a fully wired CPU bus over an NROM cartridge
pub(crate) fn wired_bus(prg_rom: Vec<u8>) -> CpuBus {
    let cartridge = nrom_cartridge(prg_rom, vec![0; 0x2000]);
    let mapper = Rc::new(RefCell::new(create_mapper(cartridge).unwrap()));
    let ppu = Ppu::new(PpuBus::new(Rc::clone(&mapper)));
    CpuBus::new(ppu, mapper)
}

/// A wired bus with 16KB of zeroed PRG-ROM
pub(crate) fn empty_bus() -> CpuBus {
    wired_bus(vec![0; 0x4000])
}

/// A wired bus whose PRG-ROM is zeroed except for the given patches
///
/// Addresses are CPU-visible ($8000-$FFFF on a 32KB image).
pub(crate) fn bus_with_rom_bytes(patches: &[(u16, u8)]) -> CpuBus {
    let mut prg_rom = vec![0; 0x8000];
    for &(addr, value) in patches {
        prg_rom[(addr - 0x8000) as usize] = value;
    }
    wired_bus(prg_rom)
}
