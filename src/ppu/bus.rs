// PPU bus - pattern table and nametable routing
//
// PPU memory map:
// $0000-$0FFF  Pattern table 0  (cartridge, via mapper)
// $1000-$1FFF  Pattern table 1  (cartridge, via mapper)
// $2000-$2FFF  Nametables 0-3   (2KB VRAM through mirroring)
// $3000-$3EFF  Mirrors of $2000-$2EFF
// $3F00-$3FFF  Palette RAM      (internal to the PPU, never routed here)
//
// Reference: https://www.nesdev.org/wiki/PPU_memory_map

use std::cell::RefCell;
use std::rc::Rc;

use crate::cartridge::{Mapper, Mirroring};
use crate::error::{NesError, Result};
use crate::ram::Ram;

/// Fold a nametable address ($2000-$2FFF) onto the 2KB VRAM chip
///
/// The address space has room for four nametables but the console carries
/// VRAM for two; the cartridge wiring decides which quadrants alias.
///
/// # Arguments
///
/// * `addr` - Nametable address in $2000-$2FFF
/// * `mirroring` - Wiring from the cartridge
///
/// # Returns
///
/// Offset into the 2KB VRAM (0-0x7FF)
pub(super) fn mirror_nametable(addr: u16, mirroring: Mirroring) -> u16 {
    let offset = match (addr & 0x0C00, mirroring) {
        // Quadrant 0 is always the first physical table
        (0x0000, _) => 0x0000,
        (0x0400, Mirroring::Horizontal) => 0x0400,
        (0x0400, Mirroring::Vertical) => 0x0000,
        (0x0800, Mirroring::Horizontal) => 0x0400,
        (0x0800, Mirroring::Vertical) => 0x0800,
        (0x0C00, _) => 0x0800,
        _ => unreachable!(),
    };
    (addr - 0x2000 - offset) % 0x0800
}

/// Bus connecting the PPU to the cartridge pattern tables and the VRAM chip
pub struct PpuBus {
    vram: Ram,
    mapper: Rc<RefCell<Box<dyn Mapper>>>,
}

impl PpuBus {
    /// Create a PPU bus over its own VRAM chip and the shared mapper
    pub fn new(mapper: Rc<RefCell<Box<dyn Mapper>>>) -> Self {
        PpuBus {
            vram: Ram::new(),
            mapper,
        }
    }

    /// Nametable mirroring wiring of the inserted cartridge
    pub fn mirroring(&self) -> Mirroring {
        self.mapper.borrow().mirroring()
    }

    /// Read a byte from PPU address space below the palette window
    pub fn read(&self, addr: u16) -> Result<u8> {
        match addr {
            0x0000..=0x1FFF => self.mapper.borrow().ppu_read(addr),
            0x2000..=0x2FFF => Ok(self.vram.read(mirror_nametable(addr, self.mirroring()))),
            0x3000..=0x3EFF => Ok(self
                .vram
                .read(mirror_nametable(addr - 0x1000, self.mirroring()))),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    /// Write a byte to PPU address space below the palette window
    pub fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        match addr {
            0x0000..=0x1FFF => self.mapper.borrow_mut().ppu_write(addr, data),
            0x2000..=0x2FFF => {
                let offset = mirror_nametable(addr, self.mirroring());
                self.vram.write(offset, data);
                Ok(())
            }
            0x3000..=0x3EFF => {
                let offset = mirror_nametable(addr - 0x1000, self.mirroring());
                self.vram.write(offset, data);
                Ok(())
            }
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }
}
