// Mapper 0 (NROM) - Fixed mapping with no bank switching
//
// Memory layout:
// - CPU $8000-$BFFF: First 16KB of PRG-ROM
// - CPU $C000-$FFFF: Last 16KB of PRG-ROM (mirror of the first 16KB for
//   NROM-128 boards)
// - PPU $0000-$1FFF: 8KB CHR-ROM, or 8KB CHR-RAM when the header declares
//   zero CHR banks

use crate::cartridge::{Cartridge, Mapper, Mirroring};
use crate::error::{NesError, Result};

/// Mapper 0 implementation (NROM)
///
/// Used by games like Super Mario Bros., Donkey Kong and Balloon Fight.
/// PRG reads are indexed modulo the ROM length, which mirrors 16KB boards
/// across the full 32KB window.
pub struct Mapper0 {
    /// PRG-ROM data (16KB or 32KB)
    prg_rom: Vec<u8>,
    /// CHR-ROM or CHR-RAM data (8KB)
    chr_mem: Vec<u8>,
    /// Whether CHR memory is RAM (writable) or ROM (read-only)
    chr_is_ram: bool,
    /// Mirroring wiring, fixed by the cartridge header
    mirroring: Mirroring,
}

impl Mapper0 {
    /// Create a new Mapper0 instance, taking ownership of the ROM buffers
    pub fn new(cartridge: Cartridge) -> Self {
        Mapper0 {
            prg_rom: cartridge.prg_rom,
            chr_mem: cartridge.chr_rom,
            chr_is_ram: cartridge.chr_is_ram,
            mirroring: cartridge.mirroring,
        }
    }
}

impl Mapper for Mapper0 {
    fn cpu_read(&self, addr: u16) -> Result<u8> {
        match addr {
            0x8000..=0xFFFF => {
                let index = (addr - 0x8000) as usize;
                Ok(self.prg_rom[index % self.prg_rom.len()])
            }
            // Family Basic PRG-RAM window; not modeled
            0x6000..=0x7FFF => Err(NesError::NotImplemented { addr }),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn cpu_write(&mut self, addr: u16, _data: u8) -> Result<()> {
        match addr {
            // NROM has no registers; PRG-ROM is not writable
            0x8000..=0xFFFF => Err(NesError::IllegalBusAccess { addr }),
            0x6000..=0x7FFF => Err(NesError::NotImplemented { addr }),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn ppu_read(&self, addr: u16) -> Result<u8> {
        match addr {
            0x0000..=0x1FFF => Ok(self.chr_mem[addr as usize]),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn ppu_write(&mut self, addr: u16, data: u8) -> Result<()> {
        match addr {
            0x0000..=0x1FFF => {
                if self.chr_is_ram {
                    self.chr_mem[addr as usize] = data;
                    Ok(())
                } else {
                    // Pattern tables are mask ROM on this board
                    Err(NesError::IllegalBusAccess { addr })
                }
            }
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
