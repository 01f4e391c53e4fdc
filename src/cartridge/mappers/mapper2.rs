// Mapper 2 (UxROM) - Switchable PRG-ROM banks with CHR-RAM
//
// Memory layout:
// - CPU $8000-$BFFF: 16KB switchable PRG-ROM bank
// - CPU $C000-$FFFF: 16KB PRG-ROM bank, fixed to the last bank
// - PPU $0000-$1FFF: 8KB CHR-RAM
//
// Any CPU write into $8000-$FFFF latches the bank select register.

use crate::cartridge::{Cartridge, Mapper, Mirroring, CHR_ROM_UNIT, PRG_ROM_UNIT};
use crate::error::{NesError, Result};

/// Mapper 2 implementation (UxROM)
///
/// Used by games like Mega Man, Castlevania and Contra. The board has no
/// CHR-ROM; tiles are uploaded by the program into CHR-RAM.
pub struct Mapper2 {
    /// PRG-ROM data, divided into 16KB banks
    prg_rom: Vec<u8>,
    /// Number of 16KB banks in `prg_rom`
    banks: usize,
    /// Bank currently selected into $8000-$BFFF
    current_bank: usize,
    /// 8KB CHR-RAM
    chr_ram: Vec<u8>,
    /// Mirroring wiring, fixed by the cartridge header
    mirroring: Mirroring,
}

impl Mapper2 {
    /// Create a new Mapper2 instance, taking ownership of the PRG-ROM
    pub fn new(cartridge: Cartridge) -> Self {
        let banks = cartridge.prg_rom.len() / PRG_ROM_UNIT;
        Mapper2 {
            prg_rom: cartridge.prg_rom,
            banks,
            current_bank: 0,
            chr_ram: vec![0; CHR_ROM_UNIT],
            mirroring: cartridge.mirroring,
        }
    }
}

impl Mapper for Mapper2 {
    fn cpu_read(&self, addr: u16) -> Result<u8> {
        match addr {
            // Switchable window
            0x8000..=0xBFFF => {
                let index = self.current_bank * PRG_ROM_UNIT + (addr - 0x8000) as usize;
                Ok(self.prg_rom[index])
            }
            // Fixed window, always the last bank
            0xC000..=0xFFFF => {
                let index = (self.banks - 1) * PRG_ROM_UNIT + (addr - 0xC000) as usize;
                Ok(self.prg_rom[index])
            }
            0x6000..=0x7FFF => Err(NesError::NotImplemented { addr }),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn cpu_write(&mut self, addr: u16, data: u8) -> Result<()> {
        match addr {
            // The whole ROM window is the bank select register
            0x8000..=0xFFFF => {
                self.current_bank = data as usize % self.banks;
                Ok(())
            }
            0x6000..=0x7FFF => Err(NesError::NotImplemented { addr }),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn ppu_read(&self, addr: u16) -> Result<u8> {
        match addr {
            0x0000..=0x1FFF => Ok(self.chr_ram[addr as usize]),
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn ppu_write(&mut self, addr: u16, data: u8) -> Result<()> {
        match addr {
            0x0000..=0x1FFF => {
                self.chr_ram[addr as usize] = data;
                Ok(())
            }
            _ => Err(NesError::IllegalBusAccess { addr }),
        }
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
