// Bus module - CPU-side address decoding
//
// CPU memory map:
// $0000-$07FF  Work RAM
// $0800-$1FFF  Work RAM mirrors (every 2KB)
// $2000-$2007  PPU registers
// $2008-$3FFF  PPU register mirrors (every 8 bytes)
// $4014        OAM-DMA trigger (write only)
// $4016        Controller 1 (serial read / strobe write)
// $4000-$4017  APU and IO registers (accepted, logged, otherwise inert)
// $4018-$401F  CPU test registers (illegal)
// $4020-$FFFF  Cartridge, delegated to the mapper
//
// The bus owns every device the CPU can talk to; only the mapper is shared
// with the PPU side of the cartridge connector.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::apu::Apu;
use crate::cartridge::Mapper;
use crate::error::{NesError, Result};
use crate::input::Controller;
use crate::ppu::Ppu;
use crate::ram::Ram;

/// Stall cycles the CPU serves after an OAM-DMA transfer
///
/// Hardware takes 513 or 514 depending on cycle parity; the pessimistic
/// constant is within the tolerance of the timing tests.
pub const OAM_DMA_STALL: u64 = 514;

/// Memory bus connecting the CPU to RAM, PPU, APU, controller and cartridge
pub struct CpuBus {
    /// 2KB work RAM, mirrored through $1FFF
    wram: Ram,

    /// The PPU, reached through the $2000-$3FFF register window
    pub ppu: Ppu,

    /// APU register sink
    pub apu: Apu,

    /// Controller 1 at $4016
    pub controller: Controller,

    /// Cartridge mapper, shared with the PPU bus
    mapper: Rc<RefCell<Box<dyn Mapper>>>,

    /// Stall cycles produced by OAM-DMA, waiting for the CPU to collect
    dma_stall: u64,
}

impl CpuBus {
    /// Create a new bus over the given PPU and the shared mapper
    pub fn new(ppu: Ppu, mapper: Rc<RefCell<Box<dyn Mapper>>>) -> Self {
        CpuBus {
            wram: Ram::new(),
            ppu,
            apu: Apu::new(),
            controller: Controller::new(),
            mapper,
            dma_stall: 0,
        }
    }

    /// Read a byte
    pub fn read(&mut self, addr: u16) -> Result<u8> {
        match addr {
            0x0000..=0x1FFF => Ok(self.wram.read(addr & 0x07FF)),
            0x2000..=0x3FFF => self.ppu.read_register(addr & 0x0007),
            // The DMA trigger is write-only
            0x4014 => Err(NesError::IllegalBusAccess { addr }),
            0x4016 => Ok(self.controller.read()),
            0x4000..=0x4013 | 0x4015 | 0x4017 => {
                info!("unimplemented IO read: ${:04X}", addr);
                Ok(0)
            }
            0x4018..=0x401F => Err(NesError::IllegalBusAccess { addr }),
            0x4020..=0xFFFF => self.mapper.borrow().cpu_read(addr),
        }
    }

    /// Write a byte
    ///
    /// A write to $4014 performs the whole OAM-DMA transfer as a side
    /// effect and records the stall cycles for the CPU to collect.
    pub fn write(&mut self, addr: u16, data: u8) -> Result<()> {
        match addr {
            0x0000..=0x1FFF => {
                self.wram.write(addr & 0x07FF, data);
                Ok(())
            }
            0x2000..=0x3FFF => self.ppu.write_register(addr & 0x0007, data),
            0x4014 => self.oam_dma(data),
            0x4016 => {
                self.controller.write(data);
                Ok(())
            }
            0x4000..=0x4013 | 0x4015 | 0x4017 => {
                info!("unimplemented IO write: ${:04X} = ${:02X}", addr, data);
                self.apu.write_register(addr, data);
                Ok(())
            }
            0x4018..=0x401F => Err(NesError::IllegalBusAccess { addr }),
            0x4020..=0xFFFF => self.mapper.borrow_mut().cpu_write(addr, data),
        }
    }

    /// Read a 16-bit little-endian value (low byte first)
    pub fn read16(&mut self, addr: u16) -> Result<u16> {
        let low = self.read(addr)? as u16;
        let high = self.read(addr.wrapping_add(1))? as u16;
        Ok((high << 8) | low)
    }

    /// Read a 16-bit value reproducing the 6502 page-wrap defect
    ///
    /// When the pointer sits on the last byte of a page the high byte is
    /// fetched from the start of the same page instead of the next one.
    /// Indirect JMP and the zero-page indirect addressing modes depend on
    /// this.
    pub fn read16_bug(&mut self, addr: u16) -> Result<u16> {
        let low = self.read(addr)? as u16;
        let high_addr = if addr & 0x00FF == 0x00FF {
            addr & 0xFF00
        } else {
            addr + 1
        };
        let high = self.read(high_addr)? as u16;
        Ok((high << 8) | low)
    }

    /// Collect stall cycles produced by an OAM-DMA transfer
    pub(crate) fn take_dma_stall(&mut self) -> u64 {
        std::mem::take(&mut self.dma_stall)
    }

    /// $4014: copy the 256-byte page `page << 8` into PPU OAM
    fn oam_dma(&mut self, page: u8) -> Result<()> {
        let base = (page as u16) << 8;
        let mut block = [0u8; 256];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.read(base + i as u16)?;
        }
        self.ppu.write_oam_dma(block);
        self.dma_stall += OAM_DMA_STALL;
        Ok(())
    }
}
