// Console module - the wired-up machine and its master loop
//
// The console owns the CPU and the CPU bus (which in turn owns the PPU,
// APU, controller and work RAM); the cartridge mapper is the one shared
// piece, visible from both bus sides. One `step` runs a single CPU
// instruction and then advances the PPU exactly three dots per consumed
// CPU cycle, latching the vertical-blank NMI back into the CPU and
// snapshotting each finished frame for the host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::apu::AudioSink;
use crate::bus::CpuBus;
use crate::cartridge::{create_mapper, Cartridge};
use crate::cpu::Cpu;
use crate::display::FrameBuffer;
use crate::error::Result;
use crate::ppu::{Ppu, PpuBus};

/// PPU dots per CPU cycle; the two clocks are locked in this ratio
pub const PPU_DOTS_PER_CPU_CYCLE: u32 = 3;

/// A complete NES: CPU, PPU, buses, cartridge and controller
pub struct Console {
    cpu: Cpu,
    bus: CpuBus,

    /// Most recently completed image, stable while the PPU renders the next
    frame: FrameBuffer,

    /// Frames completed since power-on
    current_frame: u64,

    /// Last frame number handed to the host through `frame`
    last_frame: u64,
}

impl Console {
    /// Build a console around a parsed cartridge
    ///
    /// Wires the mapper into both bus sides, resets the CPU through the
    /// $FFFC vector and leaves the PPU at its power-on dot.
    pub fn new(cartridge: Cartridge) -> Result<Self> {
        let mapper = Rc::new(RefCell::new(create_mapper(cartridge)?));
        let ppu = Ppu::new(PpuBus::new(Rc::clone(&mapper)));
        let bus = CpuBus::new(ppu, mapper);

        let mut console = Console {
            cpu: Cpu::new(),
            bus,
            frame: FrameBuffer::new(),
            current_frame: 0,
            last_frame: 0,
        };
        console.reset()?;
        Ok(console)
    }

    /// Build a console directly from iNES image bytes
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self> {
        Console::new(Cartridge::from_bytes(data)?)
    }

    /// Reset the machine: CPU through the reset vector, PPU to power-on
    pub fn reset(&mut self) -> Result<()> {
        self.current_frame = 0;
        self.last_frame = 0;
        self.cpu.reset(&mut self.bus)?;
        self.bus.ppu.reset();
        Ok(())
    }

    /// Run one CPU step and the PPU dots that belong to it
    ///
    /// Returns the CPU cycles consumed. NMIs raised by the PPU during
    /// those dots are latched for the next CPU step, and a completed
    /// frame is copied out for `frame`.
    pub fn step(&mut self) -> Result<u32> {
        let cycles = self.cpu.step(&mut self.bus)?;

        for _ in 0..cycles {
            self.bus.apu.step();
        }

        for _ in 0..cycles * PPU_DOTS_PER_CPU_CYCLE {
            let result = self.bus.ppu.step()?;
            if result.nmi {
                self.cpu.latch_nmi();
            }
            if result.frame_complete {
                self.current_frame += 1;
                self.frame.copy_from(self.bus.ppu.frame());
            }
        }

        Ok(cycles)
    }

    /// The most recent completed image, and whether it is new since the
    /// last call
    ///
    /// The freshness latch trips at most once per completed frame, so a
    /// host polling faster than 60Hz repaints only when there is
    /// something new.
    pub fn frame(&mut self) -> (&FrameBuffer, bool) {
        if self.last_frame < self.current_frame {
            self.last_frame = self.current_frame;
            (&self.frame, true)
        } else {
            (&self.frame, false)
        }
    }

    /// Latch a controller snapshot in [A, B, Select, Start, Up, Down,
    /// Left, Right] order
    pub fn set_buttons(&mut self, buttons: [bool; 8]) {
        self.bus.controller.set_buttons(buttons);
    }

    /// Install the host's audio sink on the APU seam
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.bus.apu.set_sink(sink);
    }

    /// The CPU state, for tests and debugging frontends
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// The PPU state, for tests and debugging frontends
    pub fn ppu(&self) -> &Ppu {
        &self.bus.ppu
    }

    /// A trace line for the instruction the CPU will execute next
    ///
    /// Hosts print this alongside fatal errors to identify the offending
    /// instruction.
    pub fn trace(&mut self) -> String {
        self.cpu.trace(&mut self.bus)
    }

    /// Read a byte through the CPU bus, for tests and debugging frontends
    ///
    /// This is a real bus read: register side effects (status latch
    /// clears, data-port buffering) apply exactly as they would for the
    /// CPU.
    pub fn peek(&mut self, addr: u16) -> Result<u8> {
        self.bus.read(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{INES_HEADER_SIZE, PRG_ROM_UNIT};

    /// Minimal iNES image: spin loop at $8000, reset vector pointing at it
    fn spin_image() -> Vec<u8> {
        let mut data = vec![b'N', b'E', b'S', 0x1A, 1, 1, 0, 0];
        data.resize(INES_HEADER_SIZE, 0);
        let mut prg = vec![0xEA; PRG_ROM_UNIT]; // NOP sled
        prg[0x3FFC] = 0x00; // reset vector = $8000
        prg[0x3FFD] = 0x80;
        data.extend_from_slice(&prg);
        data.extend_from_slice(&vec![0; 0x2000]); // CHR
        data
    }

    #[test]
    fn test_console_boots_from_reset_vector() {
        let console = Console::from_ines_bytes(&spin_image()).unwrap();
        assert_eq!(console.cpu().pc, 0x8000);
        assert_eq!(console.cpu().sp, 0xFD);
        assert_eq!(console.cpu().status, 0x24);
    }

    #[test]
    fn test_step_returns_cpu_cycles() {
        let mut console = Console::from_ines_bytes(&spin_image()).unwrap();
        // NOP is two cycles
        assert_eq!(console.step().unwrap(), 2);
    }

    #[test]
    fn test_frame_is_fresh_exactly_once() {
        let mut console = Console::from_ines_bytes(&spin_image()).unwrap();

        // Run until the first completed frame
        let mut fresh_count = 0;
        for _ in 0..60_000 {
            console.step().unwrap();
            let (_, fresh) = console.frame();
            if fresh {
                fresh_count += 1;
                break;
            }
        }
        assert_eq!(fresh_count, 1);

        // Immediately asking again is stale
        let (_, fresh) = console.frame();
        assert!(!fresh);
    }

    #[test]
    fn test_controller_snapshot_reaches_cpu_bus() {
        let mut console = Console::from_ines_bytes(&spin_image()).unwrap();
        console.set_buttons([true, false, false, false, false, false, false, false]);

        // Strobe then read button A through the bus
        console.bus.write(0x4016, 1).unwrap();
        console.bus.write(0x4016, 0).unwrap();
        assert_eq!(console.peek(0x4016).unwrap(), 1);
    }
}
