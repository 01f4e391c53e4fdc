// CPU execution and trace logging module

use crate::bus::CpuBus;
use crate::cpu::addressing::{AddressingMode, AddressingResult};
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::cpu::Cpu;
use crate::error::{NesError, Result};

impl Cpu {
    /// Execute one CPU step
    ///
    /// A step is one of:
    /// - serving a single stall cycle left over from OAM-DMA,
    /// - servicing a latched NMI and then running the next instruction
    ///   (7 cycles on top of the instruction), or
    /// - a plain fetch-decode-execute of the instruction at PC.
    ///
    /// # Returns
    ///
    /// The number of cycles consumed, including branch and page-cross
    /// penalties. An error during the operand fetch aborts the
    /// instruction and leaves PC on the opcode byte.
    pub fn step(&mut self, bus: &mut CpuBus) -> Result<u32> {
        if self.stall > 0 {
            self.stall -= 1;
            self.cycles = self.cycles.wrapping_add(1);
            return Ok(1);
        }

        let mut nmi_cycles = 0;
        if self.nmi_triggered {
            self.service_nmi(bus)?;
            self.nmi_triggered = false;
            nmi_cycles = 7;
        }

        let pc = self.pc;
        let opcode = bus.read(pc)?;
        let opcode_info = &OPCODE_TABLE[opcode as usize];
        if opcode_info.mnemonic.is_empty() {
            return Err(NesError::UnknownOpcode { opcode, pc });
        }

        // Move PC past the opcode; operand resolution consumes the rest
        self.pc = self.pc.wrapping_add(1);
        let addr_result = match self.resolve_operand(opcode_info.mode, bus) {
            Ok(result) => result,
            Err(err) => {
                self.pc = pc;
                return Err(err);
            }
        };

        let extra_cycles = self.execute_instruction(opcode, &addr_result, bus)?;

        let mut cycles = opcode_info.cycles as u32;
        if opcode_info.page_cycle && addr_result.page_crossed {
            cycles += 1;
        }
        cycles += extra_cycles as u32;

        // OAM-DMA triggered by this instruction stalls the following steps
        self.stall += bus.take_dma_stall();

        let total = cycles + nmi_cycles;
        self.cycles = self.cycles.wrapping_add(total as u64);
        Ok(total)
    }

    /// Dispatch one decoded instruction
    ///
    /// Returns the extra cycles consumed by branches; everything else
    /// reports zero and lets the table drive the count.
    #[allow(clippy::too_many_lines)]
    fn execute_instruction(
        &mut self,
        opcode: u8,
        addr_result: &AddressingResult,
        bus: &mut CpuBus,
    ) -> Result<u8> {
        match opcode {
            // Load/store instructions
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, addr_result)?,
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, addr_result)?,
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, addr_result)?,
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, addr_result)?,
            0x86 | 0x96 | 0x8E => self.stx(bus, addr_result)?,
            0x84 | 0x94 | 0x8C => self.sty(bus, addr_result)?,

            // Arithmetic instructions
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, addr_result)?,
            0xE9 | 0xEB | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => {
                self.sbc(bus, addr_result)?
            }
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, addr_result)?,
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, addr_result)?,
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Logic instructions
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, addr_result)?,
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, addr_result)?,
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, addr_result)?,
            0x24 | 0x2C => self.bit(bus, addr_result)?,

            // Shift/rotate instructions
            0x0A => self.asl(bus, addr_result, true)?,
            0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, addr_result, false)?,
            0x4A => self.lsr(bus, addr_result, true)?,
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, addr_result, false)?,
            0x2A => self.rol(bus, addr_result, true)?,
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, addr_result, false)?,
            0x6A => self.ror(bus, addr_result, true)?,
            0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, addr_result, false)?,

            // Compare instructions
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, addr_result)?,
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, addr_result)?,
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, addr_result)?,

            // Branch instructions (report extra cycles)
            0x90 => return Ok(self.bcc(addr_result)),
            0xB0 => return Ok(self.bcs(addr_result)),
            0xF0 => return Ok(self.beq(addr_result)),
            0xD0 => return Ok(self.bne(addr_result)),
            0x30 => return Ok(self.bmi(addr_result)),
            0x10 => return Ok(self.bpl(addr_result)),
            0x50 => return Ok(self.bvc(addr_result)),
            0x70 => return Ok(self.bvs(addr_result)),

            // Jump/subroutine/interrupt instructions
            0x4C | 0x6C => self.jmp(addr_result),
            0x20 => self.jsr(bus, addr_result)?,
            0x60 => self.rts(bus)?,
            0x00 => self.brk(bus)?,
            0x40 => self.rti(bus)?,

            // Stack instructions
            0x48 => self.pha(bus)?,
            0x68 => self.pla(bus)?,
            0x08 => self.php(bus)?,
            0x28 => self.plp(bus)?,
            0x9A => self.txs(),
            0xBA => self.tsx(),

            // Transfer instructions
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),

            // Flag instructions
            0x18 => self.clc(),
            0x38 => self.sec(),
            0x58 => self.cli(),
            0x78 => self.sei(),
            0xB8 => self.clv(),
            0xD8 => self.cld(),
            0xF8 => self.sed(),

            // Unofficial composites
            0xA7 | 0xB7 | 0xAF | 0xBF | 0xA3 | 0xB3 => self.lax(bus, addr_result)?,
            0x87 | 0x97 | 0x8F | 0x83 => self.sax(bus, addr_result)?,
            0xC7 | 0xD7 | 0xCF | 0xDF | 0xDB | 0xC3 | 0xD3 => self.dcp(bus, addr_result)?,
            0xE7 | 0xF7 | 0xEF | 0xFF | 0xFB | 0xE3 | 0xF3 => self.isc(bus, addr_result)?,
            0x07 | 0x17 | 0x0F | 0x1F | 0x1B | 0x03 | 0x13 => self.slo(bus, addr_result)?,
            0x27 | 0x37 | 0x2F | 0x3F | 0x3B | 0x23 | 0x33 => self.rla(bus, addr_result)?,
            0x47 | 0x57 | 0x4F | 0x5F | 0x5B | 0x43 | 0x53 => self.sre(bus, addr_result)?,
            0x67 | 0x77 | 0x6F | 0x7F | 0x7B | 0x63 | 0x73 => self.rra(bus, addr_result)?,

            // NOP, official and the undocumented operand-taking shapes
            0xEA | 0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xFA | 0x80 | 0x82 | 0x89 | 0xC2 | 0xE2
            | 0x04 | 0x44 | 0x64 | 0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 | 0x0C | 0x1C | 0x3C
            | 0x5C | 0x7C | 0xDC | 0xFC => {}

            _ => {
                return Err(NesError::UnknownOpcode {
                    opcode,
                    pc: self.pc,
                })
            }
        }
        Ok(0)
    }

    /// Format the instruction at PC together with the register file
    ///
    /// Produces the conventional log shape used by CPU test ROMs:
    /// `PC  bytes  MNEMONIC operand  A:.. X:.. Y:.. P:.. SP:.. CYC:..`.
    /// Unreadable operand bytes are shown as zero rather than failing.
    pub fn trace(&self, bus: &mut CpuBus) -> String {
        let pc = self.pc;
        let opcode = bus.read(pc).unwrap_or(0);
        let opcode_info = &OPCODE_TABLE[opcode as usize];

        let byte2 = if opcode_info.bytes >= 2 {
            bus.read(pc.wrapping_add(1)).unwrap_or(0)
        } else {
            0
        };
        let byte3 = if opcode_info.bytes >= 3 {
            bus.read(pc.wrapping_add(2)).unwrap_or(0)
        } else {
            0
        };

        let hex_bytes = match opcode_info.bytes {
            2 => format!("{:02X} {:02X}   ", opcode, byte2),
            3 => format!("{:02X} {:02X} {:02X}", opcode, byte2, byte3),
            _ => format!("{:02X}      ", opcode),
        };

        let mnemonic = if opcode_info.mnemonic.is_empty() {
            "???"
        } else {
            opcode_info.mnemonic
        };
        let operand = self.format_operand(opcode_info.mode, pc, byte2, byte3);
        let disassembly = format!("{} {}", mnemonic, operand);

        format!(
            "{:04X}  {}  {:<14}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, hex_bytes, disassembly, self.a, self.x, self.y, self.status, self.sp, self.cycles
        )
    }

    /// Render the operand field of a trace line
    fn format_operand(&self, mode: AddressingMode, pc: u16, byte2: u8, byte3: u8) -> String {
        match mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Accumulator => "A".to_string(),
            AddressingMode::Immediate => format!("#${:02X}", byte2),
            AddressingMode::ZeroPage => format!("${:02X}", byte2),
            AddressingMode::ZeroPageX => format!("${:02X},X", byte2),
            AddressingMode::ZeroPageY => format!("${:02X},Y", byte2),
            AddressingMode::Relative => {
                let offset = byte2 as i8;
                let target = if offset >= 0 {
                    pc.wrapping_add(2).wrapping_add(offset as u16)
                } else {
                    pc.wrapping_add(2).wrapping_sub((-(offset as i16)) as u16)
                };
                format!("${:04X}", target)
            }
            AddressingMode::Absolute => format!("${:04X}", u16::from_le_bytes([byte2, byte3])),
            AddressingMode::AbsoluteX => {
                format!("${:04X},X", u16::from_le_bytes([byte2, byte3]))
            }
            AddressingMode::AbsoluteY => {
                format!("${:04X},Y", u16::from_le_bytes([byte2, byte3]))
            }
            AddressingMode::Indirect => {
                format!("(${:04X})", u16::from_le_bytes([byte2, byte3]))
            }
            AddressingMode::IndexedIndirect => format!("(${:02X},X)", byte2),
            AddressingMode::IndirectIndexed => format!("(${:02X}),Y", byte2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::empty_bus;

    /// CPU executing out of work RAM at $0200
    fn cpu_with_program(program: &[u8]) -> (Cpu, crate::bus::CpuBus) {
        let mut bus = empty_bus();
        for (i, &byte) in program.iter().enumerate() {
            bus.write(0x0200 + i as u16, byte).unwrap();
        }
        let mut cpu = Cpu::new();
        cpu.pc = 0x0200;
        (cpu, bus)
    }

    #[test]
    fn test_step_lda_immediate() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xA9, 0x42]);

        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cycles, 2);
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, 0x0202);
    }

    #[test]
    fn test_step_absolute_x_page_cross_penalty() {
        // LDA $02FF,X with X=1 crosses into page $03
        let (mut cpu, mut bus) = cpu_with_program(&[0xBD, 0xFF, 0x02]);
        cpu.x = 0x01;
        bus.write(0x0300, 0x99).unwrap();

        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cycles, 5); // 4 + 1
        assert_eq!(cpu.a, 0x99);
    }

    #[test]
    fn test_step_sta_never_pays_page_penalty() {
        // STA $02FF,X with X=1: stores always run worst-case timing
        let (mut cpu, mut bus) = cpu_with_program(&[0x9D, 0xFF, 0x02]);
        cpu.x = 0x01;
        cpu.a = 0x55;

        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cycles, 5);
        assert_eq!(bus.read(0x0300).unwrap(), 0x55);
    }

    #[test]
    fn test_step_unknown_opcode_leaves_pc() {
        let (mut cpu, mut bus) = cpu_with_program(&[0x02]);

        let err = cpu.step(&mut bus).unwrap_err();
        assert_eq!(
            err,
            NesError::UnknownOpcode {
                opcode: 0x02,
                pc: 0x0200
            }
        );
        assert_eq!(cpu.pc, 0x0200);
    }

    #[test]
    fn test_step_serves_stall_cycles_first() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xA9, 0x42]);
        cpu.stall = 2;

        assert_eq!(cpu.step(&mut bus).unwrap(), 1);
        assert_eq!(cpu.step(&mut bus).unwrap(), 1);
        assert_eq!(cpu.pc, 0x0200); // still not executed

        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.a, 0x42);
    }

    #[test]
    fn test_step_nmi_adds_seven_and_runs_handler() {
        // NMI vector -> $0300, where the handler starts with LDA #$01
        let mut bus = crate::testing::bus_with_rom_bytes(&[(0xFFFA, 0x00), (0xFFFB, 0x03)]);
        bus.write(0x0300, 0xA9).unwrap();
        bus.write(0x0301, 0x01).unwrap();

        let mut cpu = Cpu::new();
        cpu.pc = 0x0200;
        cpu.latch_nmi();

        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cycles, 9); // 7 for entry + 2 for LDA immediate
        assert_eq!(cpu.a, 0x01);
        assert_eq!(cpu.pc, 0x0302);
    }

    #[test]
    fn test_step_nop_shapes_consume_operands() {
        // $04 is a zero-page NOP: two bytes, three cycles, no effect
        let (mut cpu, mut bus) = cpu_with_program(&[0x04, 0x10]);
        let cycles = cpu.step(&mut bus).unwrap();
        assert_eq!(cycles, 3);
        assert_eq!(cpu.pc, 0x0202);
    }

    #[test]
    fn test_trace_format() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xA9, 0x42]);
        cpu.status = 0x24;
        let line = cpu.trace(&mut bus);
        assert!(line.starts_with("0200  A9 42"));
        assert!(line.contains("LDA #$42"));
        assert!(line.contains("P:24"));
        assert!(line.contains("SP:FD"));
        let _ = cpu.step(&mut bus);
    }
}
