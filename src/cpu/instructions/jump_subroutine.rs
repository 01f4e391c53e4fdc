// Jump, subroutine and interrupt instructions for 6502 CPU
//
// JSR pushes the address of its own last byte (PC - 1); RTS compensates by
// adding one after the pop. BRK pushes the status with the break bit set
// and vectors through $FFFE; RTI restores the status first and adds
// nothing to the popped PC.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// JMP - Jump (absolute or indirect)
    pub fn jmp(&mut self, addr_result: &AddressingResult) {
        self.pc = addr_result.address;
    }

    /// JSR - Jump to Subroutine
    pub fn jsr(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let return_addr = self.pc.wrapping_sub(1);
        self.push16(bus, return_addr)?;
        self.pc = addr_result.address;
        Ok(())
    }

    /// RTS - Return from Subroutine
    pub fn rts(&mut self, bus: &mut CpuBus) -> Result<()> {
        self.pc = self.pop16(bus)?.wrapping_add(1);
        Ok(())
    }

    /// BRK - Break (software interrupt through $FFFE)
    pub fn brk(&mut self, bus: &mut CpuBus) -> Result<()> {
        self.push16(bus, self.pc)?;
        let status = self.status_for_push(true);
        self.push(bus, status)?;
        self.set_interrupt_disable(true);
        self.pc = bus.read16(0xFFFE)?;
        Ok(())
    }

    /// RTI - Return from Interrupt
    pub fn rti(&mut self, bus: &mut CpuBus) -> Result<()> {
        let status = self.pop(bus)?;
        self.set_status_from_pull(status);
        self.pc = self.pop16(bus)?;
        Ok(())
    }
}
