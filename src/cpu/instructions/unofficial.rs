// Unofficial opcodes for 6502 CPU
//
// Commercial software and the common CPU test ROMs rely on a handful of
// undocumented opcodes. Each is a composite of two documented operations
// sharing one operand fetch: a load/store pair (LAX, SAX) or a read-
// modify-write followed by an ALU step (DCP, ISC, SLO, RLA, SRE, RRA).
// The unstable hybrids and the stop opcodes stay unimplemented.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// LAX - Load A and X with the same byte
    ///
    /// Flags affected: Z, N
    pub fn lax(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let value = self.read_operand(bus, addr_result)?;
        self.a = value;
        self.x = value;
        self.update_zero_and_negative_flags(value);
        Ok(())
    }

    /// SAX - Store A AND X (no flags)
    pub fn sax(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        bus.write(addr_result.address, self.a & self.x)
    }

    /// DCP - Decrement memory, then compare with A
    ///
    /// Flags affected: C, Z, N
    pub fn dcp(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let result = bus.read(addr_result.address)?.wrapping_sub(1);
        bus.write(addr_result.address, result)?;
        self.compare(self.a, result);
        Ok(())
    }

    /// ISC - Increment memory, then subtract it from A
    ///
    /// Flags affected: C, Z, V, N
    pub fn isc(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let result = bus.read(addr_result.address)?.wrapping_add(1);
        bus.write(addr_result.address, result)?;
        self.subtract_with_carry(result);
        Ok(())
    }

    /// SLO - Shift memory left, then OR it into A
    ///
    /// Flags affected: C, Z, N
    pub fn slo(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let value = bus.read(addr_result.address)?;
        self.set_carry(value & 0x80 != 0);
        let result = value << 1;
        bus.write(addr_result.address, result)?;
        self.a |= result;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// RLA - Rotate memory left, then AND it into A
    ///
    /// Flags affected: C, Z, N
    pub fn rla(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let carry_in = if self.get_carry() { 1u8 } else { 0 };
        let value = bus.read(addr_result.address)?;
        self.set_carry(value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        bus.write(addr_result.address, result)?;
        self.a &= result;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// SRE - Shift memory right, then EOR it into A
    ///
    /// Flags affected: C, Z, N
    pub fn sre(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let value = bus.read(addr_result.address)?;
        self.set_carry(value & 0x01 != 0);
        let result = value >> 1;
        bus.write(addr_result.address, result)?;
        self.a ^= result;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// RRA - Rotate memory right, then add it to A with carry
    ///
    /// Flags affected: C, Z, V, N
    pub fn rra(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let carry_in = if self.get_carry() { 0x80u8 } else { 0 };
        let value = bus.read(addr_result.address)?;
        self.set_carry(value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        bus.write(addr_result.address, result)?;
        self.add_with_carry(result);
        Ok(())
    }
}
