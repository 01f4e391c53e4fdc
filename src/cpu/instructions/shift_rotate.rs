// Shift and rotate instructions for 6502 CPU
//
// Each of these has an accumulator form (e.g. `LSR A`) and read-modify-
// write memory forms; the dispatcher tells them apart with the
// `accumulator` argument.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// ASL - Arithmetic Shift Left
    ///
    /// Bit 7 falls into carry; bit 0 becomes 0.
    /// Flags affected: C, Z, N
    pub fn asl(
        &mut self,
        bus: &mut CpuBus,
        addr_result: &AddressingResult,
        accumulator: bool,
    ) -> Result<()> {
        if accumulator {
            self.set_carry(self.a & 0x80 != 0);
            self.a <<= 1;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address)?;
            self.set_carry(value & 0x80 != 0);
            let result = value << 1;
            bus.write(addr_result.address, result)?;
            self.update_zero_and_negative_flags(result);
        }
        Ok(())
    }

    /// LSR - Logical Shift Right
    ///
    /// Bit 0 falls into carry; bit 7 becomes 0.
    /// Flags affected: C, Z, N
    pub fn lsr(
        &mut self,
        bus: &mut CpuBus,
        addr_result: &AddressingResult,
        accumulator: bool,
    ) -> Result<()> {
        if accumulator {
            self.set_carry(self.a & 0x01 != 0);
            self.a >>= 1;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address)?;
            self.set_carry(value & 0x01 != 0);
            let result = value >> 1;
            bus.write(addr_result.address, result)?;
            self.update_zero_and_negative_flags(result);
        }
        Ok(())
    }

    /// ROL - Rotate Left through carry
    ///
    /// Flags affected: C, Z, N
    pub fn rol(
        &mut self,
        bus: &mut CpuBus,
        addr_result: &AddressingResult,
        accumulator: bool,
    ) -> Result<()> {
        let carry_in = if self.get_carry() { 1u8 } else { 0 };
        if accumulator {
            self.set_carry(self.a & 0x80 != 0);
            self.a = (self.a << 1) | carry_in;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address)?;
            self.set_carry(value & 0x80 != 0);
            let result = (value << 1) | carry_in;
            bus.write(addr_result.address, result)?;
            self.update_zero_and_negative_flags(result);
        }
        Ok(())
    }

    /// ROR - Rotate Right through carry
    ///
    /// Flags affected: C, Z, N
    pub fn ror(
        &mut self,
        bus: &mut CpuBus,
        addr_result: &AddressingResult,
        accumulator: bool,
    ) -> Result<()> {
        let carry_in = if self.get_carry() { 0x80u8 } else { 0 };
        if accumulator {
            self.set_carry(self.a & 0x01 != 0);
            self.a = (self.a >> 1) | carry_in;
            self.update_zero_and_negative_flags(self.a);
        } else {
            let value = bus.read(addr_result.address)?;
            self.set_carry(value & 0x01 != 0);
            let result = (value >> 1) | carry_in;
            bus.write(addr_result.address, result)?;
            self.update_zero_and_negative_flags(result);
        }
        Ok(())
    }
}
