// Arithmetic instructions for 6502 CPU

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    // ========================================
    // Add / Subtract
    // ========================================

    /// ADC - Add with Carry
    ///
    /// A = A + M + C. The overflow flag is set exactly when both operands
    /// share a sign and the result does not:
    /// `(A^M) & 0x80 == 0 && (A^result) & 0x80 != 0`.
    ///
    /// Flags affected: C, Z, V, N
    pub fn adc(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let value = self.read_operand(bus, addr_result)?;
        self.add_with_carry(value);
        Ok(())
    }

    /// SBC - Subtract with Carry
    ///
    /// Computed as A + !M + C; carry set means no borrow occurred. The
    /// result byte is always written to A, and overflow follows the ADC
    /// rule with the complemented operand.
    ///
    /// Flags affected: C, Z, V, N
    pub fn sbc(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let value = self.read_operand(bus, addr_result)?;
        self.subtract_with_carry(value);
        Ok(())
    }

    /// Shared ADC core, also used by the RRA composite
    pub(crate) fn add_with_carry(&mut self, value: u8) {
        let carry = if self.get_carry() { 1u16 } else { 0 };
        let sum = self.a as u16 + value as u16 + carry;
        let result = sum as u8;

        self.set_carry(sum > 0xFF);
        self.set_overflow((self.a ^ value) & 0x80 == 0 && (self.a ^ result) & 0x80 != 0);
        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// Shared SBC core, also used by the ISC composite
    pub(crate) fn subtract_with_carry(&mut self, value: u8) {
        self.add_with_carry(!value);
    }

    // ========================================
    // Memory increment / decrement
    // ========================================

    /// INC - Increment Memory
    ///
    /// Flags affected: Z, N
    pub fn inc(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let result = bus.read(addr_result.address)?.wrapping_add(1);
        bus.write(addr_result.address, result)?;
        self.update_zero_and_negative_flags(result);
        Ok(())
    }

    /// DEC - Decrement Memory
    ///
    /// Flags affected: Z, N
    pub fn dec(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        let result = bus.read(addr_result.address)?.wrapping_sub(1);
        bus.write(addr_result.address, result)?;
        self.update_zero_and_negative_flags(result);
        Ok(())
    }

    // ========================================
    // Register increment / decrement
    // ========================================

    /// INX - Increment X Register
    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - Increment Y Register
    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - Decrement X Register
    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - Decrement Y Register
    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
