// Logic instructions for 6502 CPU

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// AND - Bitwise AND with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn and(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.a &= self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// ORA - Bitwise OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn ora(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.a |= self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// EOR - Bitwise Exclusive OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn eor(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.a ^= self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::empty_bus;

    #[test]
    fn test_and() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();
        cpu.a = 0xF0;

        cpu.and(&mut bus, &AddressingResult::immediate(0x0F)).unwrap();
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_ora() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();
        cpu.a = 0xF0;

        cpu.ora(&mut bus, &AddressingResult::immediate(0x0F)).unwrap();
        assert_eq!(cpu.a, 0xFF);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_eor() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();
        cpu.a = 0xFF;

        cpu.eor(&mut bus, &AddressingResult::immediate(0x0F)).unwrap();
        assert_eq!(cpu.a, 0xF0);
        assert!(cpu.get_negative());
        assert!(!cpu.get_zero());
    }
}
