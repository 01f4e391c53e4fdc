// Load and Store instructions for 6502 CPU

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub fn lda(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.a = self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub fn ldx(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.x = self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.x);
        Ok(())
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub fn ldy(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        self.y = self.read_operand(bus, addr_result)?;
        self.update_zero_and_negative_flags(self.y);
        Ok(())
    }

    /// STA - Store Accumulator
    pub fn sta(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        bus.write(addr_result.address, self.a)
    }

    /// STX - Store X Register
    pub fn stx(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        bus.write(addr_result.address, self.x)
    }

    /// STY - Store Y Register
    pub fn sty(&mut self, bus: &mut CpuBus, addr_result: &AddressingResult) -> Result<()> {
        bus.write(addr_result.address, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::empty_bus;

    #[test]
    fn test_lda_sets_flags() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();

        cpu.lda(&mut bus, &AddressingResult::immediate(0x00)).unwrap();
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());

        cpu.lda(&mut bus, &AddressingResult::immediate(0x80)).unwrap();
        assert!(cpu.get_negative());
        assert!(!cpu.get_zero());
    }

    #[test]
    fn test_loads_from_memory() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();
        bus.write(0x0010, 0x42).unwrap();

        cpu.lda(&mut bus, &AddressingResult::new(0x0010)).unwrap();
        assert_eq!(cpu.a, 0x42);
        cpu.ldx(&mut bus, &AddressingResult::new(0x0010)).unwrap();
        assert_eq!(cpu.x, 0x42);
        cpu.ldy(&mut bus, &AddressingResult::new(0x0010)).unwrap();
        assert_eq!(cpu.y, 0x42);
    }

    #[test]
    fn test_stores_do_not_touch_flags() {
        let mut cpu = Cpu::new();
        let mut bus = empty_bus();
        cpu.a = 0x00;
        cpu.x = 0x80;
        cpu.y = 0x42;
        cpu.status = 0x24;

        cpu.sta(&mut bus, &AddressingResult::new(0x0010)).unwrap();
        cpu.stx(&mut bus, &AddressingResult::new(0x0011)).unwrap();
        cpu.sty(&mut bus, &AddressingResult::new(0x0012)).unwrap();

        assert_eq!(bus.read(0x0010).unwrap(), 0x00);
        assert_eq!(bus.read(0x0011).unwrap(), 0x80);
        assert_eq!(bus.read(0x0012).unwrap(), 0x42);
        assert_eq!(cpu.status, 0x24);
    }
}
