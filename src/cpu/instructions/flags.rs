// Flag manipulation instructions for 6502 CPU
// These instructions directly set or clear specific processor status flags.
//
// Decimal mode does not exist on the NES variant of the 6502, but the D
// flag itself is still settable and observable.

use crate::cpu::Cpu;

impl Cpu {
    /// CLC - Clear Carry
    pub fn clc(&mut self) {
        self.set_carry(false);
    }

    /// SEC - Set Carry
    pub fn sec(&mut self) {
        self.set_carry(true);
    }

    /// CLI - Clear Interrupt Disable
    pub fn cli(&mut self) {
        self.set_interrupt_disable(false);
    }

    /// SEI - Set Interrupt Disable
    pub fn sei(&mut self) {
        self.set_interrupt_disable(true);
    }

    /// CLV - Clear Overflow
    pub fn clv(&mut self) {
        self.set_overflow(false);
    }

    /// CLD - Clear Decimal
    pub fn cld(&mut self) {
        self.set_decimal(false);
    }

    /// SED - Set Decimal
    pub fn sed(&mut self) {
        self.set_decimal(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_pair() {
        let mut cpu = Cpu::new();
        cpu.sec();
        assert!(cpu.get_carry());
        cpu.clc();
        assert!(!cpu.get_carry());
    }

    #[test]
    fn test_interrupt_disable_pair() {
        let mut cpu = Cpu::new();
        cpu.cli();
        assert!(!cpu.get_interrupt_disable());
        cpu.sei();
        assert!(cpu.get_interrupt_disable());
    }

    #[test]
    fn test_decimal_flag_is_settable_but_inert() {
        let mut cpu = Cpu::new();
        cpu.sed();
        assert!(cpu.get_decimal());
        cpu.cld();
        assert!(!cpu.get_decimal());
    }

    #[test]
    fn test_clv() {
        let mut cpu = Cpu::new();
        cpu.set_overflow(true);
        cpu.clv();
        assert!(!cpu.get_overflow());
    }
}
