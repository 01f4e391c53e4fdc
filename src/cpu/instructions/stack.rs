// Stack operation instructions for 6502 CPU
// These instructions handle pushing and pulling values to/from the stack.
//
// PHP pushes the status with the break bit set; PLP and RTI force break
// to 0 and reserved to 1 on the way back, since neither bit physically
// exists in the register.

use crate::bus::CpuBus;
use crate::cpu::Cpu;
use crate::error::Result;

impl Cpu {
    /// PHA - Push Accumulator
    pub fn pha(&mut self, bus: &mut CpuBus) -> Result<()> {
        let a = self.a;
        self.push(bus, a)
    }

    /// PLA - Pull Accumulator
    ///
    /// Flags affected: Z, N
    pub fn pla(&mut self, bus: &mut CpuBus) -> Result<()> {
        self.a = self.pop(bus)?;
        self.update_zero_and_negative_flags(self.a);
        Ok(())
    }

    /// PHP - Push Processor Status (break bit set)
    pub fn php(&mut self, bus: &mut CpuBus) -> Result<()> {
        let status = self.status_for_push(true);
        self.push(bus, status)
    }

    /// PLP - Pull Processor Status
    pub fn plp(&mut self, bus: &mut CpuBus) -> Result<()> {
        let status = self.pop(bus)?;
        self.set_status_from_pull(status);
        Ok(())
    }

    /// TXS - Transfer X to Stack Pointer (no flags)
    pub fn txs(&mut self) {
        self.sp = self.x;
    }

    /// TSX - Transfer Stack Pointer to X
    ///
    /// Flags affected: Z, N
    pub fn tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }
}
