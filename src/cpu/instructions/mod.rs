// Instructions module for 6502 CPU
// This module organizes CPU instructions by semantic grouping

pub mod arithmetic;
pub mod branch;
pub mod compare;
pub mod flags;
pub mod jump_subroutine;
pub mod load_store;
pub mod logic;
pub mod shift_rotate;
pub mod stack;
pub mod transfer;
pub mod unofficial;

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::error::Result;

impl crate::cpu::Cpu {
    /// Read the operand value for an addressing result
    ///
    /// Immediate and accumulator modes carry their value directly;
    /// everything else goes through the bus.
    #[inline]
    pub(crate) fn read_operand(
        &self,
        bus: &mut CpuBus,
        addr_result: &AddressingResult,
    ) -> Result<u8> {
        if let Some(value) = addr_result.value {
            Ok(value)
        } else {
            bus.read(addr_result.address)
        }
    }
}
