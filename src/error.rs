// Error types shared by every component of the emulation core
//
// Each bus operation and each CPU/PPU step returns a Result carrying one of
// these kinds. The console bubbles errors up to the host, which treats them
// as fatal; the only "soft" failures are the APU/unused-IO accesses, which
// the CPU bus accepts and info-logs instead of surfacing here.

use std::fmt;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NesError>;

/// Error kinds produced by the emulation core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NesError {
    /// The ROM buffer does not start with a valid iNES header
    InvalidFormat,

    /// The cartridge requests a mapper outside the implemented set
    UnsupportedMapper(u8),

    /// A CPU or PPU address with no defined target was accessed
    IllegalBusAccess { addr: u16 },

    /// A region known to the memory map but not modeled (cartridge RAM
    /// at $6000-$7FFF)
    NotImplemented { addr: u16 },

    /// An opcode byte with no entry in the instruction table
    UnknownOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for NesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NesError::InvalidFormat => {
                write!(f, "the buffer is not a valid iNES image")
            }
            NesError::UnsupportedMapper(number) => {
                write!(f, "mapper {} is not supported", number)
            }
            NesError::IllegalBusAccess { addr } => {
                write!(f, "illegal bus access at ${:04X}", addr)
            }
            NesError::NotImplemented { addr } => {
                write!(f, "access to unimplemented region at ${:04X}", addr)
            }
            NesError::UnknownOpcode { opcode, pc } => {
                write!(f, "unknown opcode ${:02X} at ${:04X}", opcode, pc)
            }
        }
    }
}

impl std::error::Error for NesError {}
