// Opcode table for the 6502
//
// One row per opcode byte: mnemonic, addressing mode, instruction size in
// bytes, base cycle count, and whether a crossed page boundary costs an
// extra cycle. Store instructions carry their worst-case timing in the
// base count instead of the penalty flag.
//
// Rows with an empty mnemonic are unassigned: the stop opcodes and the
// unstable arithmetic hybrids. Executing one is an error. The widely-used
// unofficial opcodes (LAX, SAX, DCP, ISC, SLO, RLA, SRE, RRA, the extra
// NOP shapes and the $EB SBC alias) have regular rows.
//
// Reference: http://www.6502.org/tutorials/6502opcodes.html

use super::addressing::AddressingMode;
use AddressingMode::*;

/// One row of the opcode table
pub struct OpcodeInfo {
    /// Three-letter mnemonic; empty for unassigned opcodes
    pub mnemonic: &'static str,

    /// Addressing mode used to resolve the operand
    pub mode: AddressingMode,

    /// Instruction size in bytes (opcode + operands)
    pub bytes: u16,

    /// Base cycle count
    pub cycles: u8,

    /// Crossing a page during operand resolution adds one cycle
    pub page_cycle: bool,
}

const fn op(
    mnemonic: &'static str,
    mode: AddressingMode,
    bytes: u16,
    cycles: u8,
    page_cycle: bool,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle,
    }
}

/// An unassigned opcode; executing it raises an unknown-opcode error
const fn none() -> OpcodeInfo {
    op("", Implied, 1, 0, false)
}

/// The 256-entry opcode table, indexed by opcode byte
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    op("BRK", Implied, 1, 7, false),         // 0x00
    op("ORA", IndexedIndirect, 2, 6, false), // 0x01
    none(),                                  // 0x02
    op("SLO", IndexedIndirect, 2, 8, false), // 0x03
    op("NOP", ZeroPage, 2, 3, false),        // 0x04
    op("ORA", ZeroPage, 2, 3, false),        // 0x05
    op("ASL", ZeroPage, 2, 5, false),        // 0x06
    op("SLO", ZeroPage, 2, 5, false),        // 0x07
    op("PHP", Implied, 1, 3, false),         // 0x08
    op("ORA", Immediate, 2, 2, false),       // 0x09
    op("ASL", Accumulator, 1, 2, false),     // 0x0A
    none(),                                  // 0x0B
    op("NOP", Absolute, 3, 4, false),        // 0x0C
    op("ORA", Absolute, 3, 4, false),        // 0x0D
    op("ASL", Absolute, 3, 6, false),        // 0x0E
    op("SLO", Absolute, 3, 6, false),        // 0x0F
    op("BPL", Relative, 2, 2, false),        // 0x10
    op("ORA", IndirectIndexed, 2, 5, true),  // 0x11
    none(),                                  // 0x12
    op("SLO", IndirectIndexed, 2, 8, false), // 0x13
    op("NOP", ZeroPageX, 2, 4, false),       // 0x14
    op("ORA", ZeroPageX, 2, 4, false),       // 0x15
    op("ASL", ZeroPageX, 2, 6, false),       // 0x16
    op("SLO", ZeroPageX, 2, 6, false),       // 0x17
    op("CLC", Implied, 1, 2, false),         // 0x18
    op("ORA", AbsoluteY, 3, 4, true),        // 0x19
    op("NOP", Implied, 1, 2, false),         // 0x1A
    op("SLO", AbsoluteY, 3, 7, false),       // 0x1B
    op("NOP", AbsoluteX, 3, 4, true),        // 0x1C
    op("ORA", AbsoluteX, 3, 4, true),        // 0x1D
    op("ASL", AbsoluteX, 3, 7, false),       // 0x1E
    op("SLO", AbsoluteX, 3, 7, false),       // 0x1F
    op("JSR", Absolute, 3, 6, false),        // 0x20
    op("AND", IndexedIndirect, 2, 6, false), // 0x21
    none(),                                  // 0x22
    op("RLA", IndexedIndirect, 2, 8, false), // 0x23
    op("BIT", ZeroPage, 2, 3, false),        // 0x24
    op("AND", ZeroPage, 2, 3, false),        // 0x25
    op("ROL", ZeroPage, 2, 5, false),        // 0x26
    op("RLA", ZeroPage, 2, 5, false),        // 0x27
    op("PLP", Implied, 1, 4, false),         // 0x28
    op("AND", Immediate, 2, 2, false),       // 0x29
    op("ROL", Accumulator, 1, 2, false),     // 0x2A
    none(),                                  // 0x2B
    op("BIT", Absolute, 3, 4, false),        // 0x2C
    op("AND", Absolute, 3, 4, false),        // 0x2D
    op("ROL", Absolute, 3, 6, false),        // 0x2E
    op("RLA", Absolute, 3, 6, false),        // 0x2F
    op("BMI", Relative, 2, 2, false),        // 0x30
    op("AND", IndirectIndexed, 2, 5, true),  // 0x31
    none(),                                  // 0x32
    op("RLA", IndirectIndexed, 2, 8, false), // 0x33
    op("NOP", ZeroPageX, 2, 4, false),       // 0x34
    op("AND", ZeroPageX, 2, 4, false),       // 0x35
    op("ROL", ZeroPageX, 2, 6, false),       // 0x36
    op("RLA", ZeroPageX, 2, 6, false),       // 0x37
    op("SEC", Implied, 1, 2, false),         // 0x38
    op("AND", AbsoluteY, 3, 4, true),        // 0x39
    op("NOP", Implied, 1, 2, false),         // 0x3A
    op("RLA", AbsoluteY, 3, 7, false),       // 0x3B
    op("NOP", AbsoluteX, 3, 4, true),        // 0x3C
    op("AND", AbsoluteX, 3, 4, true),        // 0x3D
    op("ROL", AbsoluteX, 3, 7, false),       // 0x3E
    op("RLA", AbsoluteX, 3, 7, false),       // 0x3F
    op("RTI", Implied, 1, 6, false),         // 0x40
    op("EOR", IndexedIndirect, 2, 6, false), // 0x41
    none(),                                  // 0x42
    op("SRE", IndexedIndirect, 2, 8, false), // 0x43
    op("NOP", ZeroPage, 2, 3, false),        // 0x44
    op("EOR", ZeroPage, 2, 3, false),        // 0x45
    op("LSR", ZeroPage, 2, 5, false),        // 0x46
    op("SRE", ZeroPage, 2, 5, false),        // 0x47
    op("PHA", Implied, 1, 3, false),         // 0x48
    op("EOR", Immediate, 2, 2, false),       // 0x49
    op("LSR", Accumulator, 1, 2, false),     // 0x4A
    none(),                                  // 0x4B
    op("JMP", Absolute, 3, 3, false),        // 0x4C
    op("EOR", Absolute, 3, 4, false),        // 0x4D
    op("LSR", Absolute, 3, 6, false),        // 0x4E
    op("SRE", Absolute, 3, 6, false),        // 0x4F
    op("BVC", Relative, 2, 2, false),        // 0x50
    op("EOR", IndirectIndexed, 2, 5, true),  // 0x51
    none(),                                  // 0x52
    op("SRE", IndirectIndexed, 2, 8, false), // 0x53
    op("NOP", ZeroPageX, 2, 4, false),       // 0x54
    op("EOR", ZeroPageX, 2, 4, false),       // 0x55
    op("LSR", ZeroPageX, 2, 6, false),       // 0x56
    op("SRE", ZeroPageX, 2, 6, false),       // 0x57
    op("CLI", Implied, 1, 2, false),         // 0x58
    op("EOR", AbsoluteY, 3, 4, true),        // 0x59
    op("NOP", Implied, 1, 2, false),         // 0x5A
    op("SRE", AbsoluteY, 3, 7, false),       // 0x5B
    op("NOP", AbsoluteX, 3, 4, true),        // 0x5C
    op("EOR", AbsoluteX, 3, 4, true),        // 0x5D
    op("LSR", AbsoluteX, 3, 7, false),       // 0x5E
    op("SRE", AbsoluteX, 3, 7, false),       // 0x5F
    op("RTS", Implied, 1, 6, false),         // 0x60
    op("ADC", IndexedIndirect, 2, 6, false), // 0x61
    none(),                                  // 0x62
    op("RRA", IndexedIndirect, 2, 8, false), // 0x63
    op("NOP", ZeroPage, 2, 3, false),        // 0x64
    op("ADC", ZeroPage, 2, 3, false),        // 0x65
    op("ROR", ZeroPage, 2, 5, false),        // 0x66
    op("RRA", ZeroPage, 2, 5, false),        // 0x67
    op("PLA", Implied, 1, 4, false),         // 0x68
    op("ADC", Immediate, 2, 2, false),       // 0x69
    op("ROR", Accumulator, 1, 2, false),     // 0x6A
    none(),                                  // 0x6B
    op("JMP", Indirect, 3, 5, false),        // 0x6C
    op("ADC", Absolute, 3, 4, false),        // 0x6D
    op("ROR", Absolute, 3, 6, false),        // 0x6E
    op("RRA", Absolute, 3, 6, false),        // 0x6F
    op("BVS", Relative, 2, 2, false),        // 0x70
    op("ADC", IndirectIndexed, 2, 5, true),  // 0x71
    none(),                                  // 0x72
    op("RRA", IndirectIndexed, 2, 8, false), // 0x73
    op("NOP", ZeroPageX, 2, 4, false),       // 0x74
    op("ADC", ZeroPageX, 2, 4, false),       // 0x75
    op("ROR", ZeroPageX, 2, 6, false),       // 0x76
    op("RRA", ZeroPageX, 2, 6, false),       // 0x77
    op("SEI", Implied, 1, 2, false),         // 0x78
    op("ADC", AbsoluteY, 3, 4, true),        // 0x79
    op("NOP", Implied, 1, 2, false),         // 0x7A
    op("RRA", AbsoluteY, 3, 7, false),       // 0x7B
    op("NOP", AbsoluteX, 3, 4, true),        // 0x7C
    op("ADC", AbsoluteX, 3, 4, true),        // 0x7D
    op("ROR", AbsoluteX, 3, 7, false),       // 0x7E
    op("RRA", AbsoluteX, 3, 7, false),       // 0x7F
    op("NOP", Immediate, 2, 2, false),       // 0x80
    op("STA", IndexedIndirect, 2, 6, false), // 0x81
    op("NOP", Immediate, 2, 2, false),       // 0x82
    op("SAX", IndexedIndirect, 2, 6, false), // 0x83
    op("STY", ZeroPage, 2, 3, false),        // 0x84
    op("STA", ZeroPage, 2, 3, false),        // 0x85
    op("STX", ZeroPage, 2, 3, false),        // 0x86
    op("SAX", ZeroPage, 2, 3, false),        // 0x87
    op("DEY", Implied, 1, 2, false),         // 0x88
    op("NOP", Immediate, 2, 2, false),       // 0x89
    op("TXA", Implied, 1, 2, false),         // 0x8A
    none(),                                  // 0x8B
    op("STY", Absolute, 3, 4, false),        // 0x8C
    op("STA", Absolute, 3, 4, false),        // 0x8D
    op("STX", Absolute, 3, 4, false),        // 0x8E
    op("SAX", Absolute, 3, 4, false),        // 0x8F
    op("BCC", Relative, 2, 2, false),        // 0x90
    op("STA", IndirectIndexed, 2, 6, false), // 0x91
    none(),                                  // 0x92
    none(),                                  // 0x93
    op("STY", ZeroPageX, 2, 4, false),       // 0x94
    op("STA", ZeroPageX, 2, 4, false),       // 0x95
    op("STX", ZeroPageY, 2, 4, false),       // 0x96
    op("SAX", ZeroPageY, 2, 4, false),       // 0x97
    op("TYA", Implied, 1, 2, false),         // 0x98
    op("STA", AbsoluteY, 3, 5, false),       // 0x99
    op("TXS", Implied, 1, 2, false),         // 0x9A
    none(),                                  // 0x9B
    none(),                                  // 0x9C
    op("STA", AbsoluteX, 3, 5, false),       // 0x9D
    none(),                                  // 0x9E
    none(),                                  // 0x9F
    op("LDY", Immediate, 2, 2, false),       // 0xA0
    op("LDA", IndexedIndirect, 2, 6, false), // 0xA1
    op("LDX", Immediate, 2, 2, false),       // 0xA2
    op("LAX", IndexedIndirect, 2, 6, false), // 0xA3
    op("LDY", ZeroPage, 2, 3, false),        // 0xA4
    op("LDA", ZeroPage, 2, 3, false),        // 0xA5
    op("LDX", ZeroPage, 2, 3, false),        // 0xA6
    op("LAX", ZeroPage, 2, 3, false),        // 0xA7
    op("TAY", Implied, 1, 2, false),         // 0xA8
    op("LDA", Immediate, 2, 2, false),       // 0xA9
    op("TAX", Implied, 1, 2, false),         // 0xAA
    none(),                                  // 0xAB
    op("LDY", Absolute, 3, 4, false),        // 0xAC
    op("LDA", Absolute, 3, 4, false),        // 0xAD
    op("LDX", Absolute, 3, 4, false),        // 0xAE
    op("LAX", Absolute, 3, 4, false),        // 0xAF
    op("BCS", Relative, 2, 2, false),        // 0xB0
    op("LDA", IndirectIndexed, 2, 5, true),  // 0xB1
    none(),                                  // 0xB2
    op("LAX", IndirectIndexed, 2, 5, true),  // 0xB3
    op("LDY", ZeroPageX, 2, 4, false),       // 0xB4
    op("LDA", ZeroPageX, 2, 4, false),       // 0xB5
    op("LDX", ZeroPageY, 2, 4, false),       // 0xB6
    op("LAX", ZeroPageY, 2, 4, false),       // 0xB7
    op("CLV", Implied, 1, 2, false),         // 0xB8
    op("LDA", AbsoluteY, 3, 4, true),        // 0xB9
    op("TSX", Implied, 1, 2, false),         // 0xBA
    none(),                                  // 0xBB
    op("LDY", AbsoluteX, 3, 4, true),        // 0xBC
    op("LDA", AbsoluteX, 3, 4, true),        // 0xBD
    op("LDX", AbsoluteY, 3, 4, true),        // 0xBE
    op("LAX", AbsoluteY, 3, 4, true),        // 0xBF
    op("CPY", Immediate, 2, 2, false),       // 0xC0
    op("CMP", IndexedIndirect, 2, 6, false), // 0xC1
    op("NOP", Immediate, 2, 2, false),       // 0xC2
    op("DCP", IndexedIndirect, 2, 8, false), // 0xC3
    op("CPY", ZeroPage, 2, 3, false),        // 0xC4
    op("CMP", ZeroPage, 2, 3, false),        // 0xC5
    op("DEC", ZeroPage, 2, 5, false),        // 0xC6
    op("DCP", ZeroPage, 2, 5, false),        // 0xC7
    op("INY", Implied, 1, 2, false),         // 0xC8
    op("CMP", Immediate, 2, 2, false),       // 0xC9
    op("DEX", Implied, 1, 2, false),         // 0xCA
    none(),                                  // 0xCB
    op("CPY", Absolute, 3, 4, false),        // 0xCC
    op("CMP", Absolute, 3, 4, false),        // 0xCD
    op("DEC", Absolute, 3, 6, false),        // 0xCE
    op("DCP", Absolute, 3, 6, false),        // 0xCF
    op("BNE", Relative, 2, 2, false),        // 0xD0
    op("CMP", IndirectIndexed, 2, 5, true),  // 0xD1
    none(),                                  // 0xD2
    op("DCP", IndirectIndexed, 2, 8, false), // 0xD3
    op("NOP", ZeroPageX, 2, 4, false),       // 0xD4
    op("CMP", ZeroPageX, 2, 4, false),       // 0xD5
    op("DEC", ZeroPageX, 2, 6, false),       // 0xD6
    op("DCP", ZeroPageX, 2, 6, false),       // 0xD7
    op("CLD", Implied, 1, 2, false),         // 0xD8
    op("CMP", AbsoluteY, 3, 4, true),        // 0xD9
    op("NOP", Implied, 1, 2, false),         // 0xDA
    op("DCP", AbsoluteY, 3, 7, false),       // 0xDB
    op("NOP", AbsoluteX, 3, 4, true),        // 0xDC
    op("CMP", AbsoluteX, 3, 4, true),        // 0xDD
    op("DEC", AbsoluteX, 3, 7, false),       // 0xDE
    op("DCP", AbsoluteX, 3, 7, false),       // 0xDF
    op("CPX", Immediate, 2, 2, false),       // 0xE0
    op("SBC", IndexedIndirect, 2, 6, false), // 0xE1
    op("NOP", Immediate, 2, 2, false),       // 0xE2
    op("ISC", IndexedIndirect, 2, 8, false), // 0xE3
    op("CPX", ZeroPage, 2, 3, false),        // 0xE4
    op("SBC", ZeroPage, 2, 3, false),        // 0xE5
    op("INC", ZeroPage, 2, 5, false),        // 0xE6
    op("ISC", ZeroPage, 2, 5, false),        // 0xE7
    op("INX", Implied, 1, 2, false),         // 0xE8
    op("SBC", Immediate, 2, 2, false),       // 0xE9
    op("NOP", Implied, 1, 2, false),         // 0xEA
    op("SBC", Immediate, 2, 2, false),       // 0xEB
    op("CPX", Absolute, 3, 4, false),        // 0xEC
    op("SBC", Absolute, 3, 4, false),        // 0xED
    op("INC", Absolute, 3, 6, false),        // 0xEE
    op("ISC", Absolute, 3, 6, false),        // 0xEF
    op("BEQ", Relative, 2, 2, false),        // 0xF0
    op("SBC", IndirectIndexed, 2, 5, true),  // 0xF1
    none(),                                  // 0xF2
    op("ISC", IndirectIndexed, 2, 8, false), // 0xF3
    op("NOP", ZeroPageX, 2, 4, false),       // 0xF4
    op("SBC", ZeroPageX, 2, 4, false),       // 0xF5
    op("INC", ZeroPageX, 2, 6, false),       // 0xF6
    op("ISC", ZeroPageX, 2, 6, false),       // 0xF7
    op("SED", Implied, 1, 2, false),         // 0xF8
    op("SBC", AbsoluteY, 3, 4, true),        // 0xF9
    op("NOP", Implied, 1, 2, false),         // 0xFA
    op("ISC", AbsoluteY, 3, 7, false),       // 0xFB
    op("NOP", AbsoluteX, 3, 4, true),        // 0xFC
    op("SBC", AbsoluteX, 3, 4, true),        // 0xFD
    op("INC", AbsoluteX, 3, 7, false),       // 0xFE
    op("ISC", AbsoluteX, 3, 7, false),       // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_256_opcodes() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn test_known_rows() {
        let lda_imm = &OPCODE_TABLE[0xA9];
        assert_eq!(lda_imm.mnemonic, "LDA");
        assert_eq!(lda_imm.mode, Immediate);
        assert_eq!(lda_imm.bytes, 2);
        assert_eq!(lda_imm.cycles, 2);

        let brk = &OPCODE_TABLE[0x00];
        assert_eq!(brk.mnemonic, "BRK");
        assert_eq!(brk.cycles, 7);

        let jmp_ind = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp_ind.mode, Indirect);
        assert_eq!(jmp_ind.cycles, 5);
    }

    #[test]
    fn test_stores_use_worst_case_timing_without_page_penalty() {
        for opcode in [0x99u8, 0x9D] {
            let row = &OPCODE_TABLE[opcode as usize];
            assert_eq!(row.mnemonic, "STA");
            assert_eq!(row.cycles, 5);
            assert!(!row.page_cycle);
        }
        let sta_izy = &OPCODE_TABLE[0x91];
        assert_eq!(sta_izy.cycles, 6);
        assert!(!sta_izy.page_cycle);
    }

    #[test]
    fn test_read_indexed_rows_take_page_penalty() {
        for opcode in [0xBDu8, 0xB9, 0xB1, 0xBE, 0xBC] {
            assert!(OPCODE_TABLE[opcode as usize].page_cycle, "{:02X}", opcode);
        }
    }

    #[test]
    fn test_stop_opcodes_are_unassigned() {
        for opcode in [
            0x02u8, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2,
        ] {
            assert!(
                OPCODE_TABLE[opcode as usize].mnemonic.is_empty(),
                "{:02X}",
                opcode
            );
        }
    }

    #[test]
    fn test_unofficial_rows_are_assigned() {
        for (opcode, mnemonic) in [
            (0xA7u8, "LAX"),
            (0x87, "SAX"),
            (0xC7, "DCP"),
            (0xE7, "ISC"),
            (0x07, "SLO"),
            (0x27, "RLA"),
            (0x47, "SRE"),
            (0x67, "RRA"),
            (0xEB, "SBC"),
        ] {
            assert_eq!(OPCODE_TABLE[opcode as usize].mnemonic, mnemonic);
        }
    }
}
