// Opcode decode table for the 6502 CPU
//
// Maps each of the 256 opcode bytes to a (mnemonic, addressing mode) pair.
// All 151 official opcodes are present, together with the unofficial
// opcodes test ROMs rely on (LAX, SAX, DCP, ISB, SLO, RLA, SRE, RRA, the
// extra NOP forms, and the $EB SBC alias). Anything else decodes to an
// implicit NOP that still consumes its cycles.

use super::addressing::AddressingMode;

/// Instruction mnemonics, official and unofficial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    // Unofficial
    Lax, Sax, Dcp, Isb, Slo, Rla, Sre, Rra,
}

impl Mnemonic {
    /// Three-letter assembler name, used by the trace disassembler
    pub fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC", Mnemonic::And => "AND", Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC", Mnemonic::Bcs => "BCS", Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT", Mnemonic::Bmi => "BMI", Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL", Mnemonic::Brk => "BRK", Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS", Mnemonic::Clc => "CLC", Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI", Mnemonic::Clv => "CLV", Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX", Mnemonic::Cpy => "CPY", Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX", Mnemonic::Dey => "DEY", Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC", Mnemonic::Inx => "INX", Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP", Mnemonic::Jsr => "JSR", Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX", Mnemonic::Ldy => "LDY", Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP", Mnemonic::Ora => "ORA", Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP", Mnemonic::Pla => "PLA", Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL", Mnemonic::Ror => "ROR", Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS", Mnemonic::Sbc => "SBC", Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED", Mnemonic::Sei => "SEI", Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX", Mnemonic::Sty => "STY", Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY", Mnemonic::Tsx => "TSX", Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS", Mnemonic::Tya => "TYA", Mnemonic::Lax => "LAX",
            Mnemonic::Sax => "SAX", Mnemonic::Dcp => "DCP", Mnemonic::Isb => "ISB",
            Mnemonic::Slo => "SLO", Mnemonic::Rla => "RLA", Mnemonic::Sre => "SRE",
            Mnemonic::Rra => "RRA",
        }
    }
}

/// A decoded instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

/// Total instruction length in bytes for one addressing mode
///
/// Used by the trace disassembler to pull operand bytes without executing.
pub fn instruction_length(mode: AddressingMode) -> u8 {
    use AddressingMode::*;
    match mode {
        Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndexedIndirect
        | IndirectIndexed | IndirectIndexedWithPenalty => 2,
        Indirect | Absolute | AbsoluteX | AbsoluteXWithPenalty | AbsoluteY
        | AbsoluteYWithPenalty => 3,
        Implicit | Accumulator => 1,
    }
}

/// Decode one opcode byte
pub fn decode(opcode: u8) -> Instruction {
    use AddressingMode::*;
    use Mnemonic::*;

    let (mnemonic, mode) = match opcode {
        0x69 => (Adc, Immediate),
        0x65 => (Adc, ZeroPage),
        0x75 => (Adc, ZeroPageX),
        0x6D => (Adc, Absolute),
        0x7D => (Adc, AbsoluteXWithPenalty),
        0x79 => (Adc, AbsoluteYWithPenalty),
        0x61 => (Adc, IndexedIndirect),
        0x71 => (Adc, IndirectIndexedWithPenalty),

        0x29 => (And, Immediate),
        0x25 => (And, ZeroPage),
        0x35 => (And, ZeroPageX),
        0x2D => (And, Absolute),
        0x3D => (And, AbsoluteXWithPenalty),
        0x39 => (And, AbsoluteYWithPenalty),
        0x21 => (And, IndexedIndirect),
        0x31 => (And, IndirectIndexedWithPenalty),

        0x0A => (Asl, Accumulator),
        0x06 => (Asl, ZeroPage),
        0x16 => (Asl, ZeroPageX),
        0x0E => (Asl, Absolute),
        0x1E => (Asl, AbsoluteX),

        0x90 => (Bcc, Relative),
        0xB0 => (Bcs, Relative),
        0xF0 => (Beq, Relative),

        0x24 => (Bit, ZeroPage),
        0x2C => (Bit, Absolute),

        0x30 => (Bmi, Relative),
        0xD0 => (Bne, Relative),
        0x10 => (Bpl, Relative),

        0x00 => (Brk, Implicit),

        0x50 => (Bvc, Relative),
        0x70 => (Bvs, Relative),

        0x18 => (Clc, Implicit),
        0xD8 => (Cld, Implicit),
        0x58 => (Cli, Implicit),
        0xB8 => (Clv, Implicit),

        0xC9 => (Cmp, Immediate),
        0xC5 => (Cmp, ZeroPage),
        0xD5 => (Cmp, ZeroPageX),
        0xCD => (Cmp, Absolute),
        0xDD => (Cmp, AbsoluteXWithPenalty),
        0xD9 => (Cmp, AbsoluteYWithPenalty),
        0xC1 => (Cmp, IndexedIndirect),
        0xD1 => (Cmp, IndirectIndexedWithPenalty),

        0xE0 => (Cpx, Immediate),
        0xE4 => (Cpx, ZeroPage),
        0xEC => (Cpx, Absolute),
        0xC0 => (Cpy, Immediate),
        0xC4 => (Cpy, ZeroPage),
        0xCC => (Cpy, Absolute),

        0xC6 => (Dec, ZeroPage),
        0xD6 => (Dec, ZeroPageX),
        0xCE => (Dec, Absolute),
        0xDE => (Dec, AbsoluteX),

        0xCA => (Dex, Implicit),
        0x88 => (Dey, Implicit),

        0x49 => (Eor, Immediate),
        0x45 => (Eor, ZeroPage),
        0x55 => (Eor, ZeroPageX),
        0x4D => (Eor, Absolute),
        0x5D => (Eor, AbsoluteXWithPenalty),
        0x59 => (Eor, AbsoluteYWithPenalty),
        0x41 => (Eor, IndexedIndirect),
        0x51 => (Eor, IndirectIndexedWithPenalty),

        0xE6 => (Inc, ZeroPage),
        0xF6 => (Inc, ZeroPageX),
        0xEE => (Inc, Absolute),
        0xFE => (Inc, AbsoluteX),

        0xE8 => (Inx, Implicit),
        0xC8 => (Iny, Implicit),

        0x4C => (Jmp, Absolute),
        0x6C => (Jmp, Indirect),

        0x20 => (Jsr, Absolute),

        0xA9 => (Lda, Immediate),
        0xA5 => (Lda, ZeroPage),
        0xB5 => (Lda, ZeroPageX),
        0xAD => (Lda, Absolute),
        0xBD => (Lda, AbsoluteXWithPenalty),
        0xB9 => (Lda, AbsoluteYWithPenalty),
        0xA1 => (Lda, IndexedIndirect),
        0xB1 => (Lda, IndirectIndexedWithPenalty),

        0xA2 => (Ldx, Immediate),
        0xA6 => (Ldx, ZeroPage),
        0xB6 => (Ldx, ZeroPageY),
        0xAE => (Ldx, Absolute),
        0xBE => (Ldx, AbsoluteYWithPenalty),

        0xA0 => (Ldy, Immediate),
        0xA4 => (Ldy, ZeroPage),
        0xB4 => (Ldy, ZeroPageX),
        0xAC => (Ldy, Absolute),
        0xBC => (Ldy, AbsoluteXWithPenalty),

        0x4A => (Lsr, Accumulator),
        0x46 => (Lsr, ZeroPage),
        0x56 => (Lsr, ZeroPageX),
        0x4E => (Lsr, Absolute),
        0x5E => (Lsr, AbsoluteX),

        0x09 => (Ora, Immediate),
        0x05 => (Ora, ZeroPage),
        0x15 => (Ora, ZeroPageX),
        0x0D => (Ora, Absolute),
        0x1D => (Ora, AbsoluteXWithPenalty),
        0x19 => (Ora, AbsoluteYWithPenalty),
        0x01 => (Ora, IndexedIndirect),
        0x11 => (Ora, IndirectIndexedWithPenalty),

        0x48 => (Pha, Implicit),
        0x08 => (Php, Implicit),
        0x68 => (Pla, Implicit),
        0x28 => (Plp, Implicit),

        0x2A => (Rol, Accumulator),
        0x26 => (Rol, ZeroPage),
        0x36 => (Rol, ZeroPageX),
        0x2E => (Rol, Absolute),
        0x3E => (Rol, AbsoluteX),

        0x6A => (Ror, Accumulator),
        0x66 => (Ror, ZeroPage),
        0x76 => (Ror, ZeroPageX),
        0x6E => (Ror, Absolute),
        0x7E => (Ror, AbsoluteX),

        0x40 => (Rti, Implicit),
        0x60 => (Rts, Implicit),

        0xE9 => (Sbc, Immediate),
        0xE5 => (Sbc, ZeroPage),
        0xF5 => (Sbc, ZeroPageX),
        0xED => (Sbc, Absolute),
        0xFD => (Sbc, AbsoluteXWithPenalty),
        0xF9 => (Sbc, AbsoluteYWithPenalty),
        0xE1 => (Sbc, IndexedIndirect),
        0xF1 => (Sbc, IndirectIndexedWithPenalty),

        0x38 => (Sec, Implicit),
        0xF8 => (Sed, Implicit),
        0x78 => (Sei, Implicit),

        0x85 => (Sta, ZeroPage),
        0x95 => (Sta, ZeroPageX),
        0x8D => (Sta, Absolute),
        0x9D => (Sta, AbsoluteX),
        0x99 => (Sta, AbsoluteY),
        0x81 => (Sta, IndexedIndirect),
        0x91 => (Sta, IndirectIndexed),

        0x86 => (Stx, ZeroPage),
        0x96 => (Stx, ZeroPageY),
        0x8E => (Stx, Absolute),
        0x84 => (Sty, ZeroPage),
        0x94 => (Sty, ZeroPageX),
        0x8C => (Sty, Absolute),

        0xAA => (Tax, Implicit),
        0xA8 => (Tay, Implicit),
        0xBA => (Tsx, Implicit),
        0x8A => (Txa, Implicit),
        0x9A => (Txs, Implicit),
        0x98 => (Tya, Implicit),

        // Unofficial NOP forms: consume operand fetches like real reads
        0x04 | 0x44 | 0x64 => (Nop, ZeroPage),
        0x0C => (Nop, Absolute),
        0x14 | 0x34 | 0x54 | 0x74 | 0xD4 | 0xF4 => (Nop, ZeroPageX),
        0x1A | 0x3A | 0x5A | 0x7A | 0xDA | 0xEA | 0xFA => (Nop, Implicit),
        0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => (Nop, AbsoluteXWithPenalty),
        0x80 | 0x82 | 0x89 | 0xC2 | 0xE2 => (Nop, Immediate),

        // Unofficial SBC alias
        0xEB => (Sbc, Immediate),

        0xA3 => (Lax, IndexedIndirect),
        0xA7 => (Lax, ZeroPage),
        0xAB => (Lax, Immediate),
        0xAF => (Lax, Absolute),
        0xB3 => (Lax, IndirectIndexedWithPenalty),
        0xB7 => (Lax, ZeroPageY),
        0xBF => (Lax, AbsoluteYWithPenalty),

        0x83 => (Sax, IndexedIndirect),
        0x87 => (Sax, ZeroPage),
        0x8F => (Sax, Absolute),
        0x97 => (Sax, ZeroPageY),

        0xC3 => (Dcp, IndexedIndirect),
        0xC7 => (Dcp, ZeroPage),
        0xCF => (Dcp, Absolute),
        0xD3 => (Dcp, IndirectIndexed),
        0xD7 => (Dcp, ZeroPageX),
        0xDB => (Dcp, AbsoluteY),
        0xDF => (Dcp, AbsoluteX),

        0xE3 => (Isb, IndexedIndirect),
        0xE7 => (Isb, ZeroPage),
        0xEF => (Isb, Absolute),
        0xF3 => (Isb, IndirectIndexed),
        0xF7 => (Isb, ZeroPageX),
        0xFB => (Isb, AbsoluteY),
        0xFF => (Isb, AbsoluteX),

        0x03 => (Slo, IndexedIndirect),
        0x07 => (Slo, ZeroPage),
        0x0F => (Slo, Absolute),
        0x13 => (Slo, IndirectIndexed),
        0x17 => (Slo, ZeroPageX),
        0x1B => (Slo, AbsoluteY),
        0x1F => (Slo, AbsoluteX),

        0x23 => (Rla, IndexedIndirect),
        0x27 => (Rla, ZeroPage),
        0x2F => (Rla, Absolute),
        0x33 => (Rla, IndirectIndexed),
        0x37 => (Rla, ZeroPageX),
        0x3B => (Rla, AbsoluteY),
        0x3F => (Rla, AbsoluteX),

        0x43 => (Sre, IndexedIndirect),
        0x47 => (Sre, ZeroPage),
        0x4F => (Sre, Absolute),
        0x53 => (Sre, IndirectIndexed),
        0x57 => (Sre, ZeroPageX),
        0x5B => (Sre, AbsoluteY),
        0x5F => (Sre, AbsoluteX),

        0x63 => (Rra, IndexedIndirect),
        0x67 => (Rra, ZeroPage),
        0x6F => (Rra, Absolute),
        0x73 => (Rra, IndirectIndexed),
        0x77 => (Rra, ZeroPageX),
        0x7B => (Rra, AbsoluteY),
        0x7F => (Rra, AbsoluteX),

        // Every remaining opcode behaves as a one-byte NOP
        _ => (Nop, Implicit),
    };

    Instruction { mnemonic, mode }
}
