// CPU execution - fetch, decode, execute, and trace logging

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::{decode, instruction_length, Instruction, Mnemonic};
use crate::cpu::{flags, vectors, Cpu};

impl Cpu {
    /// Execute one instruction
    ///
    /// Observes the interrupt line first, then fetches, decodes, and
    /// executes. Cycle accounting happens entirely through the bus
    /// primitives, so the counter advances exactly as the reference tables
    /// document for each (mnemonic, mode) pair.
    pub fn step(&mut self, bus: &mut Bus) {
        self.handle_interrupt(bus);

        let opcode = self.read(bus, self.pc);
        self.pc = self.pc.wrapping_add(1);

        let inst = decode(opcode);
        self.execute(bus, inst);
    }

    /// Execute a decoded instruction against its resolved operand
    fn execute(&mut self, bus: &mut Bus, inst: Instruction) {
        let operand = self.get_operand(bus, inst.mode);
        let accumulator = inst.mode == AddressingMode::Accumulator;

        match inst.mnemonic {
            // Load/store
            Mnemonic::Lda => self.lda(bus, operand),
            Mnemonic::Ldx => self.ldx(bus, operand),
            Mnemonic::Ldy => self.ldy(bus, operand),
            Mnemonic::Sta => self.sta(bus, operand),
            Mnemonic::Stx => self.stx(bus, operand),
            Mnemonic::Sty => self.sty(bus, operand),

            // Transfers
            Mnemonic::Tax => self.tax(bus),
            Mnemonic::Tay => self.tay(bus),
            Mnemonic::Txa => self.txa(bus),
            Mnemonic::Tya => self.tya(bus),
            Mnemonic::Tsx => self.tsx(bus),
            Mnemonic::Txs => self.txs(bus),

            // Stack
            Mnemonic::Pha => self.pha(bus),
            Mnemonic::Php => self.php(bus),
            Mnemonic::Pla => self.pla(bus),
            Mnemonic::Plp => self.plp(bus),

            // Logic
            Mnemonic::And => self.and(bus, operand),
            Mnemonic::Eor => self.eor(bus, operand),
            Mnemonic::Ora => self.ora(bus, operand),
            Mnemonic::Bit => self.bit(bus, operand),

            // Arithmetic
            Mnemonic::Adc => self.adc(bus, operand),
            Mnemonic::Sbc => self.sbc(bus, operand),
            Mnemonic::Cmp => self.cmp(bus, operand),
            Mnemonic::Cpx => self.cpx(bus, operand),
            Mnemonic::Cpy => self.cpy(bus, operand),
            Mnemonic::Inc => self.inc(bus, operand),
            Mnemonic::Inx => self.inx(bus),
            Mnemonic::Iny => self.iny(bus),
            Mnemonic::Dec => self.dec(bus, operand),
            Mnemonic::Dex => self.dex(bus),
            Mnemonic::Dey => self.dey(bus),

            // Shifts and rotates
            Mnemonic::Asl => self.asl(bus, operand, accumulator),
            Mnemonic::Lsr => self.lsr(bus, operand, accumulator),
            Mnemonic::Rol => self.rol(bus, operand, accumulator),
            Mnemonic::Ror => self.ror(bus, operand, accumulator),

            // Jumps and subroutines
            Mnemonic::Jmp => self.jmp(operand),
            Mnemonic::Jsr => self.jsr(bus, operand),
            Mnemonic::Rts => self.rts(bus),

            // Branches
            Mnemonic::Bcc => self.bcc(bus, operand),
            Mnemonic::Bcs => self.bcs(bus, operand),
            Mnemonic::Beq => self.beq(bus, operand),
            Mnemonic::Bmi => self.bmi(bus, operand),
            Mnemonic::Bne => self.bne(bus, operand),
            Mnemonic::Bpl => self.bpl(bus, operand),
            Mnemonic::Bvc => self.bvc(bus, operand),
            Mnemonic::Bvs => self.bvs(bus, operand),

            // Flag operations
            Mnemonic::Clc => self.set_flag_op(bus, flags::CARRY, false),
            Mnemonic::Cld => self.set_flag_op(bus, flags::DECIMAL, false),
            Mnemonic::Cli => self.set_flag_op(bus, flags::INTERRUPT_DISABLE, false),
            Mnemonic::Clv => self.set_flag_op(bus, flags::OVERFLOW, false),
            Mnemonic::Sec => self.set_flag_op(bus, flags::CARRY, true),
            Mnemonic::Sed => self.set_flag_op(bus, flags::DECIMAL, true),
            Mnemonic::Sei => self.set_flag_op(bus, flags::INTERRUPT_DISABLE, true),

            // Interrupt-flavored instructions
            Mnemonic::Brk => self.brk(bus),
            Mnemonic::Rti => self.rti(bus),
            Mnemonic::Nop => self.nop(bus),

            // Unofficial opcodes
            Mnemonic::Lax => self.lax(bus, operand),
            Mnemonic::Sax => self.sax(bus, operand),
            Mnemonic::Dcp => self.dcp(bus, operand),
            Mnemonic::Isb => self.isb(bus, operand),
            Mnemonic::Slo => self.slo(bus, operand),
            Mnemonic::Rla => self.rla(bus, operand),
            Mnemonic::Sre => self.sre(bus, operand),
            Mnemonic::Rra => self.rra(bus, operand),
        }
    }

    /// BRK - software interrupt
    ///
    /// Pushes PC+1 (BRK carries a padding byte), pushes P with bits 4-5
    /// set, sets I, and vectors through $FFFE. 7 cycles, like IRQ.
    fn brk(&mut self, bus: &mut Bus) {
        self.push_word(bus, self.pc.wrapping_add(1));
        self.push(bus, self.status | flags::INSTRUCTION_B);
        self.set_flag(flags::INTERRUPT_DISABLE, true);
        self.pc = self.read_word(bus, vectors::IRQ);
        self.tick(bus);
    }

    /// RTI - return from interrupt
    ///
    /// Pulls P (bit 4 discarded, bit 5 forced) and then PC.
    fn rti(&mut self, bus: &mut Bus) {
        let pulled = self.pull(bus);
        self.status = (pulled & !flags::INSTRUCTION_B) | flags::UNUSED;
        self.pc = self.pull_word(bus);
        self.tick(bus);
        self.tick(bus);
    }

    /// NOP - one internal cycle
    ///
    /// The unofficial multi-byte forms get their extra cycles from operand
    /// resolution, so a single internal tick covers every variant.
    fn nop(&mut self, bus: &mut Bus) {
        self.tick(bus);
    }

    /// CLx/SEx - set or clear one flag, one internal cycle
    fn set_flag_op(&mut self, bus: &mut Bus, flag: u8, value: bool) {
        self.set_flag(flag, value);
        self.tick(bus);
    }

    // ========================================
    // Trace Logging
    // ========================================

    /// Produce one nestest-format trace line for the next instruction
    ///
    /// Reads go through `Bus::peek`, so tracing never perturbs PPU or
    /// controller state. Format:
    ///
    /// ```text
    /// C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD CYC:7
    /// ```
    pub fn trace(&self, bus: &Bus) -> String {
        let pc = self.pc;
        let opcode = bus.peek(pc);
        let inst = decode(opcode);
        let length = instruction_length(inst.mode);

        let byte2 = if length >= 2 { bus.peek(pc.wrapping_add(1)) } else { 0 };
        let byte3 = if length >= 3 { bus.peek(pc.wrapping_add(2)) } else { 0 };

        let hex_bytes = match length {
            2 => format!("{:02X} {:02X}   ", opcode, byte2),
            3 => format!("{:02X} {:02X} {:02X}", opcode, byte2, byte3),
            _ => format!("{:02X}      ", opcode),
        };

        let disassembly = self.disassemble(bus, pc, inst, byte2, byte3);

        format!(
            "{:04X}  {}  {:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, hex_bytes, disassembly, self.a, self.x, self.y, self.status, self.sp, self.cycles
        )
    }

    /// Disassemble one instruction into nestest's operand notation
    fn disassemble(&self, bus: &Bus, pc: u16, inst: Instruction, byte2: u8, byte3: u8) -> String {
        let mnemonic = inst.mnemonic.name();

        match inst.mode {
            AddressingMode::Implicit => mnemonic.to_string(),
            AddressingMode::Accumulator => format!("{} A", mnemonic),
            AddressingMode::Immediate => format!("{} #${:02X}", mnemonic, byte2),
            AddressingMode::ZeroPage => {
                let value = bus.peek(byte2 as u16);
                format!("{} ${:02X} = {:02X}", mnemonic, byte2, value)
            }
            AddressingMode::ZeroPageX => {
                let addr = byte2.wrapping_add(self.x);
                let value = bus.peek(addr as u16);
                format!("{} ${:02X},X @ {:02X} = {:02X}", mnemonic, byte2, addr, value)
            }
            AddressingMode::ZeroPageY => {
                let addr = byte2.wrapping_add(self.y);
                let value = bus.peek(addr as u16);
                format!("{} ${:02X},Y @ {:02X} = {:02X}", mnemonic, byte2, addr, value)
            }
            AddressingMode::Relative => {
                let offset = byte2 as i8;
                let target = pc.wrapping_add(2).wrapping_add(offset as u16);
                format!("{} ${:04X}", mnemonic, target)
            }
            AddressingMode::Absolute => {
                let addr = u16::from_le_bytes([byte2, byte3]);
                if matches!(inst.mnemonic, Mnemonic::Jmp | Mnemonic::Jsr) {
                    format!("{} ${:04X}", mnemonic, addr)
                } else {
                    format!("{} ${:04X} = {:02X}", mnemonic, addr, bus.peek(addr))
                }
            }
            AddressingMode::AbsoluteX | AddressingMode::AbsoluteXWithPenalty => {
                let base = u16::from_le_bytes([byte2, byte3]);
                let addr = base.wrapping_add(self.x as u16);
                format!("{} ${:04X},X @ {:04X} = {:02X}", mnemonic, base, addr, bus.peek(addr))
            }
            AddressingMode::AbsoluteY | AddressingMode::AbsoluteYWithPenalty => {
                let base = u16::from_le_bytes([byte2, byte3]);
                let addr = base.wrapping_add(self.y as u16);
                format!("{} ${:04X},Y @ {:04X} = {:02X}", mnemonic, base, addr, bus.peek(addr))
            }
            AddressingMode::Indirect => {
                let ptr = u16::from_le_bytes([byte2, byte3]);
                let lo = bus.peek(ptr);
                let hi = bus.peek((ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF));
                let target = u16::from_le_bytes([lo, hi]);
                format!("{} (${:04X}) = {:04X}", mnemonic, ptr, target)
            }
            AddressingMode::IndexedIndirect => {
                let ptr = byte2.wrapping_add(self.x);
                let lo = bus.peek(ptr as u16);
                let hi = bus.peek(ptr.wrapping_add(1) as u16);
                let addr = u16::from_le_bytes([lo, hi]);
                format!(
                    "{} (${:02X},X) @ {:02X} = {:04X} = {:02X}",
                    mnemonic, byte2, ptr, addr, bus.peek(addr)
                )
            }
            AddressingMode::IndirectIndexed | AddressingMode::IndirectIndexedWithPenalty => {
                let lo = bus.peek(byte2 as u16);
                let hi = bus.peek(byte2.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([lo, hi]);
                let addr = base.wrapping_add(self.y as u16);
                format!(
                    "{} (${:02X}),Y = {:04X} @ {:04X} = {:02X}",
                    mnemonic, byte2, base, addr, bus.peek(addr)
                )
            }
        }
    }
}
