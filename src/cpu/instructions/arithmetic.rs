// Arithmetic instructions

use crate::bus::Bus;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// ADC - add with carry
    ///
    /// A = A + M + C. Flags: C, Z, V, N.
    pub(crate) fn adc(&mut self, bus: &mut Bus, operand: u16) {
        let m = self.read(bus, operand);
        self.add_to_accumulator(m);
    }

    /// SBC - subtract with carry
    ///
    /// A = A - M - (1 - C), computed as A + !M + C. Flags: C, Z, V, N.
    pub(crate) fn sbc(&mut self, bus: &mut Bus, operand: u16) {
        let m = !self.read(bus, operand);
        self.add_to_accumulator(m);
    }

    /// Shared ADC/SBC core: A += m + C with the carry/overflow derivation
    ///
    /// The carry chain is reconstructed bit by bit:
    /// c6 = a7 ^ m7 ^ r7, c7 = (a7 & m7) | (a7 & c6) | (m7 & c6),
    /// then C = c7 and V = c6 ^ c7.
    pub(crate) fn add_to_accumulator(&mut self, m: u8) {
        let mut r = self.a.wrapping_add(m);
        if self.get_carry() {
            r = r.wrapping_add(1);
        }

        let a7 = (self.a >> 7) & 1;
        let m7 = (m >> 7) & 1;
        let c6 = a7 ^ m7 ^ ((r >> 7) & 1);
        let c7 = (a7 & m7) | (a7 & c6) | (m7 & c6);
        self.set_carry(c7 == 1);
        self.set_flag(flags::OVERFLOW, (c6 ^ c7) == 1);

        self.a = r;
        self.update_zero_and_negative_flags(self.a);
    }

    /// INC - increment memory. Flags: Z, N
    pub(crate) fn inc(&mut self, bus: &mut Bus, operand: u16) {
        let r = self.read(bus, operand).wrapping_add(1);
        self.write(bus, operand, r);
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
    }

    /// DEC - decrement memory. Flags: Z, N
    pub(crate) fn dec(&mut self, bus: &mut Bus, operand: u16) {
        let r = self.read(bus, operand).wrapping_sub(1);
        self.write(bus, operand, r);
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
    }

    /// INX - increment X. Flags: Z, N
    pub(crate) fn inx(&mut self, bus: &mut Bus) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
        self.tick(bus);
    }

    /// INY - increment Y. Flags: Z, N
    pub(crate) fn iny(&mut self, bus: &mut Bus) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
        self.tick(bus);
    }

    /// DEX - decrement X. Flags: Z, N
    pub(crate) fn dex(&mut self, bus: &mut Bus) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
        self.tick(bus);
    }

    /// DEY - decrement Y. Flags: Z, N
    pub(crate) fn dey(&mut self, bus: &mut Bus) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
        self.tick(bus);
    }
}
