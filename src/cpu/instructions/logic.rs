// Logical instructions

use crate::bus::Bus;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// AND - bitwise AND into A. Flags: Z, N
    pub(crate) fn and(&mut self, bus: &mut Bus, operand: u16) {
        self.a &= self.read(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - bitwise exclusive OR into A. Flags: Z, N
    pub(crate) fn eor(&mut self, bus: &mut Bus, operand: u16) {
        self.a ^= self.read(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - bitwise OR into A. Flags: Z, N
    pub(crate) fn ora(&mut self, bus: &mut Bus, operand: u16) {
        self.a |= self.read(bus, operand);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - test bits against A
    ///
    /// Z from A & M; V and N copied from bits 6 and 7 of M itself.
    pub(crate) fn bit(&mut self, bus: &mut Bus, operand: u16) {
        let m = self.read(bus, operand);
        self.set_flag(flags::ZERO, (self.a & m) == 0);
        self.set_flag(flags::OVERFLOW, (m & 0x40) != 0);
        self.set_flag(flags::NEGATIVE, (m & 0x80) != 0);
    }
}
