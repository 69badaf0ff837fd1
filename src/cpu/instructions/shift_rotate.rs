// Shift and rotate instructions
//
// Each operation has an accumulator form and a read-modify-write memory
// form. The shared cores set C from the bit shifted out, update Z/N, and
// spend the internal modify cycle; the memory forms add their read and
// write cycles around that.

use crate::bus::Bus;
use crate::cpu::Cpu;

impl Cpu {
    /// ASL - arithmetic shift left. Flags: C, Z, N
    pub(crate) fn asl(&mut self, bus: &mut Bus, operand: u16, accumulator: bool) {
        if accumulator {
            let r = self.shift_left(bus, self.a);
            self.a = r;
        } else {
            let m = self.read(bus, operand);
            let r = self.shift_left(bus, m);
            self.write(bus, operand, r);
        }
    }

    /// LSR - logical shift right. Flags: C, Z, N
    pub(crate) fn lsr(&mut self, bus: &mut Bus, operand: u16, accumulator: bool) {
        if accumulator {
            let r = self.shift_right(bus, self.a);
            self.a = r;
        } else {
            let m = self.read(bus, operand);
            let r = self.shift_right(bus, m);
            self.write(bus, operand, r);
        }
    }

    /// ROL - rotate left through carry. Flags: C, Z, N
    pub(crate) fn rol(&mut self, bus: &mut Bus, operand: u16, accumulator: bool) {
        if accumulator {
            let r = self.rotate_left(bus, self.a);
            self.a = r;
        } else {
            let m = self.read(bus, operand);
            let r = self.rotate_left(bus, m);
            self.write(bus, operand, r);
        }
    }

    /// ROR - rotate right through carry. Flags: C, Z, N
    pub(crate) fn ror(&mut self, bus: &mut Bus, operand: u16, accumulator: bool) {
        if accumulator {
            let r = self.rotate_right(bus, self.a);
            self.a = r;
        } else {
            let m = self.read(bus, operand);
            let r = self.rotate_right(bus, m);
            self.write(bus, operand, r);
        }
    }

    fn shift_left(&mut self, bus: &mut Bus, m: u8) -> u8 {
        self.set_carry(m & 0x80 != 0);
        let r = m << 1;
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
        r
    }

    fn shift_right(&mut self, bus: &mut Bus, m: u8) -> u8 {
        self.set_carry(m & 0x01 != 0);
        let r = m >> 1;
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
        r
    }

    fn rotate_left(&mut self, bus: &mut Bus, m: u8) -> u8 {
        let carry_out = m & 0x80 != 0;
        let mut r = m << 1;
        if self.get_carry() {
            r |= 0x01;
        }
        self.set_carry(carry_out);
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
        r
    }

    fn rotate_right(&mut self, bus: &mut Bus, m: u8) -> u8 {
        let carry_out = m & 0x01 != 0;
        let mut r = m >> 1;
        if self.get_carry() {
            r |= 0x80;
        }
        self.set_carry(carry_out);
        self.update_zero_and_negative_flags(r);
        self.tick(bus);
        r
    }
}
