// Stack instructions
//
// PHP pushes P with bits 4-5 set; PLP pulls P with bit 4 discarded and bit
// 5 forced set. Those two bits have no storage inside the CPU and only
// exist on stacked copies.

use crate::bus::Bus;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// PHA - push accumulator. 3 cycles
    pub(crate) fn pha(&mut self, bus: &mut Bus) {
        self.push(bus, self.a);
        self.tick(bus);
    }

    /// PHP - push processor status with both B bits set. 3 cycles
    pub(crate) fn php(&mut self, bus: &mut Bus) {
        self.push(bus, self.status | flags::INSTRUCTION_B);
        self.tick(bus);
    }

    /// PLA - pull accumulator. Flags: Z, N. 4 cycles
    pub(crate) fn pla(&mut self, bus: &mut Bus) {
        self.a = self.pull(bus);
        self.update_zero_and_negative_flags(self.a);
        self.tick(bus);
        self.tick(bus);
    }

    /// PLP - pull processor status, masking the stacked B bits. 4 cycles
    pub(crate) fn plp(&mut self, bus: &mut Bus) {
        let pulled = self.pull(bus);
        self.status = (pulled & !flags::INSTRUCTION_B) | flags::UNUSED;
        self.tick(bus);
        self.tick(bus);
    }
}
