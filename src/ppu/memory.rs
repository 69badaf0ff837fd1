// PPU address space
//
// ```text
// $0000-$1FFF: pattern tables (cartridge CHR via the mapper)
// $2000-$2FFF: nametables (2KB internal VRAM through mirroring)
// $3000-$3EFF: mirror of $2000-$2EFF
// $3F00-$3FFF: palette RAM (32 bytes, four aliased entries)
// ```

use crate::cartridge::mappers::Mapper;
use crate::cartridge::Mirroring;

use super::Ppu;

impl Ppu {
    /// Fold a logical nametable address onto the 2KB VRAM array
    ///
    /// Horizontal: the two pairs $2000/$2400 and $2800/$2C00 share a bank.
    /// Vertical: $2000/$2800 and $2400/$2C00 share. Without a cartridge the
    /// arrangement defaults to horizontal.
    pub(super) fn nametable_index(&self, mirroring: Option<Mirroring>, addr: u16) -> usize {
        let index = match mirroring.unwrap_or(Mirroring::Horizontal) {
            Mirroring::Horizontal => {
                if addr & 0x0400 == 0 {
                    addr & 0x03FF
                } else {
                    0x0400 + (addr & 0x03FF)
                }
            }
            Mirroring::Vertical => addr & 0x07FF,
        };
        index as usize
    }

    /// Fold a palette address onto the 32-byte palette RAM
    ///
    /// $3F10/$3F14/$3F18/$3F1C alias $3F00/$3F04/$3F08/$3F0C: sprite
    /// palette entry 0 is the shared backdrop color.
    pub(super) fn palette_index(&self, addr: u16) -> usize {
        let index = (addr & 0x001F) as usize;
        if index >= 0x10 && index % 4 == 0 {
            index - 0x10
        } else {
            index
        }
    }

    /// Read from the PPU address space
    pub(super) fn mem_read(&self, mapper: Option<&dyn Mapper>, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => mapper.map_or(0, |m| m.ppu_read(addr)),
            0x2000..=0x2FFF => {
                self.nametables[self.nametable_index(mapper.map(|m| m.mirroring()), addr)]
            }
            0x3000..=0x3EFF => {
                self.nametables[self.nametable_index(mapper.map(|m| m.mirroring()), addr - 0x1000)]
            }
            0x3F00..=0x3FFF => self.palette_ram[self.palette_index(addr)],
            _ => unreachable!(),
        }
    }

    /// Write to the PPU address space
    pub(super) fn mem_write(&mut self, mapper: Option<&mut (dyn Mapper + 'static)>, addr: u16, value: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(m) = mapper {
                    m.ppu_write(addr, value);
                }
            }
            0x2000..=0x2FFF => {
                let index = self.nametable_index(mapper.map(|m| m.mirroring()), addr);
                self.nametables[index] = value;
            }
            0x3000..=0x3EFF => {
                let index = self.nametable_index(mapper.map(|m| m.mirroring()), addr - 0x1000);
                self.nametables[index] = value;
            }
            0x3F00..=0x3FFF => {
                let index = self.palette_index(addr);
                self.palette_ram[index] = value;
            }
            _ => unreachable!(),
        }
    }
}
