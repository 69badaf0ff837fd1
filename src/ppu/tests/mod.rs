// PPU unit tests

mod registers;
mod rendering;

use crate::cartridge::mappers::{Mapper, Mapper0};
use crate::cartridge::{Cartridge, Mirroring};

/// Build an NROM mapper with CHR-RAM so tests can stage pattern data
pub(super) fn chr_ram_mapper() -> Box<dyn Mapper> {
    Box::new(Mapper0::new(Cartridge {
        prg_rom: vec![0; 0x4000],
        chr_rom: vec![0; 0x2000],
        chr_is_ram: true,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
    }))
}

/// Build an NROM mapper with vertical mirroring
pub(super) fn vertical_mapper() -> Box<dyn Mapper> {
    Box::new(Mapper0::new(Cartridge {
        prg_rom: vec![0; 0x4000],
        chr_rom: vec![0; 0x2000],
        chr_is_ram: true,
        mapper: 0,
        mirroring: Mirroring::Vertical,
    }))
}
