// Shared unit-test fixtures
//
// Builds buses around in-memory NROM cartridges so CPU tests can fetch real
// programs through the mapper.

use crate::bus::Bus;
use crate::cartridge::mappers::Mapper0;
use crate::cartridge::{Cartridge, Mirroring};

/// Bus with a 16KB NROM PRG image (mirrored at $C000) and 8KB CHR-RAM
pub(crate) fn bus_with_prg(mut prg: Vec<u8>) -> Bus {
    assert!(prg.len() <= 0x4000, "test PRG images are one 16KB bank");
    prg.resize(0x4000, 0);

    let cartridge = Cartridge {
        prg_rom: prg,
        chr_rom: vec![0; 0x2000],
        chr_is_ram: true,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
    };

    let mut bus = Bus::new();
    bus.insert_mapper(Box::new(Mapper0::new(cartridge)));
    bus
}

/// Bus with `code` placed at `org` and the reset vector pointing at it
pub(crate) fn bus_with_program(code: &[u8], org: u16) -> Bus {
    assert!((0x8000..0xC000).contains(&org), "org must sit in the PRG bank");

    let mut prg = vec![0u8; 0x4000];
    let start = (org - 0x8000) as usize;
    prg[start..start + code.len()].copy_from_slice(code);

    // Reset vector (mirrored into $FFFC on a 16KB board)
    prg[0x3FFC] = (org & 0xFF) as u8;
    prg[0x3FFD] = (org >> 8) as u8;

    bus_with_prg(prg)
}
