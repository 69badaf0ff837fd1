// Mappers module - cartridge address translation and banking
//
// This module contains the mapper capability set, the mapper factory, and
// the individual mapper implementations. Each mapper translates CPU and PPU
// cartridge-region addresses onto PRG/CHR storage and reports the nametable
// mirroring arrangement.

mod mapper0;

use super::{Cartridge, Mirroring};
pub use mapper0::Mapper0;

/// Error type for mapper creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "Mapper {} is not supported", num)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Cartridge capability set
///
/// The CPU sees the cartridge through `cpu_read`/`cpu_write` at
/// $4020-$FFFF; the PPU sees the pattern tables through
/// `ppu_read`/`ppu_write` at $0000-$1FFF. Addresses outside a mapper's
/// decoded ranges read as 0 and absorb writes. Adding a mapper means
/// implementing this trait and registering it in [`create_mapper`]; the CPU
/// and PPU never change.
pub trait Mapper {
    /// Read from CPU cartridge space ($4020-$FFFF)
    fn cpu_read(&self, addr: u16) -> u8;

    /// Write to CPU cartridge space (bank switching on mappers that have it)
    fn cpu_write(&mut self, addr: u16, value: u8);

    /// Read from PPU pattern-table space ($0000-$1FFF)
    fn ppu_read(&self, addr: u16) -> u8;

    /// Write to PPU pattern-table space (meaningful for CHR-RAM)
    fn ppu_write(&mut self, addr: u16, value: u8);

    /// Nametable mirroring arrangement
    fn mirroring(&self) -> Mirroring;

    /// iNES mapper number
    fn mapper_number(&self) -> u8;
}

/// Create a mapper instance for a parsed cartridge
///
/// # Errors
///
/// Returns `MapperError::UnsupportedMapper` for mapper numbers without an
/// implementation. This is the only point where an unsupported cartridge can
/// surface; once a mapper exists, every access is defined.
///
/// # Example
///
/// ```no_run
/// use famicore::{Cartridge, create_mapper};
///
/// let image = std::fs::read("game.nes").unwrap();
/// let cartridge = Cartridge::from_ines(&image).unwrap();
/// let mapper = create_mapper(cartridge).unwrap();
/// assert_eq!(mapper.mapper_number(), 0);
/// ```
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper {
        0 => Ok(Box::new(Mapper0::new(cartridge))),
        mapper_num => Err(MapperError::UnsupportedMapper(mapper_num)),
    }
}
