// Cartridge module - iNES ROM parsing and mapper creation
//
// An iNES image is a 16-byte header followed by PRG-ROM and CHR-ROM:
//
// ```text
// 0-3   magic "NES\x1A" (4E 45 53 1A)
// 4     PRG-ROM size in 16KB units
// 5     CHR-ROM size in 8KB units (0 = cartridge uses 8KB CHR-RAM)
// 6     flags6: bit 0 mirroring (0 horizontal, 1 vertical),
//               bits 4-7 low nibble of the mapper number
// 7     flags7: bits 4-7 high nibble of the mapper number
// 8-10  flags8-10 (ignored)
// 11-15 padding, must be zero
// ```

pub mod mappers;

pub use mappers::MapperError;

/// iNES header size in bytes
const HEADER_SIZE: usize = 16;

/// The iNES magic number "NES\x1A"
const MAGIC_NUMBER: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

/// Nametable mirroring arrangement, fixed by the cartridge for NROM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// $2000=$2400 and $2800=$2C00 (vertical scrolling layouts)
    Horizontal,
    /// $2000=$2800 and $2400=$2C00 (horizontal scrolling layouts)
    Vertical,
}

/// Error produced while parsing an iNES image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomParseError {
    /// The image does not start with "NES\x1A"
    InvalidMagicNumber,
    /// The last five header bytes are not zero
    BadPadding,
    /// The buffer is too short for the header-declared PRG/CHR payload
    TruncatedImage,
}

impl std::fmt::Display for RomParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RomParseError::InvalidMagicNumber => write!(f, "invalid iNES magic number"),
            RomParseError::BadPadding => write!(f, "non-zero bytes in iNES header padding"),
            RomParseError::TruncatedImage => {
                write!(f, "image shorter than the header-declared ROM sizes")
            }
        }
    }
}

impl std::error::Error for RomParseError {}

/// Error produced by `Emulator::insert_cartridge`
#[derive(Debug)]
pub enum CartridgeError {
    /// The iNES image could not be parsed
    Rom(RomParseError),
    /// The image parsed but names an unsupported mapper
    Mapper(MapperError),
}

impl std::fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartridgeError::Rom(e) => write!(f, "ROM parse error: {}", e),
            CartridgeError::Mapper(e) => write!(f, "mapper error: {}", e),
        }
    }
}

impl std::error::Error for CartridgeError {}

impl From<RomParseError> for CartridgeError {
    fn from(e: RomParseError) -> Self {
        CartridgeError::Rom(e)
    }
}

impl From<MapperError> for CartridgeError {
    fn from(e: MapperError) -> Self {
        CartridgeError::Mapper(e)
    }
}

/// A parsed cartridge image
///
/// Owns the PRG and CHR payloads; a mapper instance built from this takes
/// ownership of both.
#[derive(Debug)]
pub struct Cartridge {
    /// PRG-ROM data (multiple of 16KB)
    pub prg_rom: Vec<u8>,
    /// CHR-ROM data, or 8KB of zeroed CHR-RAM when the header declares none
    pub chr_rom: Vec<u8>,
    /// Whether the CHR region is writable RAM
    pub chr_is_ram: bool,
    /// iNES mapper number
    pub mapper: u8,
    /// Nametable mirroring from flags6 bit 0
    pub mirroring: Mirroring,
}

impl Cartridge {
    /// Parse an iNES image from a byte buffer
    ///
    /// # Errors
    ///
    /// - `InvalidMagicNumber` if the image does not start with "NES\x1A"
    /// - `BadPadding` if the five reserved header bytes are not zero
    /// - `TruncatedImage` if the buffer cannot hold the declared payload
    ///
    /// # Example
    ///
    /// ```
    /// use famicore::{Cartridge, RomParseError};
    ///
    /// let result = Cartridge::from_ines(&[0x4F, 0x45, 0x53, 0x1A]);
    /// assert_eq!(result.unwrap_err(), RomParseError::InvalidMagicNumber);
    /// ```
    pub fn from_ines(buf: &[u8]) -> Result<Self, RomParseError> {
        if buf.len() < HEADER_SIZE || buf[0..4] != MAGIC_NUMBER {
            return Err(RomParseError::InvalidMagicNumber);
        }

        let prg_banks = buf[4] as usize;
        let chr_banks = buf[5] as usize;
        let flags6 = buf[6];
        let flags7 = buf[7];

        // flags8-10 are skipped; the trailing five bytes must be zero
        if buf[11..16].iter().any(|&b| b != 0) {
            return Err(RomParseError::BadPadding);
        }

        let prg_size = prg_banks * 0x4000;
        let chr_size = chr_banks * 0x2000;
        if buf.len() < HEADER_SIZE + prg_size + chr_size {
            return Err(RomParseError::TruncatedImage);
        }

        let prg_rom = buf[HEADER_SIZE..HEADER_SIZE + prg_size].to_vec();
        let chr_is_ram = chr_banks == 0;
        let chr_rom = if chr_is_ram {
            // CHR bank count 0 means the cartridge carries 8KB of CHR-RAM
            vec![0u8; 0x2000]
        } else {
            buf[HEADER_SIZE + prg_size..HEADER_SIZE + prg_size + chr_size].to_vec()
        };

        Ok(Cartridge {
            prg_rom,
            chr_rom,
            chr_is_ram,
            mapper: (flags6 >> 4) | (flags7 & 0xF0),
            mirroring: if flags6 & 1 == 1 {
                Mirroring::Vertical
            } else {
                Mirroring::Horizontal
            },
        })
    }
}
