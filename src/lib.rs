// famicore - NES emulator core
// Cycle-accurate CPU/PPU emulation with an NROM cartridge interface

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeError, Mirroring, RomParseError};
pub use cartridge::mappers::{create_mapper, Mapper, MapperError};
pub use cpu::{Cpu, Interrupt};
pub use display::{FramePresenter, NullPresenter, FRAME_HEIGHT, FRAME_WIDTH};
pub use emulator::{Emulator, EmulatorConfig};
pub use input::{Controller, StandardController};
pub use ppu::Ppu;
pub use ram::Ram;
