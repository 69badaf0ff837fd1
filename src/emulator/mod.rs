// Emulator module - system coordinator
//
// Owns the CPU and the bus (which in turn owns the PPU, mapper slot,
// controller ports, and frame presenter) and exposes the top-level
// operations: insert a cartridge, power on, reset, step one instruction,
// and run whole frames.

mod config;

pub use config::{ControllerBindings, EmulatorConfig, InputConfig, VideoConfig};

use log::{debug, info};

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::Cpu;
use crate::display::FramePresenter;

/// The emulated console
///
/// Everything is driven from `step`/`run_frame`; there is no background
/// activity. One CPU instruction advances the PPU by three dots per CPU
/// cycle through the bus.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
}

impl Emulator {
    /// Create an emulator that delivers frames to `presenter`
    ///
    /// # Example
    ///
    /// ```
    /// use famicore::{Emulator, NullPresenter};
    ///
    /// let emulator = Emulator::new(Box::new(NullPresenter));
    /// ```
    pub fn new(presenter: Box<dyn FramePresenter>) -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::with_presenter(presenter),
            config: EmulatorConfig::load_or_default(),
        }
    }

    /// Parse an iNES image and install its mapper
    ///
    /// # Errors
    ///
    /// `CartridgeError::Rom` when the image fails to parse,
    /// `CartridgeError::Mapper` when it names an unsupported mapper. In
    /// both cases no cartridge is inserted and the system refuses to step.
    pub fn insert_cartridge(&mut self, image: &[u8]) -> Result<(), CartridgeError> {
        let cartridge = Cartridge::from_ines(image)?;
        info!(
            "cartridge: mapper {}, PRG {}KB, CHR {}KB{}, {:?} mirroring",
            cartridge.mapper,
            cartridge.prg_rom.len() / 1024,
            cartridge.chr_rom.len() / 1024,
            if cartridge.chr_is_ram { " (RAM)" } else { "" },
            cartridge.mirroring,
        );
        let mapper = create_mapper(cartridge)?;
        self.bus.insert_mapper(mapper);
        Ok(())
    }

    /// Run the power-up sequence for the CPU and PPU
    ///
    /// CPU: A/X/Y = 0, SP = 0xFD, P = 0x34, plus the two I/O clear writes
    /// through the bus. PPU: registers cleared, status cleared.
    pub fn power_on(&mut self) {
        self.bus.ppu_mut().power_on();
        self.cpu.power_on(&mut self.bus);
    }

    /// Simulate the reset button
    ///
    /// Loads PC from $FFFC, drops SP by 3, sets the I flag, and resets the
    /// PPU's writable registers.
    pub fn reset(&mut self) {
        self.bus.ppu_mut().reset();
        self.cpu.reset(&mut self.bus);
        debug!("reset: PC = {:#06X}", self.cpu.pc);
    }

    /// Execute one CPU instruction (and the PPU dots it triggers)
    ///
    /// Without a cartridge there is nothing to fetch, so this is a no-op.
    pub fn step(&mut self) {
        if !self.bus.has_cartridge() {
            return;
        }
        self.cpu.step(&mut self.bus);
    }

    /// Run until the PPU completes the current frame
    pub fn run_frame(&mut self) {
        if !self.bus.has_cartridge() {
            return;
        }
        let frames = self.bus.ppu().frames();
        while self.bus.ppu().frames() == frames {
            self.cpu.step(&mut self.bus);
        }
    }

    // ========================================
    // Controllers
    // ========================================

    /// Latch a button mask into controller port 1 (see `input::buttons`)
    pub fn update_controller1(&mut self, buttons: u8) {
        self.bus.update_controller1(buttons);
    }

    /// Latch a button mask into controller port 2
    pub fn update_controller2(&mut self, buttons: u8) {
        self.bus.update_controller2(buttons);
    }

    // ========================================
    // Component Access
    // ========================================

    /// Shared access to the CPU
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable access to the CPU (test setup, debuggers)
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Shared access to the bus
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable access to the bus
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Shared access to the configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Mutable access to the configuration
    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }
}
