// Bus module - CPU-visible memory map
//
// The bus owns everything the CPU can reach: work RAM, the PPU, the two
// controller ports, the mapper slot, the shared interrupt line, and the
// frame presenter. It also carries time: `tick` advances the PPU by exactly
// three dots, and the CPU calls it once per bus access.
//
// # CPU Memory Map
//
// ```text
// $0000-$1FFF: 2KB work RAM, mirrored 4x
// $2000-$3FFF: PPU registers, mirrored every 8 bytes
// $4014:       OAM DMA trigger (the CPU sequences the transfer)
// $4016:       controller port 1 (read serial / write strobe)
// $4017:       controller port 2 (read serial; writes go to the APU
//              frame counter, out of scope here)
// $4000-$401F: remaining APU and I/O space (reads 0, writes absorbed)
// $4020-$FFFF: cartridge via the mapper
// ```

use crate::cartridge::mappers::Mapper;
use crate::cpu::Interrupt;
use crate::display::{FramePresenter, NullPresenter};
use crate::input::{Controller, StandardController};
use crate::ppu::Ppu;
use crate::ram::Ram;

/// The system bus
pub struct Bus {
    ram: Ram,
    ppu: Ppu,
    mapper: Option<Box<dyn Mapper>>,
    controller1: Box<dyn Controller>,
    controller2: Box<dyn Controller>,
    presenter: Box<dyn FramePresenter>,
    interrupt: Interrupt,
}

impl Bus {
    /// Create a bus with standard controllers and a discarding presenter
    pub fn new() -> Self {
        Self::with_presenter(Box::new(NullPresenter))
    }

    /// Create a bus that hands completed frames to `presenter`
    pub fn with_presenter(presenter: Box<dyn FramePresenter>) -> Self {
        Bus {
            ram: Ram::new(),
            ppu: Ppu::new(),
            mapper: None,
            controller1: Box::new(StandardController::new()),
            controller2: Box::new(StandardController::new()),
            presenter,
            interrupt: Interrupt::None,
        }
    }

    // ========================================
    // Time
    // ========================================

    /// Advance one CPU cycle's worth of PPU time: three dots
    ///
    /// The post-render hand-off surfaces here, so the presenter sees every
    /// frame no matter which instruction was executing at that dot.
    pub fn tick(&mut self) {
        for _ in 0..3 {
            let frame_ready = self.ppu.step(self.mapper.as_deref_mut(), &mut self.interrupt);
            if frame_ready {
                self.presenter.update_frame(self.ppu.frame());
            }
        }
    }

    // ========================================
    // CPU Access
    // ========================================

    /// Read one byte from the CPU address space
    ///
    /// PPU register and controller reads have side effects; use [`peek`]
    /// for inspection.
    ///
    /// [`peek`]: Bus::peek
    pub fn read(&mut self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => {
                let register = 0x2000 | (addr & 0x0007);
                self.ppu.read_register(register, self.mapper.as_deref())
            }
            0x4016 => self.controller1.read(),
            0x4017 => self.controller2.read(),
            0x4000..=0x401F => 0,
            0x4020..=0xFFFF => self.mapper.as_deref().map_or(0, |m| m.cpu_read(addr)),
        }
    }

    /// Write one byte to the CPU address space
    ///
    /// A $4014 write is decoded here but inert: the CPU sequences the OAM
    /// DMA transfer itself, because the 513/514-cycle cost depends on its
    /// cycle parity.
    pub fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write(addr, data),
            0x2000..=0x3FFF => {
                let register = 0x2000 | (addr & 0x0007);
                self.ppu.write_register(register, data, self.mapper.as_deref_mut());
            }
            0x4014 => {}
            0x4016 => {
                // One strobe line feeds both ports
                self.controller1.write(data);
                self.controller2.write(data);
            }
            0x4000..=0x401F => {}
            0x4020..=0xFFFF => {
                if let Some(mapper) = self.mapper.as_deref_mut() {
                    mapper.cpu_write(addr, data);
                }
            }
        }
    }

    /// Side-effect-free read for tracing and disassembly
    ///
    /// PPU registers report the data-bus latch instead of running their
    /// read logic, so a trace cannot clear VBlank or advance v.
    pub fn peek(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram.read(addr),
            0x2000..=0x3FFF => self.ppu.cpu_data_bus,
            0x4000..=0x401F => 0,
            0x4020..=0xFFFF => self.mapper.as_deref().map_or(0, |m| m.cpu_read(addr)),
        }
    }

    // ========================================
    // Interrupt Line
    // ========================================

    /// Current state of the shared interrupt line
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt
    }

    /// Assert an interrupt (PPU NMI, or a mapper IRQ once one exists)
    pub fn set_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupt = interrupt;
    }

    /// Drop the line after the CPU services it
    pub fn clear_interrupt(&mut self) {
        self.interrupt = Interrupt::None;
    }

    // ========================================
    // Component Access
    // ========================================

    /// Install a mapper; replaces any previous cartridge
    pub fn insert_mapper(&mut self, mapper: Box<dyn Mapper>) {
        self.mapper = Some(mapper);
    }

    /// Whether a cartridge is present
    pub fn has_cartridge(&self) -> bool {
        self.mapper.is_some()
    }

    /// Plug a device into controller port 1
    pub fn connect_controller1(&mut self, controller: Box<dyn Controller>) {
        self.controller1 = controller;
    }

    /// Plug a device into controller port 2
    pub fn connect_controller2(&mut self, controller: Box<dyn Controller>) {
        self.controller2 = controller;
    }

    /// Latch host-side button state into port 1
    pub fn update_controller1(&mut self, buttons: u8) {
        self.controller1.update(buttons);
    }

    /// Latch host-side button state into port 2
    pub fn update_controller2(&mut self, buttons: u8) {
        self.controller2.update(buttons);
    }

    /// Shared access to the PPU
    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Mutable access to the PPU
    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Bus {
    fn drop(&mut self) {
        self.presenter.clean_up();
    }
}
