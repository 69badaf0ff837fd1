// Common test utilities for system-level integration tests
//
// Builds iNES images in memory so the tests run without ROM files on disk.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use famicore::{Emulator, FramePresenter, NullPresenter};

/// Assemble a complete iNES image from a 16KB PRG bank
///
/// `flags6`/`flags7` land in the header verbatim; one 8KB CHR bank of
/// zeroes is appended.
pub fn build_ines(mut prg: Vec<u8>, flags6: u8, flags7: u8) -> Vec<u8> {
    assert!(prg.len() <= 0x4000);
    prg.resize(0x4000, 0);

    let mut image = Vec::with_capacity(16 + 0x4000 + 0x2000);
    image.extend_from_slice(&[0x4E, 0x45, 0x53, 0x1A]);
    image.push(1); // PRG banks
    image.push(1); // CHR banks
    image.push(flags6);
    image.push(flags7);
    image.extend_from_slice(&[0; 8]);
    image.extend_from_slice(&prg);
    image.extend_from_slice(&[0; 0x2000]);
    image
}

/// Image with `code` at `org` and the reset vector pointing there
pub fn program_image(code: &[u8], org: u16) -> Vec<u8> {
    assert!((0x8000..0xC000).contains(&org));

    let mut prg = vec![0u8; 0x4000];
    let start = (org - 0x8000) as usize;
    prg[start..start + code.len()].copy_from_slice(code);
    prg[0x3FFC] = (org & 0xFF) as u8;
    prg[0x3FFD] = (org >> 8) as u8;

    build_ines(prg, 0, 0)
}

/// Powered-on emulator running `code` from `org`
pub fn emulator_with_program(code: &[u8], org: u16) -> Emulator {
    let mut emulator = Emulator::new(Box::new(NullPresenter));
    emulator
        .insert_cartridge(&program_image(code, org))
        .expect("test image must parse");
    emulator.power_on();
    emulator.reset();
    emulator
}

/// Presenter that counts hand-offs and keeps the last frame
pub struct CapturePresenter {
    frames: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl CapturePresenter {
    pub fn new() -> (Self, Rc<RefCell<Vec<Vec<u8>>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        (
            CapturePresenter {
                frames: Rc::clone(&frames),
            },
            frames,
        )
    }
}

impl FramePresenter for CapturePresenter {
    fn update_frame(&mut self, frame: &[u8]) {
        self.frames.borrow_mut().push(frame.to_vec());
    }
}
