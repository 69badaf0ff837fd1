// PPU rendering benchmarks

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use famicore::ppu::constants::{mask, DOTS_PER_LINE, LINES_PER_FRAME};
use famicore::{Emulator, NullPresenter};

/// iNES image with rendering switched on and a busy nametable
fn rendering_image() -> Vec<u8> {
    // Enable background + sprites, then spin
    // LDA #$1E; STA $2001; loop: JMP loop
    let program: &[u8] = &[0xA9, 0x1E, 0x8D, 0x01, 0x20, 0x4C, 0x05, 0x80];

    let mut prg = vec![0u8; 0x4000];
    prg[..program.len()].copy_from_slice(program);
    prg[0x3FFC] = 0x00;
    prg[0x3FFD] = 0x80;

    let mut image = vec![0x4E, 0x45, 0x53, 0x1A, 1, 1, 0, 0];
    image.extend_from_slice(&[0; 8]);
    image.extend_from_slice(&prg);
    // CHR with a non-trivial pattern so fetches shift real data
    let mut chr = vec![0u8; 0x2000];
    for (i, byte) in chr.iter_mut().enumerate() {
        *byte = (i as u8).wrapping_mul(31);
    }
    image.extend_from_slice(&chr);
    image
}

fn bench_frame_rendering(c: &mut Criterion) {
    c.bench_function("ppu_full_frame", |b| {
        b.iter_batched(
            || {
                let mut emulator = Emulator::new(Box::new(NullPresenter));
                emulator.insert_cartridge(&rendering_image()).unwrap();
                emulator.power_on();
                emulator.reset();
                // Get past the setup instructions so the mask is active
                emulator.step();
                emulator.step();
                emulator
            },
            |mut emulator| {
                emulator.run_frame();
                black_box(emulator.bus().ppu().frames())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_raw_dot_stepping(c: &mut Criterion) {
    let frame_dots = DOTS_PER_LINE as u32 * LINES_PER_FRAME as u32;

    c.bench_function("ppu_raw_dots", |b| {
        b.iter_batched(
            || {
                let mut emulator = Emulator::new(Box::new(NullPresenter));
                emulator.insert_cartridge(&rendering_image()).unwrap();
                emulator.power_on();
                emulator.bus_mut().write(0x2001, mask::BACKGROUND);
                emulator
            },
            |mut emulator| {
                // One frame of dots through the bus, three per tick
                for _ in 0..frame_dots / 3 {
                    emulator.bus_mut().tick();
                }
                black_box(emulator.bus().ppu().dot())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_frame_rendering, bench_raw_dot_stepping);
criterion_main!(benches);
