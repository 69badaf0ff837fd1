// Background pipeline and sprite tests

use super::chr_ram_mapper;
use crate::ppu::constants::{ctrl, mask, status};
use crate::ppu::rendering::{attr_addr, tile_addr};
use crate::ppu::{Ppu, Sprite};

// ========================================
// Loopy Arithmetic
// ========================================

#[test]
fn test_tile_and_attribute_addresses() {
    // coarse x = 2, coarse y = 3, nametable 0
    let v = (3 << 5) | 2;
    assert_eq!(tile_addr(v), 0x2000 + 3 * 32 + 2);
    assert_eq!(attr_addr(v), 0x23C0 | ((3 >> 2) << 3) | (2 >> 2));

    // nametable select carries through both
    let v = 0x0400 | (3 << 5) | 2;
    assert_eq!(tile_addr(v) & 0x0C00, 0x0400);
    assert_eq!(attr_addr(v) & 0x0C00, 0x0400);
}

#[test]
fn test_coarse_x_increment_wraps_nametable() {
    let mut ppu = Ppu::new();
    ppu.v = 30;
    ppu.incr_coarse_x();
    assert_eq!(ppu.v, 31);

    ppu.incr_coarse_x();
    assert_eq!(ppu.v & 0x1F, 0, "coarse x wraps to 0");
    assert_eq!(ppu.v & 0x0400, 0x0400, "horizontal nametable flips");
}

#[test]
fn test_fine_y_increment_carries_into_coarse_y() {
    let mut ppu = Ppu::new();
    ppu.v = 6 << 12; // fine y = 6
    ppu.incr_y();
    assert_eq!(ppu.v >> 12, 7);

    ppu.incr_y();
    assert_eq!(ppu.v >> 12, 0, "fine y wraps");
    assert_eq!((ppu.v >> 5) & 0x1F, 1, "coarse y steps");
}

#[test]
fn test_row_29_wrap_flips_vertical_nametable() {
    let mut ppu = Ppu::new();
    ppu.v = (7 << 12) | (29 << 5); // fine y 7, coarse y 29
    ppu.incr_y();
    assert_eq!((ppu.v >> 5) & 0x1F, 0, "coarse y wraps at row 29");
    assert_eq!(ppu.v & 0x0800, 0x0800, "vertical nametable flips");
}

#[test]
fn test_row_31_wraps_without_nametable_flip() {
    let mut ppu = Ppu::new();
    ppu.v = (7 << 12) | (31 << 5);
    ppu.incr_y();
    assert_eq!((ppu.v >> 5) & 0x1F, 0);
    assert_eq!(ppu.v & 0x0800, 0, "out-of-range rows do not flip");
}

#[test]
fn test_copy_x_and_copy_y() {
    let mut ppu = Ppu::new();
    ppu.t = 0x7FFF;
    ppu.v = 0;

    ppu.copy_x();
    assert_eq!(ppu.v, 0b000_0100_0001_1111, "coarse x + horizontal nametable");

    ppu.v = 0;
    ppu.copy_y();
    assert_eq!(ppu.v, 0b111_1011_1110_0000, "fine y, coarse y, vertical nametable");
}

// ========================================
// Background Shifters
// ========================================

#[test]
fn test_shift_reload_and_shift() {
    let mut ppu = Ppu::new();
    ppu.bg.low = 0xAA;
    ppu.bg.high = 0x55;
    ppu.bg.at = 0b11;

    ppu.bg_shift_reload();
    assert_eq!(ppu.bg.shift_low & 0xFF, 0xAA);
    assert_eq!(ppu.bg.shift_high & 0xFF, 0x55);
    assert!(ppu.bg.attr_latch_low);
    assert!(ppu.bg.attr_latch_high);

    ppu.bg_shift();
    assert_eq!(ppu.bg.shift_low & 0x1FF, 0xAA << 1, "both pattern shifters move");
    assert_eq!(ppu.bg.shift_high & 0x1FF, 0x55 << 1);
    assert_eq!(ppu.bg.attr_shift_low & 1, 1, "latch feeds the attribute shifter");
}

// ========================================
// Sprite Evaluation
// ========================================

#[test]
fn test_evaluate_selects_overlapping_sprites() {
    let mut ppu = Ppu::new();
    ppu.line = 50;

    // Sprite 3 covers rows 48-55, sprite 7 is far away
    ppu.write_oam(3 * 4, 48);
    ppu.write_oam(3 * 4 + 1, 0x20);
    ppu.write_oam(3 * 4 + 2, 0x01);
    ppu.write_oam(3 * 4 + 3, 100);
    ppu.write_oam(7 * 4, 200);

    // Everything else sits at y = 0 and also matches nothing at line 50
    ppu.evaluate_sprites();

    let matches: Vec<&Sprite> = ppu.secondary.iter().filter(|s| s.enabled).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 3);
    assert_eq!(matches[0].tile, 0x20);
    assert_eq!(matches[0].x, 100);
}

#[test]
fn test_evaluate_sets_overflow_on_ninth_match() {
    let mut ppu = Ppu::new();
    ppu.line = 10;

    // Ten sprites all covering line 10
    for i in 0..10 {
        ppu.write_oam((i * 4) as u8, 8);
    }

    ppu.evaluate_sprites();

    assert!(ppu.status & status::SPRITE_OVERFLOW != 0);
    assert!(ppu.secondary.iter().all(|s| s.enabled), "first eight kept");
    assert_eq!(ppu.secondary[7].index, 7, "scan stops at the limit");
}

#[test]
fn test_evaluate_respects_16_pixel_sprites() {
    let mut ppu = Ppu::new();
    ppu.ctrl = ctrl::SPRITE_8X16;
    ppu.line = 20;
    ppu.write_oam(0, 8); // rows 8-23 in 8x16 mode

    ppu.evaluate_sprites();
    assert!(ppu.secondary[0].enabled);

    ppu.ctrl = 0;
    ppu.secondary[0].enabled = false;
    ppu.evaluate_sprites();
    assert!(!ppu.secondary[0].enabled, "8-pixel sprite no longer reaches line 20");
}

// ========================================
// Sprite Pattern Loading
// ========================================

#[test]
fn test_load_sprites_fetches_pattern_rows() {
    let mut ppu = Ppu::new();
    let mut mapper = chr_ram_mapper();

    // Tile 2, row 5: planes at $0025 and $002D
    ppu.mem_write(Some(mapper.as_mut()), 0x0025, 0xAB);
    ppu.mem_write(Some(mapper.as_mut()), 0x002D, 0xCD);

    ppu.line = 25;
    ppu.secondary[0] = Sprite {
        enabled: true,
        index: 0,
        x: 0,
        y: 20, // row = 25 - 20 = 5
        tile: 2,
        attr: 0,
        low: 0,
        high: 0,
    };

    ppu.load_sprites(Some(mapper.as_ref()));

    assert_eq!(ppu.sprites[0].low, 0xAB);
    assert_eq!(ppu.sprites[0].high, 0xCD);
}

#[test]
fn test_load_sprites_vertical_flip() {
    let mut ppu = Ppu::new();
    let mut mapper = chr_ram_mapper();

    // Row 5 flipped in an 8-pixel sprite reads row 2
    ppu.mem_write(Some(mapper.as_mut()), 0x0022, 0x3C);

    ppu.line = 25;
    ppu.secondary[0] = Sprite {
        enabled: true,
        index: 0,
        x: 0,
        y: 20,
        tile: 2,
        attr: crate::ppu::constants::sprite_attr::FLIP_VERTICAL,
        low: 0,
        high: 0,
    };

    ppu.load_sprites(Some(mapper.as_ref()));
    assert_eq!(ppu.sprites[0].low, 0x3C);
}

#[test]
fn test_load_sprites_8x16_bank_select() {
    let mut ppu = Ppu::new();
    let mut mapper = chr_ram_mapper();
    ppu.ctrl = ctrl::SPRITE_8X16;

    // Tile number 3: bank $1000, tile index 2, row 0 -> $1020
    ppu.mem_write(Some(mapper.as_mut()), 0x1020, 0x99);

    ppu.line = 8;
    ppu.secondary[0] = Sprite {
        enabled: true,
        index: 0,
        x: 0,
        y: 8,
        tile: 3,
        attr: 0,
        low: 0,
        high: 0,
    };

    ppu.load_sprites(Some(mapper.as_ref()));
    assert_eq!(ppu.sprites[0].low, 0x99, "bit 0 of the tile selects the bank");
}

// ========================================
// Pixel Composition
// ========================================

/// Stage the shifters so the next pixel reads a solid background color
fn stage_background(ppu: &mut Ppu) {
    ppu.mask |= mask::BACKGROUND | mask::BACKGROUND_LEFT;
    ppu.bg.shift_low = 0x8000;
    ppu.bg.shift_high = 0x0000;
    ppu.fine_x = 0;
}

#[test]
fn test_pixel_uses_palette_ram() {
    let mut ppu = Ppu::new();
    ppu.mem_write(None, 0x3F01, 0x21);

    stage_background(&mut ppu);
    ppu.line = 0;
    ppu.dot = 10; // x = 8, clear of the left mask

    ppu.render_pixel(None);

    assert_eq!(ppu.frame_pixel(8, 0), 0x21, "pattern bit 1 -> palette entry 1");
}

#[test]
fn test_transparent_pixel_reads_backdrop() {
    let mut ppu = Ppu::new();
    ppu.mem_write(None, 0x3F00, 0x0F);
    ppu.mask |= mask::BACKGROUND;
    ppu.line = 0;
    ppu.dot = 10;

    ppu.render_pixel(None);

    assert_eq!(ppu.frame_pixel(8, 0), 0x0F, "universal background color");
}

#[test]
fn test_sprite_zero_hit_requires_both_layers_opaque() {
    let mut ppu = Ppu::new();
    stage_background(&mut ppu);
    ppu.mask |= mask::SPRITES | mask::SPRITE_LEFT;
    ppu.line = 0;
    ppu.dot = 10;

    ppu.sprites[0] = Sprite {
        enabled: true,
        index: 0,
        x: 8,
        y: 0,
        tile: 0,
        attr: 0,
        low: 0x80, // opaque leftmost pixel
        high: 0,
    };

    ppu.render_pixel(None);
    assert!(ppu.status & status::SPRITE_0_HIT != 0);

    // Transparent background pixel: no hit
    let mut ppu = Ppu::new();
    ppu.mask |= mask::BACKGROUND | mask::BACKGROUND_LEFT | mask::SPRITES | mask::SPRITE_LEFT;
    ppu.line = 0;
    ppu.dot = 10;
    ppu.sprites[0] = Sprite {
        enabled: true,
        index: 0,
        x: 8,
        y: 0,
        tile: 0,
        attr: 0,
        low: 0x80,
        high: 0,
    };
    ppu.render_pixel(None);
    assert_eq!(ppu.status & status::SPRITE_0_HIT, 0);
}

#[test]
fn test_no_sprite_zero_hit_at_x_255() {
    let mut ppu = Ppu::new();
    stage_background(&mut ppu);
    ppu.mask |= mask::SPRITES | mask::SPRITE_LEFT;
    ppu.line = 0;
    ppu.dot = 257; // x = 255

    // Keep the pattern bit under x=255 opaque
    ppu.bg.shift_low = 0xFFFF;
    ppu.sprites[0] = Sprite {
        enabled: true,
        index: 0,
        x: 255,
        y: 0,
        tile: 0,
        attr: 0,
        low: 0x80,
        high: 0,
    };

    ppu.render_pixel(None);
    assert_eq!(ppu.status & status::SPRITE_0_HIT, 0, "column 255 never hits");
}

#[test]
fn test_sprite_priority_behind_background() {
    let mut ppu = Ppu::new();
    ppu.mem_write(None, 0x3F01, 0x16); // background color
    ppu.mem_write(None, 0x3F11, 0x27); // sprite color

    stage_background(&mut ppu);
    ppu.mask |= mask::SPRITES | mask::SPRITE_LEFT;
    ppu.line = 0;
    ppu.dot = 10;

    ppu.sprites[1] = Sprite {
        enabled: true,
        index: 1,
        x: 8,
        y: 0,
        tile: 0,
        attr: crate::ppu::constants::sprite_attr::BEHIND_BACKGROUND,
        low: 0x80,
        high: 0,
    };

    ppu.render_pixel(None);
    assert_eq!(ppu.frame_pixel(8, 0), 0x16, "priority bit keeps the background");
}

#[test]
fn test_lower_oam_index_wins_sprite_overlap() {
    let mut ppu = Ppu::new();
    ppu.mem_write(None, 0x3F11, 0x27); // palette 0, entry 1
    ppu.mem_write(None, 0x3F15, 0x2A); // palette 1, entry 1

    ppu.mask |= mask::SPRITES | mask::SPRITE_LEFT;
    ppu.line = 0;
    ppu.dot = 10;

    // Slot 0 (OAM index 0) and slot 1 (OAM index 5) overlap at x = 8
    ppu.sprites[0] = Sprite {
        enabled: true,
        index: 0,
        x: 8,
        y: 0,
        tile: 0,
        attr: 0x00, // palette 0
        low: 0x80,
        high: 0,
    };
    ppu.sprites[1] = Sprite {
        enabled: true,
        index: 5,
        x: 8,
        y: 0,
        tile: 0,
        attr: 0x01, // palette 1
        low: 0x80,
        high: 0,
    };

    ppu.render_pixel(None);
    assert_eq!(ppu.frame_pixel(8, 0), 0x27, "front sprite is the lower OAM index");
}
