//! PPU timing tests: dot/scanline advancement, the vertical-blank window
//! and the frame-completion signal.

use super::*;

#[test]
fn test_step_advances_dot_and_wraps_scanline() {
    let mut ppu = test_ppu();
    assert_eq!(ppu.cycle, 0);
    assert_eq!(ppu.scanline, 240);

    ppu.step().unwrap();
    assert_eq!(ppu.cycle, 1);

    // Finish this scanline
    for _ in 0..340 {
        ppu.step().unwrap();
    }
    assert_eq!(ppu.cycle, 0);
    assert_eq!(ppu.scanline, 241);
}

#[test]
fn test_frame_wraps_after_262_scanlines() {
    let mut ppu = test_ppu();
    let dots = DOTS_PER_SCANLINE as u64 * SCANLINES_PER_FRAME as u64;
    for _ in 0..dots {
        ppu.step().unwrap();
    }
    assert_eq!(ppu.cycle, 0);
    assert_eq!(ppu.scanline, 240);
}

#[test]
fn test_vblank_latch_set_at_241_1() {
    let mut ppu = test_ppu();
    step_to(&mut ppu, 241, 0);
    assert!(!ppu.nmi_occurred);

    ppu.step().unwrap();
    assert_eq!((ppu.scanline, ppu.cycle), (241, 1));
    assert!(ppu.nmi_occurred);
}

#[test]
fn test_vblank_latch_cleared_on_prerender() {
    let mut ppu = test_ppu();
    ppu.sprite_overflow = true;
    ppu.sprite_zero_hit = true;

    step_to(&mut ppu, 261, 1);
    assert!(!ppu.nmi_occurred);
    assert!(!ppu.sprite_overflow);
    assert!(!ppu.sprite_zero_hit);
}

#[test]
fn test_nmi_signal_requires_output_enabled() {
    // Without NMI output the dot passes silently
    let mut ppu = test_ppu();
    let result = step_to(&mut ppu, 241, 1);
    assert!(!result.nmi);

    // With NMI output enabled the same dot reports the interrupt
    let mut ppu = test_ppu();
    ppu.write_register(CTRL, 0x80).unwrap();
    let result = step_to(&mut ppu, 241, 1);
    assert!(result.nmi);
}

#[test]
fn test_nmi_fires_once_per_frame() {
    let mut ppu = test_ppu();
    ppu.write_register(CTRL, 0x80).unwrap();

    let dots = DOTS_PER_SCANLINE as u64 * SCANLINES_PER_FRAME as u64;
    let mut nmis = 0;
    for _ in 0..dots {
        if ppu.step().unwrap().nmi {
            nmis += 1;
        }
    }
    assert_eq!(nmis, 1);
}

#[test]
fn test_frame_complete_at_239_257() {
    let mut ppu = test_ppu();
    let result = step_to(&mut ppu, 239, 257);
    assert!(result.frame_complete);

    // One signal per frame
    let dots = DOTS_PER_SCANLINE as u64 * SCANLINES_PER_FRAME as u64;
    let mut completions = 0;
    for _ in 0..dots {
        if ppu.step().unwrap().frame_complete {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
}

#[test]
fn test_status_read_during_vblank_observes_then_clears() {
    let mut ppu = test_ppu();
    ppu.write_register(CTRL, 0x80).unwrap();
    step_to(&mut ppu, 241, 1);

    // First status read observes vblank and clears the latch
    let status = ppu.read_register(STATUS).unwrap();
    assert_eq!(status & 0x80, 0x80);
    let status = ppu.read_register(STATUS).unwrap();
    assert_eq!(status & 0x80, 0x00);
}
