use msp430g2553_bsp::memory::{CODE_SEG_START, DATA_SEG_START, STACK_TOS_START};
use msp430g2553_bsp::phase::DisplayRole;
use msp430g2553_bsp::pins::{PushButtons, PB0, PB1, PB2};
use msp430g2553_bsp::regs::Port;
use msp430g2553_bsp::timing::*;
use msp430g2553_bsp::Phase;

fn addresses(phase: Phase) -> Vec<(&'static str, u16)> {
    phase
        .config()
        .aliases()
        .iter()
        .map(|a| (a.name, a.address()))
        .collect()
}

#[test]
fn phase_1_register_table() {
    assert_eq!(
        addresses(Phase::One),
        [
            ("LedsArrPort", 0x21),
            ("LedsArrDir", 0x22),
            ("LedsArrSel", 0x26),
            ("PBArrPort", 0x28),
            ("PBArrPortOut", 0x29),
            ("PBTypeOfTriger", 0x2C),
            ("PBEnableIE", 0x2D),
            ("PBFlugPend", 0x2B),
            ("PBArrPortDir", 0x2A),
            ("PBArrPortsel", 0x2E),
        ]
    );
}

#[test]
fn phase_2_register_table() {
    assert_eq!(
        addresses(Phase::Two),
        [
            ("LCDArrPort", 0x20),
            ("LCDArrPortOut", 0x21),
            ("LCDArrPortDir", 0x22),
            ("LCDArrPortsel", 0x26),
            ("PBArrPort", 0x28),
            ("PBArrPortOut", 0x29),
            ("PBTypeOfTriger", 0x2C),
            ("PBEnableIE", 0x2D),
            ("PBFlugPend", 0x2B),
            ("PBArrPortDir", 0x2A),
            ("PBArrPortsel", 0x2E),
        ]
    );
}

#[test]
fn phase_3_register_table() {
    assert_eq!(
        addresses(Phase::Three),
        [
            ("LCDArrPort", 0x28),
            ("LCDArrPortOut", 0x29),
            ("LCDArrPortDir", 0x2A),
            ("LCDArrPortsel", 0x2E),
            ("PBArrPort", 0x20),
            ("PBArrPortOut", 0x21),
            ("PBTypeOfTriger", 0x24),
            ("PBEnableIE", 0x25),
            ("PBFlugPend", 0x23),
            ("PBArrPortDir", 0x22),
            ("PBArrPortsel", 0x26),
        ]
    );
}

#[test]
fn button_bits_do_not_move_with_the_port() {
    for phase in Phase::ALL {
        let cfg = phase.config();
        for pb in [PB0, PB1, PB2] {
            assert!(cfg.buttons.buttons.contains(pb), "{:?} lacks {:?}", phase, pb);
        }
    }
    assert_eq!(Phase::One.config().buttons.port, Port::P2);
    assert_eq!(Phase::Three.config().buttons.port, Port::P1);
    assert_eq!(PB0 | PB1 | PB2, PushButtons::from_bits_truncate(0x07));
}

#[test]
fn timing_constants_per_phase() {
    match Phase::One.config().display {
        DisplayRole::Leds { timing, .. } => {
            assert_eq!(
                (timing.delay_70, timing.delay_30, timing.one_hz, timing.two_hz),
                (119, 51, 5120, 10240)
            );
        }
        DisplayRole::Lcd { .. } => panic!("phase 1 drives LEDs"),
    }
    for phase in [Phase::Two, Phase::Three] {
        match phase.config().display {
            DisplayRole::Lcd { timing, .. } => {
                assert_eq!(
                    (timing.del_200us, timing.del_15ms, timing.del_5ms),
                    (DEL_200US, DEL_15MS, DEL_5MS)
                );
                assert_eq!((DEL_200US, DEL_15MS, DEL_5MS), (210, 15728, 5242));
            }
            DisplayRole::Leds { .. } => panic!("{:?} drives an LCD", phase),
        }
    }
    for phase in Phase::ALL {
        assert_eq!(phase.config().debounce, DEBOUNCE_VAL);
    }
}

#[test]
fn memory_layout_is_shared() {
    assert_eq!(
        (DATA_SEG_START, CODE_SEG_START, STACK_TOS_START),
        (0x0200, 0xC000, 0x0400)
    );
    for phase in Phase::ALL {
        let mem = phase.config().memory;
        assert_eq!(mem.code_seg_start, CODE_SEG_START);
        assert_eq!(mem.stack_tos_start, STACK_TOS_START);
    }
}

#[cfg(any(feature = "phase1", feature = "phase2", feature = "phase3"))]
#[test]
fn active_phase_matches_feature() {
    let expected = if cfg!(feature = "phase1") {
        Phase::One
    } else if cfg!(feature = "phase2") {
        Phase::Two
    } else {
        Phase::Three
    };
    assert_eq!(msp430g2553_bsp::ACTIVE.phase, expected);
    assert!(msp430g2553_bsp::ACTIVE.validate().is_ok());
}
