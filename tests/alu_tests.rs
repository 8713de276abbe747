mod common;

use byte_alu::alu::dispatch;
use byte_alu::opcodes::OpCode;
use byte_alu::register::AluState;
use common::eval;

const SHIFTS: [OpCode; 4] = [OpCode::Sll, OpCode::Srl, OpCode::Rol, OpCode::Ror];

#[test]
fn test_add_exhaustive() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let state = AluState::next(a, b, OpCode::Add);
            let wide = a as u16 + b as u16;
            assert_eq!(state.result, wide as u8);
            assert_eq!(state.carry, wide > 0xFF);

            let signed = a as i8 as i16 + b as i8 as i16;
            assert_eq!(
                state.overflow,
                !(-128..=127).contains(&signed),
                "{:#04X} + {:#04X}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_sub_exhaustive() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            let state = AluState::next(a, b, OpCode::Sub);
            assert_eq!(state.result, a.wrapping_sub(b));
            assert_eq!(state.carry, a >= b, "carry is set when nothing is borrowed");

            let signed = a as i8 as i16 - b as i8 as i16;
            assert_eq!(state.overflow, !(-128..=127).contains(&signed));
        }
    }
}

#[test]
fn test_not_twice_is_identity() {
    for a in 0..=255u8 {
        let once = dispatch(a, 0, OpCode::Not);
        let twice = dispatch(once.value, 0, OpCode::Not);
        assert_eq!(twice.value, a);
    }
}

#[test]
fn test_rotate_by_zero_is_identity() {
    for a in 0..=255u8 {
        for op in [OpCode::Rol, OpCode::Ror] {
            // Only the low three bits matter, 0x08 and 0xF8 are both zero.
            for b in [0x00, 0x08, 0xF8] {
                let state = AluState::next(a, b, op);
                assert_eq!(state.result, a);
                assert!(!state.carry);
            }
        }
    }
}

#[test]
fn test_rotate_round_trip() {
    for a in 0..=255u8 {
        for k in 0..8u8 {
            let rotated = dispatch(a, k, OpCode::Rol).value;
            assert_eq!(dispatch(rotated, k, OpCode::Ror).value, a, "a={:#04X} k={}", a, k);
        }
    }
}

#[test]
fn test_logical_shifts_exhaustive() {
    for a in 0..=255u8 {
        for k in 1..=7u8 {
            let sll = AluState::next(a, k, OpCode::Sll);
            let wide = (a as u16) << k;
            assert_eq!(sll.result, wide as u8, "SLL a={:#04X} k={}", a, k);
            assert_eq!(sll.carry, wide & 0x100 != 0, "SLL a={:#04X} k={}", a, k);

            let srl = AluState::next(a, k, OpCode::Srl);
            assert_eq!(srl.result, a >> k, "SRL a={:#04X} k={}", a, k);
            assert_eq!(srl.carry, (a >> (k - 1)) & 1 == 1, "SRL a={:#04X} k={}", a, k);
        }
    }
}

#[test]
fn test_shifts_never_overflow() {
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            for op in SHIFTS {
                assert!(!dispatch(a, b, op).overflow);
            }
        }
    }
}

#[test]
fn test_parity_over_every_result() {
    // NOT reaches every byte value exactly once.
    for a in 0..=255u8 {
        let state = AluState::next(a, 0, OpCode::Not);
        assert_eq!(state.parity, state.result.count_ones() % 2 == 0);
        assert_eq!(state.zero, state.result == 0);
        assert_eq!(state.sign, state.result >= 0x80);
    }
}

#[test]
fn test_inc_dec_wrap() {
    for a in 0..=255u8 {
        let inc = AluState::next(a, 0, OpCode::Inc);
        assert_eq!(inc.result, a.wrapping_add(1));
        assert_eq!(inc.carry, a == 0xFF);
        assert_eq!(inc.overflow, a == 0x7F);

        let dec = AluState::next(a, 0, OpCode::Dec);
        assert_eq!(dec.result, a.wrapping_sub(1));
        assert_eq!(dec.carry, a == 0x00);
        assert_eq!(dec.overflow, a == 0x80);
    }
}

#[test]
fn test_scenario_add_no_flags() {
    let state = eval(0x0F, 0x01, OpCode::Add);
    assert_eq!(state.result, 0x10);
    assert!(!state.carry);
    assert!(!state.overflow);
    assert!(!state.zero);
    assert!(!state.sign);
}

#[test]
fn test_scenario_add_signed_overflow() {
    let state = eval(0x7F, 0x01, OpCode::Add);
    assert_eq!(state.result, 0x80);
    assert!(state.overflow);
    assert!(state.sign);
    assert!(!state.carry);
}

#[test]
fn test_scenario_rol_carry() {
    let state = eval(0xAA, 3, OpCode::Rol);
    assert_eq!(state.result, 0x55);
    assert!(state.carry);
}

#[test]
fn test_scenario_sub_equal_operands() {
    let state = eval(0x50, 0x50, OpCode::Sub);
    assert_eq!(state.result, 0x00);
    assert!(state.zero);
    assert!(state.carry);
}

#[test]
fn test_scenario_inc_wraps() {
    let state = eval(0xFF, 0x00, OpCode::Inc);
    assert_eq!(state.result, 0x00);
    assert!(state.carry);
    assert!(!state.overflow);
}

#[test]
fn test_undefined_latches_zero_result() {
    let state = eval(0xDE, 0xAD, OpCode::Undefined);
    assert_eq!(state.result, 0);
    assert!(!state.carry && !state.overflow && !state.sign);
    assert!(state.zero && state.parity);
}
