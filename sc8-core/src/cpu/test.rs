use super::test_helpers::{run_program, C, N, V, Z};
use crate::{assert_register, assert_status};

#[test]
fn loadi_add_and_halt() {
    let (cpu, _mem) = run_program(
        "
        LOADI R0, 10
        LOADI R1, 32
        ADD R2, R0, R1
        HALT
        ",
    );
    assert_register!(cpu, 2, 42);
    assert_status!(cpu, 0);
}

#[test]
fn subtraction_sets_negative_and_carry_on_borrow() {
    let (cpu, _mem) = run_program(
        "
        LOADI R0, 1
        LOADI R1, 2
        SUB R2, R0, R1
        HALT
        ",
    );
    assert_register!(cpu, 2, 0xFF);
    assert_status!(cpu, N | C);
}

#[test]
fn conditional_jump_skips_the_fallthrough_on_zero() {
    let (cpu, _mem) = run_program(
        "
        LOADI R0, 5
        SUBI R0, 5
        JZ skip
        LOADI R1, 0xFF
        skip:
        LOADI R2, 1
        HALT
        ",
    );
    assert_register!(cpu, 1, 0);
    assert_register!(cpu, 2, 1);
    assert_status!(cpu, Z);
}

#[test]
fn call_and_ret_round_trip_through_the_stack() {
    let (cpu, _mem) = run_program(
        "
        JMP main
        add_one:
        INC R0
        RET
        main:
        LOADI R0, 41
        CALL add_one
        HALT
        ",
    );
    assert_register!(cpu, 0, 42);
}

#[test]
fn push_and_pop_round_trip_and_leave_the_stack_pointer_balanced() {
    let (mut cpu, mut mem) = run_program(
        "
        LOADI R0, 0x7A
        PUSH R0
        LOADI R0, 0
        POP R1
        HALT
        ",
    );
    assert_register!(cpu, 1, 0x7A);
    assert_eq!(cpu.sp, super::RESET_SP, "stack pointer must return to its reset value");
    // A further pop with no matching push is a runtime error, not a
    // silent wraparound.
    let err = cpu.pop_u8(&mut mem).unwrap_err();
    assert_eq!(err, super::RuntimeError::StackUnderflow);
}

#[test]
fn load_and_store_round_trip_through_memory() {
    let (cpu, mem) = run_program(
        "
        LOADI R0, 0x99
        STORE R0, [0x2000]
        LOAD R1, [0x2000]
        HALT
        ",
    );
    assert_register!(cpu, 1, 0x99);
    assert_eq!(mem.read(0x2000), 0x99);
}

#[test]
fn store_writes_console_out_through_the_mmio_window() {
    let (_cpu, mut mem) = run_program(
        "
        LOADI R0, 0x41
        STORE R0, [0xFF01]
        HALT
        ",
    );
    assert_eq!(mem.take_console_output(), vec![0x41]);
}

#[test]
fn shift_left_by_zero_leaves_carry_untouched() {
    let (cpu, _mem) = run_program(
        "
        LOADI R0, 0x01
        LOADI R1, 0
        SHL R2, R0, R1
        HALT
        ",
    );
    assert_register!(cpu, 2, 0x01);
    assert_status!(cpu, 0);
}

#[test]
fn nop_advances_pc_by_one_and_changes_nothing_else() {
    let (cpu, _mem) = run_program(
        "
        NOP
        LOADI R0, 7
        HALT
        ",
    );
    assert_register!(cpu, 0, 7);
}
