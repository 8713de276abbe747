pub trait Alu {
    // Arithmetic
    fn alu_add(a: u8, b: u8) -> Self;
    fn alu_sub(a: u8, b: u8) -> Self;

    // Logical Operations
    fn alu_and(a: u8, b: u8) -> Self;
    fn alu_or(a: u8, b: u8) -> Self;
    fn alu_xor(a: u8, b: u8) -> Self;
    fn alu_nand(a: u8, b: u8) -> Self;
    fn alu_nor(a: u8, b: u8) -> Self;
    fn alu_xnor(a: u8, b: u8) -> Self;
    fn alu_not(val: u8) -> Self;

    // Unit Operations
    fn alu_inc(val: u8) -> Self;
    fn alu_dec(val: u8) -> Self;

    // Shifts and rotates, only the low three bits of `amount` are used
    fn alu_sll(val: u8, amount: u8) -> Self;
    fn alu_srl(val: u8, amount: u8) -> Self;
    fn alu_rol(val: u8, amount: u8) -> Self;
    fn alu_ror(val: u8, amount: u8) -> Self;
}
