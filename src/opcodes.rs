//! Opcode and funct3/funct7 constants for the base integer encoding.

pub const OP_LUI: u8 = 0b0110111;
pub const OP_AUIPC: u8 = 0b0010111;
pub const OP_JAL: u8 = 0b1101111;
pub const OP_JALR: u8 = 0b1100111;
pub const OP_BRANCH: u8 = 0b1100011;
pub const OP_LOAD: u8 = 0b0000011;
pub const OP_STORE: u8 = 0b0100011;
pub const OP_IMM: u8 = 0b0010011;
pub const OP_REG: u8 = 0b0110011;
pub const OP_SYSTEM: u8 = 0b1110011;

pub const FUNCT3_BEQ: u8 = 0b000;
pub const FUNCT3_BNE: u8 = 0b001;
pub const FUNCT3_BLT: u8 = 0b100;
pub const FUNCT3_BGE: u8 = 0b101;
pub const FUNCT3_BLTU: u8 = 0b110;
pub const FUNCT3_BGEU: u8 = 0b111;

pub const FUNCT3_LB: u8 = 0b000;
pub const FUNCT3_LH: u8 = 0b001;
pub const FUNCT3_LW: u8 = 0b010;
pub const FUNCT3_LBU: u8 = 0b100;
pub const FUNCT3_LHU: u8 = 0b101;

pub const FUNCT3_SB: u8 = 0b000;
pub const FUNCT3_SH: u8 = 0b001;
pub const FUNCT3_SW: u8 = 0b010;

pub const FUNCT3_ADDI: u8 = 0b000;
pub const FUNCT3_SLTI: u8 = 0b010;
pub const FUNCT3_SLTIU: u8 = 0b011;
pub const FUNCT3_XORI: u8 = 0b100;
pub const FUNCT3_ORI: u8 = 0b110;
pub const FUNCT3_ANDI: u8 = 0b111;
pub const FUNCT3_SLLI: u8 = 0b001;
pub const FUNCT3_SRLI_SRAI: u8 = 0b101;

pub const FUNCT3_ADD_SUB: u8 = 0b000;
pub const FUNCT3_SLL: u8 = 0b001;
pub const FUNCT3_SLT: u8 = 0b010;
pub const FUNCT3_SLTU: u8 = 0b011;
pub const FUNCT3_XOR: u8 = 0b100;
pub const FUNCT3_SRL_SRA: u8 = 0b101;
pub const FUNCT3_OR: u8 = 0b110;
pub const FUNCT3_AND: u8 = 0b111;

pub const FUNCT7_ALT: u8 = 0b0100000;

pub const IMM_ECALL: u32 = 0x000;
pub const IMM_EBREAK: u32 = 0x001;
