//! Instruction decoding
//!
//! Turns a raw 32-bit instruction word into an [`Instr`], the executor's
//! dispatch target. A `HashMap`-keyed tree of `(mask, value)` matchers
//! earns its keep when opcode extensions need to register themselves
//! independently; this crate implements exactly one fixed instruction
//! set, so a plain nested `match` is the right amount of machinery.

use crate::alu::AluOp;
use crate::fields::{funct3, funct7, imm_b, imm_i, imm_j, imm_s, imm_u, opcode, rd, rs1, rs2, shamt};
use crate::opcodes::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Load {
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Sb,
    Sh,
    Sw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    Ecall,
    Ebreak,
}

#[derive(Debug, Clone, Copy)]
pub enum Instr {
    Lui { rd: u8, imm: i32 },
    Auipc { rd: u8, imm: i32 },
    Jal { rd: u8, imm: i32 },
    Jalr { rd: u8, rs1: u8, imm: i32 },
    Branch { op: Branch, rs1: u8, rs2: u8, imm: i32 },
    Load { op: Load, rd: u8, rs1: u8, imm: i32 },
    Store { op: Store, rs1: u8, rs2: u8, imm: i32 },
    RegImm { op: AluOp, rd: u8, rs1: u8, imm: i32 },
    RegReg { op: AluOp, rd: u8, rs1: u8, rs2: u8 },
    System(System),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unrecognised opcode 0b{opcode:07b} in instruction 0x{instr:08x}")]
    UnknownOpcode { instr: u32, opcode: u8 },
    #[error("unrecognised funct3 0b{funct3:03b} for opcode 0b{opcode:07b} in instruction 0x{instr:08x}")]
    UnknownFunct3 { instr: u32, opcode: u8, funct3: u8 },
    #[error(
        "unrecognised funct7 0b{funct7:07b} for opcode 0b{opcode:07b}/funct3 0b{funct3:03b} in instruction 0x{instr:08x}"
    )]
    UnknownFunct7 {
        instr: u32,
        opcode: u8,
        funct3: u8,
        funct7: u8,
    },
    #[error("unrecognised SYSTEM immediate 0x{imm:03x} in instruction 0x{instr:08x}")]
    UnknownSystem { instr: u32, imm: u32 },
}

pub fn decode(instr: u32) -> Result<Instr, DecodeError> {
    let op = opcode(instr);
    match op {
        OP_LUI => Ok(Instr::Lui {
            rd: rd(instr),
            imm: imm_u(instr),
        }),
        OP_AUIPC => Ok(Instr::Auipc {
            rd: rd(instr),
            imm: imm_u(instr),
        }),
        OP_JAL => Ok(Instr::Jal {
            rd: rd(instr),
            imm: imm_j(instr),
        }),
        OP_JALR => Ok(Instr::Jalr {
            rd: rd(instr),
            rs1: rs1(instr),
            imm: imm_i(instr),
        }),
        OP_BRANCH => {
            let branch = match funct3(instr) {
                FUNCT3_BEQ => Branch::Beq,
                FUNCT3_BNE => Branch::Bne,
                FUNCT3_BLT => Branch::Blt,
                FUNCT3_BGE => Branch::Bge,
                FUNCT3_BLTU => Branch::Bltu,
                FUNCT3_BGEU => Branch::Bgeu,
                f3 => {
                    return Err(DecodeError::UnknownFunct3 {
                        instr,
                        opcode: op,
                        funct3: f3,
                    })
                }
            };
            Ok(Instr::Branch {
                op: branch,
                rs1: rs1(instr),
                rs2: rs2(instr),
                imm: imm_b(instr),
            })
        }
        OP_LOAD => {
            let load = match funct3(instr) {
                FUNCT3_LB => Load::Lb,
                FUNCT3_LH => Load::Lh,
                FUNCT3_LW => Load::Lw,
                FUNCT3_LBU => Load::Lbu,
                FUNCT3_LHU => Load::Lhu,
                f3 => {
                    return Err(DecodeError::UnknownFunct3 {
                        instr,
                        opcode: op,
                        funct3: f3,
                    })
                }
            };
            Ok(Instr::Load {
                op: load,
                rd: rd(instr),
                rs1: rs1(instr),
                imm: imm_i(instr),
            })
        }
        OP_STORE => {
            let store = match funct3(instr) {
                FUNCT3_SB => Store::Sb,
                FUNCT3_SH => Store::Sh,
                FUNCT3_SW => Store::Sw,
                f3 => {
                    return Err(DecodeError::UnknownFunct3 {
                        instr,
                        opcode: op,
                        funct3: f3,
                    })
                }
            };
            Ok(Instr::Store {
                op: store,
                rs1: rs1(instr),
                rs2: rs2(instr),
                imm: imm_s(instr),
            })
        }
        OP_IMM => {
            let f3 = funct3(instr);
            let f7 = funct7(instr);
            let alu_op = match (f3, f7) {
                (FUNCT3_ADDI, _) => AluOp::Add,
                (FUNCT3_SLTI, _) => AluOp::Slt,
                (FUNCT3_SLTIU, _) => AluOp::Sltu,
                (FUNCT3_XORI, _) => AluOp::Xor,
                (FUNCT3_ORI, _) => AluOp::Or,
                (FUNCT3_ANDI, _) => AluOp::And,
                (FUNCT3_SLLI, 0) => AluOp::Sll,
                (FUNCT3_SRLI_SRAI, 0) => AluOp::Srl,
                (FUNCT3_SRLI_SRAI, FUNCT7_ALT) => AluOp::Sra,
                (FUNCT3_SLLI, f7) | (FUNCT3_SRLI_SRAI, f7) => {
                    return Err(DecodeError::UnknownFunct7 {
                        instr,
                        opcode: op,
                        funct3: f3,
                        funct7: f7,
                    })
                }
                (f3, _) => {
                    return Err(DecodeError::UnknownFunct3 {
                        instr,
                        opcode: op,
                        funct3: f3,
                    })
                }
            };
            // Shift amounts are encoded in the low 5 bits of what the
            // I-type immediate field would otherwise occupy.
            let imm = if matches!(f3, FUNCT3_SLLI | FUNCT3_SRLI_SRAI) {
                i32::from(shamt(instr))
            } else {
                imm_i(instr)
            };
            Ok(Instr::RegImm {
                op: alu_op,
                rd: rd(instr),
                rs1: rs1(instr),
                imm,
            })
        }
        OP_REG => {
            let f3 = funct3(instr);
            let f7 = funct7(instr);
            let alu_op = match (f3, f7) {
                (FUNCT3_ADD_SUB, 0) => AluOp::Add,
                (FUNCT3_ADD_SUB, FUNCT7_ALT) => AluOp::Sub,
                (FUNCT3_SLL, 0) => AluOp::Sll,
                (FUNCT3_SLT, 0) => AluOp::Slt,
                (FUNCT3_SLTU, 0) => AluOp::Sltu,
                (FUNCT3_XOR, 0) => AluOp::Xor,
                (FUNCT3_SRL_SRA, 0) => AluOp::Srl,
                (FUNCT3_SRL_SRA, FUNCT7_ALT) => AluOp::Sra,
                (FUNCT3_OR, 0) => AluOp::Or,
                (FUNCT3_AND, 0) => AluOp::And,
                (f3, 0) => {
                    return Err(DecodeError::UnknownFunct3 {
                        instr,
                        opcode: op,
                        funct3: f3,
                    })
                }
                (f3, f7) => {
                    return Err(DecodeError::UnknownFunct7 {
                        instr,
                        opcode: op,
                        funct3: f3,
                        funct7: f7,
                    })
                }
            };
            Ok(Instr::RegReg {
                op: alu_op,
                rd: rd(instr),
                rs1: rs1(instr),
                rs2: rs2(instr),
            })
        }
        OP_SYSTEM => {
            let imm = imm_i(instr) as u32 & 0xfff;
            match imm {
                IMM_ECALL => Ok(Instr::System(System::Ecall)),
                IMM_EBREAK => Ok(Instr::System(System::Ebreak)),
                imm => Err(DecodeError::UnknownSystem { instr, imm }),
            }
        }
        opcode => Err(DecodeError::UnknownOpcode { instr, opcode }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rtype(funct7: u32, rs2: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
        (funct7 << 25) | (rs2 << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
    }

    fn itype(imm: u32, rs1: u32, funct3: u32, rd: u32, opcode: u32) -> u32 {
        (imm << 20) | (rs1 << 15) | (funct3 << 12) | (rd << 7) | opcode
    }

    #[test]
    fn decodes_add() {
        let instr = rtype(0, 3, 2, 0b000, 1, OP_REG as u32);
        match decode(instr).unwrap() {
            Instr::RegReg { op, rd, rs1, rs2 } => {
                assert_eq!(op, AluOp::Add);
                assert_eq!((rd, rs1, rs2), (1, 2, 3));
            }
            other => panic!("expected RegReg, got {other:?}"),
        }
    }

    #[test]
    fn decodes_sub_via_funct7() {
        let instr = rtype(FUNCT7_ALT as u32, 3, 2, 0b000, 1, OP_REG as u32);
        match decode(instr).unwrap() {
            Instr::RegReg { op, .. } => assert_eq!(op, AluOp::Sub),
            other => panic!("expected RegReg, got {other:?}"),
        }
    }

    #[test]
    fn decodes_addi() {
        let instr = itype(0xfff, 0, 0b000, 1, OP_IMM as u32);
        match decode(instr).unwrap() {
            Instr::RegImm { op, imm, .. } => {
                assert_eq!(op, AluOp::Add);
                assert_eq!(imm, -1);
            }
            other => panic!("expected RegImm, got {other:?}"),
        }
    }

    #[test]
    fn decodes_slli_srli_srai_with_valid_funct7() {
        let slli = itype(5, 0, FUNCT3_SLLI as u32, 1, OP_IMM as u32);
        match decode(slli).unwrap() {
            Instr::RegImm { op, imm, .. } => {
                assert_eq!(op, AluOp::Sll);
                assert_eq!(imm, 5);
            }
            other => panic!("expected RegImm, got {other:?}"),
        }

        let srli = itype(5, 0, FUNCT3_SRLI_SRAI as u32, 1, OP_IMM as u32);
        match decode(srli).unwrap() {
            Instr::RegImm { op, imm, .. } => {
                assert_eq!(op, AluOp::Srl);
                assert_eq!(imm, 5);
            }
            other => panic!("expected RegImm, got {other:?}"),
        }

        let srai = itype((FUNCT7_ALT as u32) << 5 | 5, 0, FUNCT3_SRLI_SRAI as u32, 1, OP_IMM as u32);
        match decode(srai).unwrap() {
            Instr::RegImm { op, imm, .. } => {
                assert_eq!(op, AluOp::Sra);
                assert_eq!(imm, 5);
            }
            other => panic!("expected RegImm, got {other:?}"),
        }
    }

    #[test]
    fn rejects_reserved_funct7_on_slli() {
        // slli with funct7 = 0100000 (reserved -- only 0 is defined)
        let instr = itype((FUNCT7_ALT as u32) << 5 | 5, 0, FUNCT3_SLLI as u32, 1, OP_IMM as u32);
        let err = decode(instr).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFunct7 { .. }));
    }

    #[test]
    fn rejects_reserved_funct7_on_srli_srai() {
        // srli/srai with funct7 = 0000001 (reserved -- only 0 and 0100000 are defined)
        let instr = itype(1 << 5 | 3, 0, FUNCT3_SRLI_SRAI as u32, 1, OP_IMM as u32);
        let err = decode(instr).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFunct7 { .. }));
    }

    #[test]
    fn decodes_jalr() {
        let instr = itype(8, 1, 0b000, 2, OP_JALR as u32);
        match decode(instr).unwrap() {
            Instr::Jalr { rd, rs1, imm } => assert_eq!((rd, rs1, imm), (2, 1, 8)),
            other => panic!("expected Jalr, got {other:?}"),
        }
    }

    #[test]
    fn decodes_ecall_and_ebreak() {
        let ecall = itype(0, 0, 0, 0, OP_SYSTEM as u32);
        let ebreak = itype(1, 0, 0, 0, OP_SYSTEM as u32);
        assert!(matches!(decode(ecall).unwrap(), Instr::System(System::Ecall)));
        assert!(matches!(
            decode(ebreak).unwrap(),
            Instr::System(System::Ebreak)
        ));
    }

    #[test]
    fn rejects_unknown_opcode() {
        let err = decode(0b1111111).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownOpcode { .. }));
    }

    #[test]
    fn rejects_unknown_branch_funct3() {
        let instr = (0u32 << 25) | (0 << 20) | (0 << 15) | (0b010 << 12) | (0 << 7) | OP_BRANCH as u32;
        let err = decode(instr).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFunct3 { .. }));
    }
}
