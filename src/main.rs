use clap::Parser;
use rv32i_iss::config::Config;
use rv32i_iss::cpu::{Cpu, Outcome};
use rv32i_iss::dump::terminate;
use rv32i_iss::errors::SimError;
use rv32i_iss::loader::load_image;
use rv32i_iss::memory::{AlignmentPolicy, DEFAULT_CAPACITY};
use std::path::PathBuf;

/// Instruction-set simulator for the RV32I base integer ISA
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the raw program image
    image: String,

    /// Reject misaligned halfword/word memory accesses instead of allowing them
    #[arg(long)]
    strict_align: bool,

    /// Initial value of x2 (the stack pointer); defaults to the top of memory
    #[arg(long)]
    sp: Option<u32>,

    /// Path to write the binary register dump
    #[arg(long, default_value = "register_dump.bin")]
    dump: PathBuf,

    /// Suppress the per-instruction program-counter/opcode trace
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = Config::new(DEFAULT_CAPACITY);
    if args.strict_align {
        config.alignment = AlignmentPolicy::RequireNatural;
    }
    if let Some(sp) = args.sp {
        config.initial_sp = sp;
    }
    config.dump_path = args.dump;
    config.trace = !args.quiet;

    let mut cpu = Cpu::new(&config);

    let image = match load_image(cpu.memory_mut(), &args.image) {
        Ok(image) => image,
        Err(e) => {
            let e = SimError::from(e);
            let code = e.exit_code();
            terminate(cpu.registers(), &config.dump_path, &format!("error: {e}"), code);
        }
    };
    if image.len() % 4 != 0 {
        eprintln!(
            "warning: program image size {} is not a multiple of 4",
            image.len()
        );
    }

    match cpu.run(config.trace) {
        Ok(Outcome::Halted(sys)) => {
            let message = format!("program halted by {sys:?} at pc=0x{:08x}", cpu.pc());
            terminate(cpu.registers(), &config.dump_path, &message, 0);
        }
        Ok(Outcome::Completed) => {
            terminate(
                cpu.registers(),
                &config.dump_path,
                "program execution completed",
                0,
            );
        }
        Err(e) => {
            let code = e.exit_code();
            terminate(cpu.registers(), &config.dump_path, &format!("error: {e}"), code);
        }
    }
}
