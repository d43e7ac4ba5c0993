#![forbid(unsafe_code)]

//! ordertrack binary entry point.

use std::io;
use std::process;

use ordertrack::cli::Opts;
use ordertrack::logging::{self, LogTarget};
use ordertrack::program::Program;

fn main() {
    let opts = Opts::parse();

    if let Err(e) = logging::init(&LogTarget::for_opts(&opts)) {
        eprintln!("Failed to initialize: {e}");
        process::exit(1);
    }

    let model = match ordertrack::build_model(&opts) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            process::exit(1);
        }
    };

    if opts.once {
        if let Err(e) = ordertrack::write_frame(&model, opts.width, opts.height, io::stdout().lock()) {
            eprintln!("Runtime error: {e}");
            process::exit(1);
        }
        return;
    }

    let mut program = match Program::with_config(model, ordertrack::program_config(&opts)) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            process::exit(1);
        }
    };
    let result = program.run();
    // Restore the terminal before printing anything.
    drop(program);
    if let Err(e) = result {
        eprintln!("Runtime error: {e}");
        process::exit(1);
    }
}
