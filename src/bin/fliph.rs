use std::{ffi::OsString, path::Path};

use fliph::{
    error::{ErrorKind, FlipError},
    fl_err,
    flipper::{flip, report},
    help,
};

const BIN_NAME: &str = "fliph";

fn main() {
    help::maybe_print_help_and_exit(BIN_NAME);
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), FlipError> {
    if args.len() != 3 {
        return Err(fl_err!(ErrorKind::Usage, "{}", help::usage(BIN_NAME)));
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    let result = flip(input, output);
    if result.is_ok() {
        println!("{}", report(&result));
    }
    result.map(|_| ())
}
