//! Demo driver: prints two fixed expressions and their RPN renderings.

use std::process::ExitCode;

use yard::to_rpn;

fn main() -> ExitCode {
    let expressions = [
        "3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3",
        "a = D(f - b * c + d, !e, g)",
    ];

    for expression in expressions {
        match to_rpn(expression) {
            Ok(rpn) => println!("{expression}\t{rpn}"),
            Err(error) => {
                eprintln!("yard: {expression}: {error}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
