//! runlogger main entrypoint.

use runlogger::run;
use runlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
