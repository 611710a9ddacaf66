//! focuslog main entrypoint.

use focuslog::run;

fn main() {
    if let Err(e) = run() {
        focuslog::ui::messages::error(e.to_string());
        std::process::exit(1);
    }
}
