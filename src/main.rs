//! ctc-checkin main entrypoint.

use ctc_checkin::run;
use ctc_checkin::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
