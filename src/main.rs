//! ttviewer main entrypoint.

use ttviewer::run;
use ttviewer::ui::messages::severity_message;

fn main() {
    if let Err(e) = run() {
        severity_message(e.severity(), &e);
        std::process::exit(1);
    }
}
