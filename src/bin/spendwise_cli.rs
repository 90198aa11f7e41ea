use spendwise::cli::{output, run_cli};
use spendwise::init;

fn main() {
    init();

    if let Err(err) = run_cli(std::env::args().skip(1)) {
        output::error(err);
        std::process::exit(1);
    }
}
