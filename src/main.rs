//! hello-world entry point

use hello_world::Result;

fn main() -> Result<()> {
    hello_world::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hello_world::run(std::env::args_os(), &mut out)
}
