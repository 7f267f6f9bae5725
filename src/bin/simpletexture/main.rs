use std::process::ExitCode;

use superbible_demos::abs;
use superbible_demos::demos::{SimpleTexture, simpletexture};
use superbible_demos::logging;

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("failed to set up logging: {e}");
    }

    match abs::run(SimpleTexture::new(), simpletexture::NAME) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
