use gles_circle::{init_logging, run, AppConfig};

pub fn main() {
    init_logging();
    run(AppConfig::default())
}
