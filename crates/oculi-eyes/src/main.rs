//! A thousand eyes, and one that blinks.
//!
//! Classic windowing benchmark: every frame redraws 1000 randomly placed eyes
//! plus a centered one whose eyelid follows a 1 s triangle wave, printing the
//! instantaneous frame rate to stdout. Escape or closing the window exits.

mod app;
mod eye;
mod rng;

use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::dpi::LogicalSize;

use oculi_engine::device::GpuInit;
use oculi_engine::logging::{LoggingConfig, init_logging};
use oculi_engine::window::{Runtime, RuntimeConfig};

use crate::app::EyesApp;

const EYE_COUNT: usize = 1000;
const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 450.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let app = EyesApp::new(EYE_COUNT, StdRng::from_os_rng());

    Runtime::run(
        RuntimeConfig {
            title: "Eyes".to_owned(),
            initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        },
        GpuInit::default(),
        app,
    )
}
