use std::ops::ControlFlow;

use fastrand::Rng;
use rapture::{
    math::{Mat3, Vec3},
    Application, Config, Lifecycle,
};

/// Composes one random 3x3 matrix into a running transform per frame and prints it.
struct Demo {
    rng: Rng,
    transform: Mat3,
    frames_left: u64,
    rendered: u64,
}

impl Demo {
    fn new(config: &Config) -> Self {
        Self {
            rng: Rng::with_seed(config.seed),
            transform: Mat3::IDENTITY,
            frames_left: config.frames,
            rendered: 0,
        }
    }
}

impl Application for Demo {
    fn on_update(&mut self) -> ControlFlow<()> {
        if self.frames_left == 0 {
            return ControlFlow::Break(());
        }
        self.frames_left -= 1;
        self.transform *= Mat3::random(&mut self.rng);
        ControlFlow::Continue(())
    }

    fn on_render(&mut self) {
        self.rendered += 1;
        println!("{}", self.transform);
        log::debug!("transformed X axis: {:?}", self.transform * Vec3::X);
    }
}

fn main() -> anyhow::Result<()> {
    rapture::init_logger!();

    let config = Config::from_env()?;
    let mut lifecycle = Lifecycle::new(Demo::new(&config));
    let frames = lifecycle.run();
    log::info!(
        "rendered {} frames ({frames} including the exit frame)",
        lifecycle.app().rendered
    );
    Ok(())
}
