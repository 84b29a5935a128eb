//! Application lifecycle.

use std::ops::ControlFlow;

/// Hooks an engine user implements to plug into the [`Lifecycle`].
pub trait Application {
    /// Advances the application state by one frame.
    ///
    /// Returning [`ControlFlow::Break`] stops the [`Lifecycle`] after this frame; the frame is
    /// not rendered.
    fn on_update(&mut self) -> ControlFlow<()>;

    /// Presents the current application state.
    fn on_render(&mut self);
}

/// Drives an [`Application`] through input, update and render steps until it asks to stop.
pub struct Lifecycle<A> {
    app: A,
    running: bool,
    frames: u64,
}

impl<A: Application> Lifecycle<A> {
    /// Wraps `app` in a lifecycle that has not run any frames yet.
    pub fn new(app: A) -> Self {
        Self {
            app,
            running: true,
            frames: 0,
        }
    }

    /// Returns whether the lifecycle will execute another frame.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns the number of frames executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns a reference to the driven application.
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Consumes the lifecycle, returning the application.
    pub fn into_inner(self) -> A {
        self.app
    }

    /// Runs frames until the application returns [`ControlFlow::Break`] from
    /// [`Application::on_update`], then shuts down.
    ///
    /// Returns the number of frames executed by this call.
    pub fn run(&mut self) -> u64 {
        log::debug!("starting application");
        let start = self.frames;
        while self.running {
            self.process_input();
            self.update();
            if self.running {
                self.render();
            }
            self.frames += 1;
        }
        self.shut_down();
        self.frames - start
    }

    fn process_input(&mut self) {
        // no input sources yet
    }

    fn update(&mut self) {
        log::trace!("frame {}: update", self.frames);
        if self.app.on_update().is_break() {
            log::debug!("application requested exit in frame {}", self.frames);
            self.running = false;
        }
    }

    fn render(&mut self) {
        log::trace!("frame {}: render", self.frames);
        self.app.on_render();
    }

    /// Stops the lifecycle. Calling this more than once has no further effect.
    pub fn shut_down(&mut self) {
        if self.running {
            log::debug!("shutdown requested after {} frames", self.frames);
            self.running = false;
        } else {
            log::debug!("shut down after {} frames", self.frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
        remaining: u32,
    }

    impl Application for Recorder {
        fn on_update(&mut self) -> ControlFlow<()> {
            self.events.push("update");
            if self.remaining == 0 {
                return ControlFlow::Break(());
            }
            self.remaining -= 1;
            ControlFlow::Continue(())
        }

        fn on_render(&mut self) {
            self.events.push("render");
        }
    }

    #[test]
    fn update_render_order() {
        let mut lifecycle = Lifecycle::new(Recorder {
            remaining: 2,
            ..Default::default()
        });
        assert!(lifecycle.running());

        assert_eq!(lifecycle.run(), 3);
        assert!(!lifecycle.running());
        assert_eq!(lifecycle.frames(), 3);
        assert_eq!(
            lifecycle.into_inner().events,
            ["update", "render", "update", "render", "update"],
        );
    }

    #[test]
    fn immediate_exit() {
        let mut lifecycle = Lifecycle::new(Recorder::default());
        assert_eq!(lifecycle.run(), 1);
        assert_eq!(lifecycle.app().events, ["update"]);

        // A stopped lifecycle does not run again.
        assert_eq!(lifecycle.run(), 0);
        assert_eq!(lifecycle.app().events, ["update"]);
    }

    #[test]
    fn shut_down_before_run() {
        let mut lifecycle = Lifecycle::new(Recorder::default());
        lifecycle.shut_down();
        lifecycle.shut_down();
        assert!(!lifecycle.running());
        assert_eq!(lifecycle.run(), 0);
        assert!(lifecycle.app().events.is_empty());
    }
}
