//! The application lifecycle.
//!
//! A demo is driven through three hooks, `startup`, `render` and `shutdown`, by whatever owns
//! the frame loop. [`Lifecycle`] holds the GPU resources a demo creates in `startup` and
//! enforces the state order around them.

use std::sync::Arc;

use crate::abs::GraphicsApi;
use crate::config::AppInfo;

/// The hooks a demo implements.
pub trait Application<G: GraphicsApi> {
    /// Adjusts the window configuration. Called once, before the window exists.
    fn init(&self, _info: &mut AppInfo) {}

    /// Creates GPU resources.
    fn startup(&mut self, gl: &Arc<G>) -> Result<(), String>;

    /// Draws one frame at `time` seconds since startup.
    fn render(&mut self, time: f64);

    /// Releases every GPU resource created in [`Application::startup`].
    fn shutdown(&mut self);
}

/// The three states of a demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Running,
    Terminated,
}

/// Owns the resources of a running demo.
#[derive(Debug)]
pub enum Lifecycle<R> {
    Uninitialized,
    Running(R),
    Terminated,
}

impl<R> Default for Lifecycle<R> {
    fn default() -> Self {
        Lifecycle::Uninitialized
    }
}

impl<R> Lifecycle<R> {
    /// Returns the current state.
    pub fn state(&self) -> State {
        match self {
            Lifecycle::Uninitialized => State::Uninitialized,
            Lifecycle::Running(_) => State::Running,
            Lifecycle::Terminated => State::Terminated,
        }
    }

    /// Moves to `Running` with the resources built by `create`.
    ///
    /// Fails without calling `create` unless the lifecycle is `Uninitialized`. If `create`
    /// fails the lifecycle stays `Uninitialized`.
    pub fn start(&mut self, create: impl FnOnce() -> Result<R, String>) -> Result<(), String> {
        if self.state() != State::Uninitialized {
            return Err(format!("cannot start from {:?}", self.state()));
        }
        *self = Lifecycle::Running(create()?);
        Ok(())
    }

    /// Returns the resources while running.
    pub fn running(&self) -> Option<&R> {
        match self {
            Lifecycle::Running(resources) => Some(resources),
            _ => None,
        }
    }

    /// Returns the resources while running.
    pub fn running_mut(&mut self) -> Option<&mut R> {
        match self {
            Lifecycle::Running(resources) => Some(resources),
            _ => None,
        }
    }

    /// Moves to `Terminated`, handing back the resources if there were any.
    pub fn stop(&mut self) -> Option<R> {
        match std::mem::replace(self, Lifecycle::Terminated) {
            Lifecycle::Running(resources) => Some(resources),
            _ => None,
        }
    }
}
