//! Two small OpenGL demos: a moving triangle and a procedurally textured triangle.
//!
//! The demos implement [`lifecycle::Application`] against the [`abs::GraphicsApi`] seam and
//! are run by [`abs::run`], which owns the SDL2 window and the frame loop.

pub mod abs;
pub mod config;
pub mod demos;
pub mod lifecycle;
pub mod logging;

#[cfg(test)]
mod testing;
