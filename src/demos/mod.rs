//! The demo programs. Each one is a self-contained [`Application`](crate::lifecycle::Application).

pub mod movingtri;
pub mod simpletexture;

pub use movingtri::MovingTriangle;
pub use simpletexture::SimpleTexture;
