pub mod ascii;
mod layout;

pub use ascii::Renderer;
