pub mod electron;
pub mod elements;

pub use electron::Electron;
pub use elements::{AtomConfig, Element, ShellSpec};
