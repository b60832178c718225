//! Per-actor sequence state machines for dialogue and cinematic content.

mod cinematic;
mod dialogue;

pub use cinematic::*;
pub use dialogue::*;
