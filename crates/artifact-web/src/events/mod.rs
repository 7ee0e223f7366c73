pub mod pointer;
pub mod window;

pub use pointer::{wire_pointer_move, wire_wheel};
pub use window::wire_resize;
