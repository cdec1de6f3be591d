pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_modal_keys;
pub use pointer::wire_modal_clicks;
