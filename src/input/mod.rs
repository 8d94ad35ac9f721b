//! Input collaborators: the key-to-action table and action dispatch.

mod keymap;

pub use keymap::{dispatch, map_key, Action};
