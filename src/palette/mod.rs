//! Quick-navigation palette: query classification, the static command table,
//! recents, focus handling and search debouncing. Nothing in here touches the
//! terminal; `app` wires these pieces into the event loop.

pub mod classifier;
pub mod commands;
pub mod debounce;
pub mod focus;
pub mod recents;

pub use classifier::{classify, QueryMode};
pub use commands::{
    cycle_category, filter_commands, get_commands, quick_actions, CommandAction, CommandCategory,
    CommandDefinition,
};
pub use debounce::Debouncer;
pub use focus::{FocusTarget, FocusTrap};
pub use recents::RecentsStore;
