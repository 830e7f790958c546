//! Background work: sheet connection lifecycle and periodic refresh

mod refresh;
mod sync;

pub use refresh::RefreshScheduler;
pub use sync::{SheetSync, EMPTY_INPUT_MESSAGE, FETCHING_MESSAGE, INVALID_LINK_MESSAGE};
