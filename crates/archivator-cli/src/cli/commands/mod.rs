//! CLI command handlers, one file per command.

mod archives;
mod assets;
mod index;
mod resolve;
mod slug;

pub use archives::run_archives;
pub use assets::{run_assets, AssetsOptions};
pub use index::run_index;
pub use resolve::run_resolve;
pub use slug::run_slug;
