pub mod common;
pub mod letter;
pub mod result;
pub mod system;

pub use common::*;
pub use letter::*;
pub use result::*;
pub use system::*;

use std::fmt;

/// Bridge from a view model to its console layout.
///
/// JSON output never goes through this; it serializes the view model.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
