pub mod form;
pub mod letter;
pub mod state;

pub use form::*;
pub use letter::*;
pub use state::*;
