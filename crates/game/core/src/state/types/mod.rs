pub mod category;
pub mod common;
pub mod option;
pub mod progress;

pub use category::Category;
pub use common::{CategoryId, Pointer};
pub use option::{CategoryOption, OptionState};
pub use progress::ProgressState;
