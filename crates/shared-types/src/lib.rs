pub mod error;
pub mod feature_flags;
pub mod forms;
pub mod models;
pub mod records;
pub mod view;

pub use error::*;
pub use feature_flags::*;
pub use forms::*;
pub use models::*;
pub use records::*;
pub use view::*;
