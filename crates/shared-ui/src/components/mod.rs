// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod stat_card;
pub mod textarea;

// Primitive wrappers
pub mod switch;
pub mod toast;

// Depends on button
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use sidebar::*;
pub use stat_card::*;
pub use switch::*;
pub use textarea::*;
pub use toast::*;
