pub mod components;
pub mod layout;
pub mod login;

pub use layout::base;
pub use login::login;
