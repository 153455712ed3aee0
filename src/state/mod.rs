//! Application state module

mod app_state;
mod assessment;
mod booking;
mod forms;
mod splash_state;
mod toast;

pub use app_state::*;
pub use assessment::*;
pub use booking::*;
pub use forms::*;
pub use splash_state::*;
pub use toast::*;
