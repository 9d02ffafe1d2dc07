//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::{InputField, TextInput};
pub use notification::{Notification, NotificationKind, NotificationQueue};
