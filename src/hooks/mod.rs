pub mod use_blogs;
pub mod use_notification;
pub mod use_session;

pub use use_blogs::{use_blogs, UseBlogsHandle};
pub use use_notification::{use_notification, UseNotificationHandle};
pub use use_session::{use_session, UseSessionHandle};
