pub mod app;
pub mod blog_form;
pub mod blog_item;
pub mod login_form;
pub mod notification_banner;
pub mod togglable;

pub use app::App;
pub use blog_form::BlogForm;
pub use blog_item::BlogItem;
pub use login_form::LoginForm;
pub use notification_banner::NotificationBanner;
pub use togglable::Togglable;
