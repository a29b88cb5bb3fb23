use yew::prelude::*;

use crate::state::{Notification, NotificationCategory};

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationBannerProps {
    #[prop_or_default]
    pub notification: Option<Notification>,
}

pub fn banner_style(category: NotificationCategory) -> String {
    let color = category.color();
    format!(
        "color: {color}; font-size: 20px; padding: 10px; border: 2px solid {color}; border-radius: 5px; margin-bottom: 10px;"
    )
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    let Some(notification) = &props.notification else {
        return html! {};
    };

    html! {
        <div
            class={classes!("notification", notification.category.class())}
            style={banner_style(notification.category)}
        >
            { &notification.message }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NotificationState;
    use yew::ServerRenderer;

    async fn render(notification: Option<Notification>) -> String {
        ServerRenderer::<NotificationBanner>::with_props(move || NotificationBannerProps {
            notification,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn wrong_credentials_render_as_red_error_banner() {
        let mut state = NotificationState::default();
        state.announce("wrong username or password", NotificationCategory::Error);

        let html = render(state.current().cloned()).await;
        assert!(html.contains(">wrong username or password</div>"));
        assert!(html.contains("color: red;"));
        assert!(html.contains("border: 2px solid red;"));
        assert!(html.contains("notification"));
        assert!(!html.contains("logged in"));
    }

    #[tokio::test]
    async fn no_notification_renders_nothing() {
        assert_eq!(render(None).await, "");
    }

    #[test]
    fn error_banner_is_red_with_solid_border() {
        let style = banner_style(NotificationCategory::Error);
        assert!(style.contains("color: red;"));
        assert!(style.contains("border: 2px solid red;"));
    }

    #[test]
    fn success_banner_is_green() {
        let style = banner_style(NotificationCategory::Success);
        assert!(style.contains("color: green;"));
        assert!(style.contains("border: 2px solid green;"));
    }
}
