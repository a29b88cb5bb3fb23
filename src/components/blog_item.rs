use yew::prelude::*;

use crate::models::{Blog, BlogUpdate, User};

const BLOG_STYLE: &str = "padding-top: 10px; padding-left: 2px; border: solid; border-width: 1px; margin-bottom: 5px;";

/// Body for a like: one more like, owner sent as a bare id.
pub fn like_update(blog: &Blog) -> BlogUpdate {
    BlogUpdate {
        title: blog.title.clone(),
        author: blog.author.clone(),
        url: blog.url.clone(),
        likes: blog.likes + 1,
        user: blog.owner().map(|owner| owner.id),
    }
}

pub fn removal_prompt(blog: &Blog) -> String {
    format!("Remove blog {} by {}?", blog.title, blog.author)
}

/// The remove control exists only for the blog's owner.
pub fn can_remove(blog: &Blog, user: Option<&User>) -> bool {
    blog.is_owned_by(user)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Asks `confirm` with the removal prompt and emits only on acceptance.
/// Returns whether the removal went ahead.
pub fn request_removal(
    blog: &Blog,
    confirm: impl FnOnce(&str) -> bool,
    on_remove: &Callback<Blog>,
) -> bool {
    if confirm(&removal_prompt(blog)) {
        on_remove.emit(blog.clone());
        true
    } else {
        log::info!("↩️ Removal of {} cancelled", blog.id);
        false
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BlogItemProps {
    pub blog: Blog,
    #[prop_or_default]
    pub user: Option<User>,
    pub on_update: Callback<(String, BlogUpdate)>,
    pub on_remove: Callback<Blog>,
    /// Start with the details shown.
    #[prop_or_default]
    pub initially_expanded: bool,
}

#[function_component(BlogItem)]
pub fn blog_item(props: &BlogItemProps) -> Html {
    let expanded = use_state(|| props.initially_expanded);
    let blog = &props.blog;

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let on_like = {
        let blog = blog.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |_: MouseEvent| {
            on_update.emit((blog.id.clone(), like_update(&blog)));
        })
    };

    let on_remove_click = {
        let blog = blog.clone();
        let on_remove = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| {
            request_removal(&blog, confirm, &on_remove);
        })
    };

    let show_remove = can_remove(blog, props.user.as_ref());

    html! {
        <div class="blog" style={BLOG_STYLE}>
            <div class="blog-title-author">
                { format!("{} {}", blog.title, blog.author) }
                <button onclick={on_toggle}>{ if *expanded { "hide" } else { "view" } }</button>
            </div>
            if *expanded {
                <div class="blog-details">
                    <div class="blog-url">{ &blog.url }</div>
                    <div class="blog-likes">
                        { format!("likes {}", blog.likes) }
                        <button onclick={on_like}>{"like"}</button>
                    </div>
                    if show_remove {
                        <button onclick={on_remove_click}>{"remove"}</button>
                    }
                </div>
            }
        </div>
    }
}
