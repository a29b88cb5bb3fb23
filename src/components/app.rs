use yew::prelude::*;

use crate::components::{BlogForm, BlogItem, LoginForm, NotificationBanner, Togglable};
use crate::hooks::{use_blogs, use_notification, use_session};
use crate::models::NewBlog;

/// Hides the form right away, then hands the blog to the create flow; the
/// list updates when the server confirms.
fn collapse_then_create(set_visible: Callback<bool>, create: Callback<NewBlog>) -> Callback<NewBlog> {
    Callback::from(move |new_blog: NewBlog| {
        set_visible.emit(false);
        create.emit(new_blog);
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let notifier = use_notification();
    let session = use_session(notifier.clone());
    let blogs = use_blogs(session.client(), notifier.clone());
    let form_visible = use_state(|| false);

    let notification = notifier.current();

    let Some(user) = (*session.user).clone() else {
        return html! {
            <div>
                <h2>{"Log in to application"}</h2>
                <NotificationBanner notification={notification} />
                <LoginForm on_login={session.login.clone()} />
            </div>
        };
    };

    let on_toggle_form = {
        let form_visible = form_visible.clone();
        Callback::from(move |_| form_visible.set(!*form_visible))
    };

    let on_create = {
        let form_visible = form_visible.clone();
        collapse_then_create(
            Callback::from(move |visible| form_visible.set(visible)),
            blogs.create.clone(),
        )
    };

    let on_logout = session.logout.reform(|_: MouseEvent| ());

    html! {
        <div>
            <h2>{"blogs"}</h2>
            <NotificationBanner notification={notification} />
            <p>
                { format!("{} logged in ", user.name) }
                <button onclick={on_logout}>{"logout"}</button>
            </p>
            <Togglable
                button_label="create new blog"
                visible={*form_visible}
                on_toggle={on_toggle_form}
            >
                <BlogForm on_create={on_create} />
            </Togglable>
            { for blogs.state.sorted_by_likes().into_iter().map(|blog| html! {
                <BlogItem
                    key={blog.id.clone()}
                    blog={blog.clone()}
                    user={Some(user.clone())}
                    on_update={blogs.update.clone()}
                    on_remove={blogs.remove.clone()}
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Event {
        Visible(bool),
        Created(String),
    }

    #[test]
    fn creating_collapses_the_form_before_sending() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let on_create = {
            let shown = events.clone();
            let created = events.clone();
            collapse_then_create(
                Callback::from(move |visible| shown.borrow_mut().push(Event::Visible(visible))),
                Callback::from(move |blog: NewBlog| {
                    created.borrow_mut().push(Event::Created(format!("{} by {}", blog.title, blog.author)))
                }),
            )
        };

        on_create.emit(NewBlog {
            title: "Test Blog".to_string(),
            author: "Test Author".to_string(),
            url: "https://test.com".to_string(),
        });

        assert_eq!(
            *events.borrow(),
            [Event::Visible(false), Event::Created("Test Blog by Test Author".to_string())]
        );
    }
}
