use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::NewBlog;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogFormProps {
    pub on_create: Callback<NewBlog>,
}

fn text_input(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
    })
}

/// Emits the typed fields as one [`NewBlog`].
pub fn submit_blog(title: &str, author: &str, url: &str, on_create: &Callback<NewBlog>) {
    on_create.emit(NewBlog {
        title: title.to_string(),
        author: author.to_string(),
        url: url.to_string(),
    });
}

/// Emits exactly `{ title, author, url }` and clears itself.
#[function_component(BlogForm)]
pub fn blog_form(props: &BlogFormProps) -> Html {
    let title = use_state(String::new);
    let author = use_state(String::new);
    let url = use_state(String::new);

    let on_submit = {
        let title = title.clone();
        let author = author.clone();
        let url = url.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit_blog(&title, &author, &url, &on_create);
            title.set(String::new());
            author.set(String::new());
            url.set(String::new());
        })
    };

    html! {
        <div>
            <h2>{"create new"}</h2>
            <form onsubmit={on_submit}>
                <div>
                    <label>
                        {"title"}
                        <input type="text" value={(*title).clone()} oninput={text_input(&title)} />
                    </label>
                </div>
                <div>
                    <label>
                        {"author"}
                        <input type="text" value={(*author).clone()} oninput={text_input(&author)} />
                    </label>
                </div>
                <div>
                    <label>
                        {"url"}
                        <input type="text" value={(*url).clone()} oninput={text_input(&url)} />
                    </label>
                </div>
                <button type="submit">{"create"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn form_has_labelled_inputs_and_create_button() {
        let html = ServerRenderer::<BlogForm>::with_props(|| BlogFormProps {
            on_create: Callback::from(|_| ()),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.contains("<h2>create new</h2>"));
        for label in ["title", "author", "url"] {
            assert!(html.contains(&format!("<label>{label}")), "missing {label}");
        }
        assert!(html.contains(">create</button>"));
    }

    #[test]
    fn submit_emits_exactly_title_author_url() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let on_create = {
            let received = received.clone();
            Callback::from(move |blog: NewBlog| received.borrow_mut().push(blog))
        };

        submit_blog("Test Blog", "Test Author", "https://test.com", &on_create);

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(
            serde_json::to_value(&received[0]).unwrap(),
            json!({"title": "Test Blog", "author": "Test Author", "url": "https://test.com"})
        );
    }
}
