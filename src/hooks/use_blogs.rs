// ============================================================================
// USE BLOGS HOOK - blog list plus the API calls that mutate it
// ============================================================================
// Requests are not serialized. Completions dispatch reducer actions, so two
// overlapping likes resolve in whatever order the responses arrive.
// ============================================================================

use yew::prelude::*;

use crate::hooks::UseNotificationHandle;
use crate::models::{Blog, BlogUpdate, NewBlog};
use crate::services::ApiClient;
use crate::state::{BlogListAction, BlogListState};

pub struct UseBlogsHandle {
    pub state: UseReducerHandle<BlogListState>,
    pub create: Callback<NewBlog>,
    pub update: Callback<(String, BlogUpdate)>,
    pub remove: Callback<Blog>,
}

#[hook]
pub fn use_blogs(client: ApiClient, notifier: UseNotificationHandle) -> UseBlogsHandle {
    let state = use_reducer(BlogListState::default);

    // Initial load
    {
        let dispatcher = state.dispatcher();
        let client = client.clone();
        let notifier = notifier.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match client.list_blogs().await {
                    Ok(blogs) => dispatcher.dispatch(BlogListAction::Load(blogs)),
                    Err(e) => notifier.error(e.user_message("load blogs")),
                }
            });
            || ()
        });
    }

    let create = {
        let dispatcher = state.dispatcher();
        let client = client.clone();
        let notifier = notifier.clone();
        Callback::from(move |new_blog: NewBlog| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.create_blog(&new_blog).await {
                    Ok(created) => {
                        notifier.success(format!("a new blog {} by {} added", created.title, created.author));
                        dispatcher.dispatch(BlogListAction::Add(created));
                    }
                    Err(e) => notifier.error(e.user_message("create blog")),
                }
            });
        })
    };

    let update = {
        let dispatcher = state.dispatcher();
        let client = client.clone();
        let notifier = notifier.clone();
        Callback::from(move |(id, changes): (String, BlogUpdate)| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.update_blog(&id, &changes).await {
                    Ok(updated) => {
                        notifier.success(format!("liked {} by {}", updated.title, updated.author));
                        dispatcher.dispatch(BlogListAction::Replace { id, blog: updated });
                    }
                    Err(e) => notifier.error(e.user_message("update blog")),
                }
            });
        })
    };

    let remove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |blog: Blog| {
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.delete_blog(&blog.id).await {
                    Ok(()) => {
                        notifier.success(format!("blog {} by {} removed", blog.title, blog.author));
                        dispatcher.dispatch(BlogListAction::Remove(blog.id));
                    }
                    Err(e) => notifier.error(e.user_message("remove blog")),
                }
            });
        })
    };

    UseBlogsHandle {
        state,
        create,
        update,
        remove,
    }
}
