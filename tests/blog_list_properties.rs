use std::cell::RefCell;
use std::rc::Rc;

use bloglist::components::blog_item::{can_remove, like_update, removal_prompt, request_removal};
use bloglist::models::{Blog, OwnerDetails, User, UserRef};
use bloglist::state::{BlogListAction, BlogListState, NotificationCategory, NotificationState};
use yew::Callback;

fn blog(id: &str, title: &str, likes: u32, user: Option<UserRef>) -> Blog {
    Blog {
        id: id.to_string(),
        title: title.to_string(),
        author: "Test Author".to_string(),
        url: "https://testblog.com".to_string(),
        likes,
        user,
    }
}

fn owner(id: &str) -> UserRef {
    UserRef::Full(OwnerDetails {
        id: id.to_string(),
        username: Some("testUser".to_string()),
        name: Some("Test User".to_string()),
    })
}

fn session_user(id: &str) -> User {
    User {
        id: id.to_string(),
        name: "Test User".to_string(),
        username: "testUser".to_string(),
        token: "token".to_string(),
    }
}

#[test]
fn mixed_operations_keep_ids_unique() {
    let mut state = BlogListState::default();
    let mut expected_len = 0;

    for i in 0..10 {
        state.apply(BlogListAction::Add(blog(&i.to_string(), "b", i, None)));
        expected_len += 1;
        assert_eq!(state.len(), expected_len);
    }
    for i in (0..10).step_by(3) {
        state.apply(BlogListAction::Replace {
            id: i.to_string(),
            blog: blog(&i.to_string(), "b", 100, None),
        });
        assert_eq!(state.len(), expected_len);
    }
    for i in (0..10).step_by(2) {
        state.apply(BlogListAction::Remove(i.to_string()));
        expected_len -= 1;
        assert_eq!(state.len(), expected_len);
    }
    state.apply(BlogListAction::Add(blog("1", "dup", 0, None)));
    assert_eq!(state.len(), expected_len);

    let mut ids: Vec<&str> = state.blogs().iter().map(|b| b.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.len());
}

#[test]
fn blogs_render_most_liked_first() {
    let state = BlogListState::new(vec![
        blog("a", "zero", 0, None),
        blog("b", "two", 2, None),
        blog("c", "one", 1, None),
    ]);
    let order: Vec<&str> = state.sorted_by_likes().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(order, ["two", "one", "zero"]);
}

#[test]
fn liking_keeps_the_owner_and_the_remove_control() {
    let me = session_user("u1");
    let mut state = BlogListState::new(vec![blog("b1", "Likeable Blog", 0, Some(owner("u1")))]);
    let before = state.get("b1").cloned().unwrap();
    assert!(can_remove(&before, Some(&me)));

    // the server answers a like with the owner as a bare id
    let update = like_update(&before);
    let response = Blog {
        id: "b1".to_string(),
        title: update.title.clone(),
        author: update.author.clone(),
        url: update.url.clone(),
        likes: update.likes,
        user: update.user.clone().map(UserRef::Id),
    };
    assert!(state.replace("b1", response));

    let after = state.get("b1").unwrap();
    assert_eq!(after.likes, 1);
    assert_eq!(after.user, Some(owner("u1")));
    assert!(can_remove(after, Some(&me)));
    assert!(!can_remove(after, Some(&session_user("u2"))));
}

#[test]
fn declined_removal_keeps_entry_accepted_removes_it() {
    let state = Rc::new(RefCell::new(BlogListState::new(vec![blog(
        "b1",
        "Deletable Blog",
        0,
        Some(owner("u1")),
    )])));
    let on_remove = {
        let state = state.clone();
        Callback::from(move |blog: Blog| state.borrow_mut().apply(BlogListAction::Remove(blog.id)))
    };
    let target = state.borrow().get("b1").cloned().unwrap();
    assert_eq!(removal_prompt(&target), "Remove blog Deletable Blog by Test Author?");

    assert!(!request_removal(&target, |_| false, &on_remove));
    assert_eq!(state.borrow().len(), 1);

    assert!(request_removal(&target, |_| true, &on_remove));
    assert!(state.borrow().is_empty());
}

#[test]
fn only_latest_notification_can_expire() {
    let mut notifications = NotificationState::default();
    let stale = notifications.announce("a new blog Test Blog by Test Author added", NotificationCategory::Success);
    let live = notifications.announce("wrong username or password", NotificationCategory::Error);

    assert!(!notifications.expire(stale));
    assert_eq!(
        notifications.current().map(|n| n.message.as_str()),
        Some("wrong username or password")
    );
    assert!(notifications.expire(live));
    assert!(notifications.current().is_none());
}
