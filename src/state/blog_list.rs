// ============================================================================
// BLOG LIST STATE - canonical, insertion-ordered collection of blogs
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{Blog, UserRef};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogListState {
    blogs: Vec<Blog>,
}

/// Mutations dispatched from async completions. Each one is applied to the
/// latest state, so overlapping requests resolve in completion order.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogListAction {
    Load(Vec<Blog>),
    Add(Blog),
    Replace { id: String, blog: Blog },
    Remove(String),
}

/// Picks the `user` for a replaced entry: the server's value, unless it is
/// less complete than what we already hold for the same owner. An incoming
/// shape with no readable id never displaces a known owner.
pub fn merge_owner(prior: Option<&UserRef>, incoming: Option<UserRef>) -> Option<UserRef> {
    match (prior, incoming) {
        (Some(prior), None) => Some(prior.clone()),
        (Some(prior), Some(incoming))
            if incoming.completeness() < prior.completeness()
                && incoming.id().map_or(true, |id| Some(id) == prior.id()) =>
        {
            Some(prior.clone())
        }
        (_, incoming) => incoming,
    }
}

impl BlogListState {
    pub fn new(blogs: Vec<Blog>) -> Self {
        Self { blogs }
    }

    pub fn blogs(&self) -> &[Blog] {
        &self.blogs
    }

    pub fn len(&self) -> usize {
        self.blogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blogs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Blog> {
        self.blogs.iter().find(|blog| blog.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.blogs.iter().position(|blog| blog.id == id)
    }

    pub fn load(&mut self, blogs: Vec<Blog>) {
        self.blogs = blogs;
    }

    /// Appends a server-confirmed blog. An id already present is replaced
    /// in place so ids never collide.
    pub fn add(&mut self, blog: Blog) {
        match self.position(&blog.id) {
            Some(index) => {
                log::warn!("⚠️ Blog {} already listed, replacing it", blog.id);
                self.blogs[index] = blog;
            }
            None => self.blogs.push(blog),
        }
    }

    /// Substitutes the entry with `id`. Returns false when it is gone
    /// (e.g. removed while the update was in flight).
    pub fn replace(&mut self, id: &str, updated: Blog) -> bool {
        let Some(index) = self.position(id) else {
            log::warn!("⚠️ Blog {} not found for update", id);
            return false;
        };
        let user = merge_owner(self.blogs[index].user.as_ref(), updated.user.clone());
        self.blogs[index] = Blog { user, ..updated };
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.blogs.len();
        self.blogs.retain(|blog| blog.id != id);
        self.blogs.len() != before
    }

    /// Display order: most liked first. `sort_by` is stable, so ties keep
    /// insertion order. The stored order is left untouched.
    pub fn sorted_by_likes(&self) -> Vec<&Blog> {
        let mut view: Vec<&Blog> = self.blogs.iter().collect();
        view.sort_by(|a, b| b.likes.cmp(&a.likes));
        view
    }

    pub fn apply(&mut self, action: BlogListAction) {
        match action {
            BlogListAction::Load(blogs) => self.load(blogs),
            BlogListAction::Add(blog) => self.add(blog),
            BlogListAction::Replace { id, blog } => {
                self.replace(&id, blog);
            }
            BlogListAction::Remove(id) => {
                self.remove(&id);
            }
        }
    }
}

impl Reducible for BlogListState {
    type Action = BlogListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
