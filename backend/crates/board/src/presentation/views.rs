//! Board Views
//!
//! Comment text is untrusted; the `.html` templates escape it on output.

use askama::Template;

use crate::domain::entities::Comment;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub user_id: i64,
    pub csrf_token: &'a str,
    pub comments: &'a [Comment],
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate;
