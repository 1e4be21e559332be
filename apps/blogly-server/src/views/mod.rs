//! Server-rendered HTML pages.
//!
//! Every page is a `format!` template wrapped in [`layout`]. All user-supplied
//! text passes through [`escape`] before interpolation.

mod posts;
mod tags;
mod users;

pub use posts::{edit_post, new_post, post_detail};
pub use tags::{edit_tag, new_tag, tag_list};
pub use users::{edit_user, new_user, user_detail, user_list};

use blogly_core::domain::AuthoredPost;

/// Escape text for use in HTML bodies and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell and navigation bar.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title} | Blogly</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 720px; margin: 0 auto; padding: 20px; }}
        nav a {{ margin-right: 12px; }}
        .avatar {{ max-width: 160px; border-radius: 4px; }}
        .tag {{ display: inline-block; background: #eee; padding: 2px 8px; border-radius: 10px; margin-right: 4px; }}
        .meta {{ color: #666; font-size: 14px; }}
        form.inline {{ display: inline; }}
    </style>
</head>
<body>
    <div class="container">
        <nav>
            <a href="/">Blogly</a>
            <a href="/users">Users</a>
            <a href="/tag/list">Tags</a>
        </nav>
        {body}
    </div>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

/// Homepage: the most recent posts across all users.
pub fn home(latest: &[AuthoredPost]) -> String {
    let items: String = latest
        .iter()
        .map(|entry| {
            format!(
                r#"<li>
                <a href="/{user_id}/{post_id}">{title}</a>
                <div class="meta">by {author} on {date}</div>
            </li>"#,
                user_id = entry.post.user_id,
                post_id = entry.post.id,
                title = escape(&entry.post.title),
                author = escape(&entry.author.full_name()),
                date = escape(&entry.post.friendly_date()),
            )
        })
        .collect();

    let body = if latest.is_empty() {
        "<p>No posts yet.</p>".to_string()
    } else {
        format!("<ul>{items}</ul>")
    };

    layout(
        "Recent posts",
        &format!("<h1>Blogly Recent Posts</h1>\n{body}"),
    )
}

/// The only error page: unknown routes and ids that do not resolve.
pub fn not_found() -> String {
    layout(
        "Not found",
        r#"<h1>Page not found</h1>
        <p>That page does not exist. <a href="/">Back to the homepage</a>.</p>"#,
    )
}
