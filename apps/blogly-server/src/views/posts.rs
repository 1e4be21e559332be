use blogly_core::domain::{Post, Tag, User};
use blogly_shared::dto::TAGS_FIELD;

use super::{escape, layout};

/// One checkbox per tag; `selected` ids start checked.
fn tag_checkboxes(tags: &[Tag], selected: &[i32]) -> String {
    tags.iter()
        .map(|t| {
            format!(
                r#"<label><input type="checkbox" name="{field}" value="{id}"{checked}> {name}</label><br>"#,
                field = TAGS_FIELD,
                id = t.id,
                checked = if selected.contains(&t.id) { " checked" } else { "" },
                name = escape(&t.name),
            )
        })
        .collect()
}

fn post_fields(title: &str, content: &str, tags: &[Tag], selected: &[i32]) -> String {
    format!(
        r#"<p><label>Title <input name="title" value="{title}"></label></p>
        <p><label>Content <textarea name="content">{content}</textarea></label></p>
        <fieldset><legend>Tags</legend>{boxes}</fieldset>"#,
        title = escape(title),
        content = escape(content),
        boxes = tag_checkboxes(tags, selected),
    )
}

pub fn new_post(user: &User, tags: &[Tag]) -> String {
    let name = escape(&user.full_name());
    layout(
        "Add post",
        &format!(
            r#"<h1>Add post for {name}</h1>
        <form method="POST" action="/{id}">
            {fields}
            <a href="/{id}">Cancel</a>
            <button type="submit">Add</button>
        </form>"#,
            id = user.id,
            fields = post_fields("", "", tags, &[]),
        ),
    )
}

pub fn post_detail(user: &User, post: &Post, tags: &[Tag]) -> String {
    let tag_badges: String = tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape(&t.name)))
        .collect();

    layout(
        &post.title,
        &format!(
            r#"<h1>{title}</h1>
        <p>{content}</p>
        <p class="meta">By <a href="/{user_id}">{author}</a> on {date}</p>
        <p>{tag_badges}</p>
        <a href="/{user_id}">Cancel</a>
        <a href="/{user_id}/{post_id}/edit">Edit</a>
        <form class="inline" method="POST" action="/{user_id}/{post_id}/delete">
            <button type="submit">Delete</button>
        </form>"#,
            title = escape(&post.title),
            content = escape(&post.content),
            user_id = user.id,
            post_id = post.id,
            author = escape(&user.full_name()),
            date = escape(&post.friendly_date()),
        ),
    )
}

pub fn edit_post(user: &User, post: &Post, tags: &[Tag], selected: &[i32]) -> String {
    layout(
        "Edit post",
        &format!(
            r#"<h1>Edit post</h1>
        <form method="POST" action="/{user_id}/{post_id}/edit">
            {fields}
            <a href="/{user_id}/{post_id}">Cancel</a>
            <button type="submit">Save</button>
        </form>"#,
            user_id = user.id,
            post_id = post.id,
            fields = post_fields(&post.title, &post.content, tags, selected),
        ),
    )
}
