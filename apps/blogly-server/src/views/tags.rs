use blogly_core::domain::{Post, Tag};

use super::{escape, layout};

pub fn tag_list(tags: &[Tag]) -> String {
    let items: String = tags
        .iter()
        .map(|t| {
            format!(
                r#"<li><a href="/tag/{id}">{name}</a></li>"#,
                id = t.id,
                name = escape(&t.name),
            )
        })
        .collect();

    layout(
        "Tags",
        &format!(
            r#"<h1>Tags</h1>
        <ul>{items}</ul>
        <a href="/create/tag">Add tag</a>"#
        ),
    )
}

pub fn new_tag() -> String {
    layout(
        "Create a tag",
        r#"<h1>Create a tag</h1>
        <form method="POST" action="/tag/list">
            <p><label>Name <input name="name"></label></p>
            <a href="/tag/list">Cancel</a>
            <button type="submit">Add</button>
        </form>"#,
    )
}

/// Rename form, plus the posts that currently carry the tag.
pub fn edit_tag(tag: &Tag, posts: &[Post]) -> String {
    let items: String = posts
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="/{user_id}/{post_id}">{title}</a></li>"#,
                user_id = p.user_id,
                post_id = p.id,
                title = escape(&p.title),
            )
        })
        .collect();

    layout(
        &tag.name,
        &format!(
            r#"<h1>Edit tag</h1>
        <form method="POST" action="/tag/{id}">
            <p><label>Name <input name="name" value="{name}"></label></p>
            <a href="/tag/list">Cancel</a>
            <button type="submit">Save</button>
        </form>
        <form method="POST" action="/tag/{id}/delete">
            <button type="submit">Delete</button>
        </form>
        <h2>Posts tagged {name}</h2>
        <ul>{items}</ul>"#,
            id = tag.id,
            name = escape(&tag.name),
        ),
    )
}
