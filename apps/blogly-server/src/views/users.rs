use blogly_core::domain::{Post, User};

use super::{escape, layout};

pub fn user_list(users: &[User]) -> String {
    let items: String = users
        .iter()
        .map(|u| {
            format!(
                r#"<li><a href="/{id}">{name}</a></li>"#,
                id = u.id,
                name = escape(&u.full_name()),
            )
        })
        .collect();

    layout(
        "Users",
        &format!(
            r#"<h1>Users</h1>
        <ul>{items}</ul>
        <a href="/create">Add user</a>"#
        ),
    )
}

/// Shared fields of the create and edit forms.
fn user_fields(first_name: &str, last_name: &str, image_url: &str) -> String {
    format!(
        r#"<p><label>First Name <input name="first-name" value="{first}"></label></p>
        <p><label>Last Name <input name="last-name" value="{last}"></label></p>
        <p><label>Image URL <input name="image-url" value="{image}"></label></p>"#,
        first = escape(first_name),
        last = escape(last_name),
        image = escape(image_url),
    )
}

pub fn new_user() -> String {
    layout(
        "Create a user",
        &format!(
            r#"<h1>Create a user</h1>
        <form method="POST" action="/">
            {fields}
            <a href="/users">Cancel</a>
            <button type="submit">Add</button>
        </form>"#,
            fields = user_fields("", "", ""),
        ),
    )
}

pub fn user_detail(user: &User, posts: &[Post]) -> String {
    let items: String = posts
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="/{user_id}/{post_id}">{title}</a></li>"#,
                user_id = user.id,
                post_id = p.id,
                title = escape(&p.title),
            )
        })
        .collect();

    let name = user.full_name();
    layout(
        &name,
        &format!(
            r#"<img class="avatar" src="{image}" alt="{name}">
        <h1>{name}</h1>
        <a href="/{id}/edit">Edit</a>
        <form class="inline" method="POST" action="/{id}/delete">
            <button type="submit">Delete</button>
        </form>
        <h2>Posts</h2>
        <ul>{items}</ul>
        <a href="/{id}/posts">Add post</a>"#,
            id = user.id,
            image = escape(&user.image_url),
            name = escape(&name),
        ),
    )
}

pub fn edit_user(user: &User) -> String {
    layout(
        "Edit a user",
        &format!(
            r#"<h1>Edit a user</h1>
        <form method="POST" action="/{id}/edit">
            {fields}
            <a href="/{id}">Cancel</a>
            <button type="submit">Save</button>
        </form>"#,
            id = user.id,
            fields = user_fields(&user.first_name, &user.last_name, &user.image_url),
        ),
    )
}
