use fakeset_schema::{authors, books};

pub fn book(id: i32, title: &str) -> books::Model {
    books::Model {
        id,
        author_id: 1,
        title: title.into(),
        page_count: 100 + id,
        is_published: true,
    }
}

pub fn draft(id: i32, title: &str) -> books::Model {
    books::Model {
        is_published: false,
        ..book(id, title)
    }
}

pub fn author(id: i32, name: &str) -> authors::Model {
    authors::Model {
        id,
        name: name.into(),
    }
}

pub fn titles(rows: impl IntoIterator<Item = books::Model>) -> Vec<String> {
    rows.into_iter().map(|b| b.title).collect()
}
