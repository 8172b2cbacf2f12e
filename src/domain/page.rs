use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub body: String,
    pub image_path: String,
}

impl Page {
    // a page with no file behind it yet; the edit form starts from this
    pub fn empty(title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: String::new(),
            image_path: String::new(),
        }
    }
}
