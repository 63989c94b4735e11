use crate::objects::{Dictionary, Object, ObjectId};
use crate::page_size::PageSize;

/// A `/Page` dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct PageNode {
    parent: ObjectId,
    contents: ObjectId,
    media_box: Option<PageSize>,
    font_resource: String,
    font: ObjectId,
}

impl PageNode {
    pub fn new(
        parent: ObjectId,
        contents: ObjectId,
        media_box: Option<PageSize>,
        font_resource: impl Into<String>,
        font: ObjectId,
    ) -> Self {
        Self {
            parent,
            contents,
            media_box,
            font_resource: font_resource.into(),
            font,
        }
    }

    pub fn contents(&self) -> ObjectId {
        self.contents
    }

    pub fn media_box(&self) -> Option<PageSize> {
        self.media_box
    }

    /// `/MediaBox` is omitted when no page size is set.
    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::with_type("Page");
        dict.set("Parent", Object::Reference(self.parent));
        if let Some(size) = self.media_box {
            dict.set("MediaBox", size.media_box());
        }
        dict.set("Contents", Object::Reference(self.contents));

        let mut fonts = Dictionary::new();
        fonts.set(self.font_resource.clone(), Object::Reference(self.font));
        let mut resources = Dictionary::new();
        resources.set("Font", fonts);
        dict.set("Resources", resources);
        dict
    }
}
