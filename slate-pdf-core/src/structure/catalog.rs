use crate::objects::{Dictionary, Object, ObjectId};

/// Document root: `<< /Type /Catalog /Pages 2 0 R >>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pages: ObjectId,
}

impl Catalog {
    pub fn new(pages: ObjectId) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> ObjectId {
        self.pages
    }

    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::with_type("Catalog");
        dict.set("Pages", Object::Reference(self.pages));
        dict
    }
}
