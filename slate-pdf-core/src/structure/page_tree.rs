use crate::objects::{Dictionary, Object, ObjectId};

/// The root `/Pages` node. `/Count` is always derived from the kids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageTree {
    kids: Vec<ObjectId>,
}

impl PageTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_kid(&mut self, page: ObjectId) {
        self.kids.push(page);
    }

    pub fn kids(&self) -> &[ObjectId] {
        &self.kids
    }

    pub fn count(&self) -> usize {
        self.kids.len()
    }

    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::with_type("Pages");
        let kids = self.kids.iter().copied().map(Object::Reference).collect();
        dict.set("Kids", Object::Array(kids));
        dict.set("Count", self.count());
        dict
    }
}
