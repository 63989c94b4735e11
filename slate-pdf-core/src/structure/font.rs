use crate::objects::{Dictionary, Object};

/// A standard Type1 font shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct FontResource {
    base_font: String,
}

impl FontResource {
    pub fn new(base_font: impl Into<String>) -> Self {
        Self {
            base_font: base_font.into(),
        }
    }

    pub fn base_font(&self) -> &str {
        &self.base_font
    }

    pub fn set_base_font(&mut self, base_font: impl Into<String>) {
        self.base_font = base_font.into();
    }

    pub fn to_dict(&self) -> Dictionary {
        let mut dict = Dictionary::with_type("Font");
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name(self.base_font.clone()));
        dict
    }
}

impl Default for FontResource {
    fn default() -> Self {
        Self::new("Helvetica")
    }
}
