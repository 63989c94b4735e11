use crate::error::Result;
use crate::graphics::ContentStreamBuilder;
use crate::objects::ObjectId;
use crate::table::{render_table, Table};
use crate::text::TextElement;

/// Something drawn on a page, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentElement {
    Text(TextElement),
    Table(Table),
}

impl ContentElement {
    /// Content-stream operators for this element.
    pub fn render(&self) -> String {
        match self {
            ContentElement::Text(text) => {
                let mut line = text.render();
                line.push('\n');
                line
            }
            ContentElement::Table(table) => {
                let mut ops = ContentStreamBuilder::new();
                render_table(&table.to_fixed_table(), &mut ops);
                ops.operations().to_string()
            }
        }
    }
}

/// Builder for one page's content stream.
///
/// Elements are kept in the order they were added and compiled into the
/// page's contents stream when the document is written.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    page_id: ObjectId,
    contents_id: ObjectId,
    elements: Vec<ContentElement>,
}

impl PageContent {
    pub(crate) fn new(page_id: ObjectId, contents_id: ObjectId) -> Self {
        Self {
            page_id,
            contents_id,
            elements: Vec::new(),
        }
    }

    /// Object id of the `/Page` dictionary.
    pub fn page_id(&self) -> ObjectId {
        self.page_id
    }

    /// Object id of the contents stream.
    pub fn contents_id(&self) -> ObjectId {
        self.contents_id
    }

    pub fn elements(&self) -> &[ContentElement] {
        &self.elements
    }

    /// Places `text` with its baseline at `(x, y)`.
    pub fn add_text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size: f64,
    ) -> Result<&mut Self> {
        let element = TextElement::new(text, x, y, font_size)?;
        Ok(self.add_text_element(element))
    }

    pub fn add_text_element(&mut self, element: TextElement) -> &mut Self {
        self.elements.push(ContentElement::Text(element));
        self
    }

    /// Adds a table and returns it for further editing. The table is
    /// rendered from its state at write time.
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.elements.push(ContentElement::Table(table));
        match self.elements.last_mut() {
            Some(ContentElement::Table(table)) => table,
            _ => unreachable!("a table was just pushed"),
        }
    }

    /// Tables on this page, in insertion order.
    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.elements.iter_mut().filter_map(|element| match element {
            ContentElement::Table(table) => Some(table),
            ContentElement::Text(_) => None,
        })
    }

    /// Concatenates every element's operators, without trailing whitespace.
    pub fn compile(&self) -> Vec<u8> {
        let mut content = String::new();
        for element in &self.elements {
            content.push_str(&element.render());
        }
        content.truncate(content.trim_end().len());
        content.into_bytes()
    }
}
