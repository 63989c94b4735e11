use crate::objects::{Dictionary, Object, ObjectId, Stream};

/// Content of an indirect object in the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBody {
    /// A direct value, usually a dictionary.
    Value(Object),
    /// A stream; its dictionary is `<< /Length N >>`.
    Stream(Stream),
}

/// A numbered object owned by the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    id: ObjectId,
    body: ObjectBody,
}

impl IndirectObject {
    pub fn new(id: ObjectId, body: ObjectBody) -> Self {
        Self { id, body }
    }

    pub fn dictionary(id: ObjectId, dict: Dictionary) -> Self {
        Self::new(id, ObjectBody::Value(Object::Dictionary(dict)))
    }

    pub fn stream(id: ObjectId, stream: Stream) -> Self {
        Self::new(id, ObjectBody::Stream(stream))
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn body(&self) -> &ObjectBody {
        &self.body
    }

    pub(crate) fn set_body(&mut self, body: ObjectBody) {
        self.body = body;
    }

    pub fn as_stream(&self) -> Option<&Stream> {
        match &self.body {
            ObjectBody::Stream(stream) => Some(stream),
            ObjectBody::Value(_) => None,
        }
    }

    pub(crate) fn as_stream_mut(&mut self) -> Option<&mut Stream> {
        match &mut self.body {
            ObjectBody::Stream(stream) => Some(stream),
            ObjectBody::Value(_) => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match &self.body {
            ObjectBody::Value(value) => value.as_dict(),
            ObjectBody::Stream(_) => None,
        }
    }
}
