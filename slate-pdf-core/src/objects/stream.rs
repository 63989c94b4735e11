/// Raw payload of a stream object.
///
/// The `/Length` entry is never stored; it is derived from the payload
/// when the object is written, so it always matches the bytes emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stream {
    data: Vec<u8>,
}

impl Stream {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
