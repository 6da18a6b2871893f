use reqwest::blocking::multipart::{Form, Part};

/// A file picked by the user, carried without any type or size checks.
#[derive(Clone, Debug, PartialEq)]
pub struct FileAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new<N: Into<String>>(file_name: N, bytes: Vec<u8>) -> FileAttachment {
        FileAttachment {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    Text(String),
    File(FileAttachment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPart {
    pub name: String,
    pub value: PartValue,
}

/// Ordered list of named parts. Parts are sent in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartPayload {
    parts: Vec<MultipartPart>,
}

impl MultipartPayload {
    pub fn new() -> MultipartPayload {
        MultipartPayload::default()
    }

    pub fn text<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> MultipartPayload {
        self.parts.push(MultipartPart {
            name: name.into(),
            value: PartValue::Text(value.into()),
        });
        self
    }

    pub fn file<N: Into<String>>(mut self, name: N, file: FileAttachment) -> MultipartPayload {
        self.parts.push(MultipartPart {
            name: name.into(),
            value: PartValue::File(file),
        });
        self
    }

    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.value)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn into_form(self) -> Form {
        self.parts.into_iter().fold(Form::new(), |form, part| match part.value {
            PartValue::Text(value) => form.text(part.name, value),
            PartValue::File(file) => form.part(part.name, Part::bytes(file.bytes).file_name(file.file_name)),
        })
    }
}
