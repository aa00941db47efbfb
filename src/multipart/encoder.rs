use super::{CRLF, find};
use uuid::Uuid;

const BOUNDARY_PREFIX: &str = "----RelayFormBoundary";

/// A single form-data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: value.into().into_bytes(),
        }
    }

    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: Some(filename.into()),
            content_type: Some(content_type.into()),
            data: data.into(),
        }
    }

    fn write_headers(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(b"Content-Disposition: form-data; name=\"");
        out.extend_from_slice(self.name.as_bytes());
        out.push(b'"');
        if let Some(filename) = &self.filename {
            out.extend_from_slice(b"; filename=\"");
            out.extend_from_slice(filename.as_bytes());
            out.push(b'"');
        }
        out.extend_from_slice(CRLF);
        if let Some(content_type) = &self.content_type {
            out.extend_from_slice(b"Content-Type: ");
            out.extend_from_slice(content_type.as_bytes());
            out.extend_from_slice(CRLF);
        }
    }
}

/// An encoded multipart/form-data body together with its boundary.
#[derive(Debug, Clone)]
pub struct Envelope {
    boundary: String,
    body: Vec<u8>,
}

impl Envelope {
    /// Encodes `parts` under a fresh random boundary that occurs in none of them.
    pub fn encode(parts: Vec<FormPart>) -> Self {
        let boundary = loop {
            let candidate = format!("{BOUNDARY_PREFIX}{}", Uuid::new_v4().simple());
            if !parts.iter().any(|part| collides(part, &candidate)) {
                break candidate;
            }
        };

        Self::encode_with_boundary(parts, boundary)
    }

    fn encode_with_boundary(parts: Vec<FormPart>, boundary: String) -> Self {
        let delimiter = format!("--{boundary}");
        let mut body = Vec::with_capacity(
            parts.iter().map(|p| p.data.len() + 128).sum::<usize>() + delimiter.len() + 2,
        );

        for part in &parts {
            body.extend_from_slice(delimiter.as_bytes());
            body.extend_from_slice(CRLF);
            part.write_headers(&mut body);
            body.extend_from_slice(CRLF);
            body.extend_from_slice(&part.data);
            body.extend_from_slice(CRLF);
        }
        body.extend_from_slice(delimiter.as_bytes());
        body.extend_from_slice(b"--");

        Self { boundary, body }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

fn collides(part: &FormPart, boundary: &str) -> bool {
    let needle = boundary.as_bytes();
    find(&part.data, needle).is_some()
        || part.name.contains(boundary)
        || part.filename.as_deref().is_some_and(|f| f.contains(boundary))
}
