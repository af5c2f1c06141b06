use bytes::Bytes;

/// An upload as it arrives from the client, before decoding.
#[derive(Debug, Clone)]
pub enum RawUpload {
    Binary { filename: String, data: Bytes },
    Embedded(String),
}

/// A normalized upload: binary bytes plus the name they will be stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub filename: String,
    pub data: Bytes,
}
