/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod error;
pub mod instant;
pub mod retry;

pub use crate::error::Error;
pub use crate::instant::Instant;

/// Binary data, e.g. the raw bytes of an image.
///
/// On the wire this is a base64 string; the model crate owns that encoding.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<Vec<u8>> for Blob {
    fn from(inner: Vec<u8>) -> Self {
        Blob { inner }
    }
}

impl From<&[u8]> for Blob {
    fn from(data: &[u8]) -> Self {
        Blob::new(data)
    }
}

#[cfg(test)]
mod test {
    use crate::Blob;

    #[test]
    fn blob_exposes_bytes() {
        let blob = Blob::new("jpeg!");
        assert_eq!(blob.as_ref(), b"jpeg!");
        assert_eq!(blob.len(), 5);
        assert!(!blob.is_empty());
        assert!(Blob::default().is_empty());
        assert_eq!(Blob::from(b"jpeg!".to_vec()), blob);
        assert_eq!(blob.into_inner(), b"jpeg!".to_vec());
    }
}
