//! Payload compression for distributed tiers
//!
//! Stored payloads start with a one-byte marker naming the codec, followed
//! by the (possibly compressed) bytes. Compression is only applied when the
//! caller permits it, the payload reaches the threshold and the compressed
//! form is actually smaller. Decompression stops at a maximum decoded size.

use crate::constants::{COMPRESSION_THRESHOLD_BYTES, PAYLOAD_MARKER_GZIP, PAYLOAD_MARKER_RAW};
use hycache_domain::constants::DEFAULT_MAXIMUM_PAYLOAD_BYTES;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use hycache_domain::error::{Error, Result};
use std::io::{Read, Write};

/// Codec applied to a stored payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadCodec {
    /// Bytes stored as-is
    Raw,
    /// Gzip-compressed bytes
    Gzip,
}

impl PayloadCodec {
    fn marker(self) -> u8 {
        match self {
            Self::Raw => PAYLOAD_MARKER_RAW,
            Self::Gzip => PAYLOAD_MARKER_GZIP,
        }
    }

    fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            PAYLOAD_MARKER_RAW => Some(Self::Raw),
            PAYLOAD_MARKER_GZIP => Some(Self::Gzip),
            _ => None,
        }
    }
}

/// Encoder/decoder for marked payloads
#[derive(Debug, Clone, Copy)]
pub struct PayloadCompressor {
    threshold: usize,
    max_decoded_bytes: usize,
}

impl Default for PayloadCompressor {
    fn default() -> Self {
        Self::new(COMPRESSION_THRESHOLD_BYTES)
    }
}

impl PayloadCompressor {
    /// Create a compressor that only compresses payloads of `threshold` bytes or more
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            max_decoded_bytes: DEFAULT_MAXIMUM_PAYLOAD_BYTES,
        }
    }

    /// Reject compressed payloads that inflate past `bytes`
    pub fn with_max_decoded_bytes(mut self, bytes: usize) -> Self {
        self.max_decoded_bytes = bytes;
        self
    }

    /// The largest payload a compressed body may inflate to
    pub fn max_decoded_bytes(&self) -> usize {
        self.max_decoded_bytes
    }

    /// The size threshold in bytes
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Encode a payload for storage
    pub fn encode(&self, payload: &[u8], allow_compression: bool) -> Result<Vec<u8>> {
        if allow_compression && payload.len() >= self.threshold {
            let compressed = gzip(payload)?;
            if compressed.len() < payload.len() {
                return Ok(framed(PayloadCodec::Gzip, &compressed));
            }
        }
        Ok(framed(PayloadCodec::Raw, payload))
    }

    /// Decode a stored payload
    pub fn decode(&self, stored: &[u8]) -> Result<Vec<u8>> {
        let (&marker, body) = stored
            .split_first()
            .ok_or_else(|| Error::serialization("stored payload is empty"))?;
        match PayloadCodec::from_marker(marker) {
            Some(PayloadCodec::Raw) => Ok(body.to_vec()),
            Some(PayloadCodec::Gzip) => gunzip(body, self.max_decoded_bytes),
            None => Err(Error::serialization(format!(
                "unknown payload codec marker 0x{marker:02x}"
            ))),
        }
    }

    /// Codec recorded in a stored payload
    pub fn codec_of(stored: &[u8]) -> Option<PayloadCodec> {
        stored.first().copied().and_then(PayloadCodec::from_marker)
    }
}

fn framed(codec: PayloadCodec, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(codec.marker());
    out.extend_from_slice(body);
    out
}

fn gzip(payload: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(payload)
        .map_err(|e| Error::serialization_with_source("failed to compress payload", e))?;
    encoder
        .finish()
        .map_err(|e| Error::serialization_with_source("failed to compress payload", e))
}

fn gunzip(body: &[u8], limit: usize) -> Result<Vec<u8>> {
    // One byte past the limit is enough to tell an oversized payload apart
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut decoder = GzDecoder::new(body).take(cap);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::serialization_with_source("failed to decompress payload", e))?;
    if out.len() > limit {
        return Err(Error::serialization(format!(
            "decompressed payload exceeds {limit} bytes"
        )));
    }
    Ok(out)
}
