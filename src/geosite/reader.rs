//! geosite file loading with memory-mapping and gzip support.

use flate2::read::GzDecoder;
use memmap2::Mmap;
use prost::Message;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::format::GeoSiteList;
use crate::error::DecodeError;
use crate::{Error, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode a protobuf `GeoSiteList`.
pub fn decode(data: &[u8]) -> Result<GeoSiteList> {
    let list = GeoSiteList::decode(data)?;
    log::debug!("Decoded {} geosite entries", list.entry.len());
    Ok(list)
}

/// Decode a geosite list, inflating it first if it is gzip compressed.
pub fn load_from_bytes(data: &[u8]) -> Result<GeoSiteList> {
    if !is_gzip(data) {
        return decode(data);
    }

    let mut decoder = GzDecoder::new(data);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| Error::Decode(DecodeError::Gzip(e)))?;
    log::debug!(
        "Inflated gzip input: {} bytes (compressed: {} bytes)",
        inflated.len(),
        data.len()
    );
    decode(&inflated)
}

/// Load and decode a geosite file.
pub fn load(path: &Path) -> Result<GeoSiteList> {
    let file = File::open(path)?;

    // Zero-length maps are rejected on some platforms.
    if file.metadata()?.len() == 0 {
        return decode(&[]);
    }

    let mmap = unsafe { Mmap::map(&file)? };
    log::debug!("Mapped {:?} ({} bytes)", path, mmap.len());
    load_from_bytes(&mmap)
}

fn is_gzip(data: &[u8]) -> bool {
    data.len() >= GZIP_MAGIC.len() && data[..GZIP_MAGIC.len()] == GZIP_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geosite::{Domain, GeoSite};
    use crate::{Error, MatchType};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn sample() -> GeoSiteList {
        GeoSiteList {
            entry: vec![GeoSite::new(
                "CN",
                vec![Domain::new(MatchType::Domain, "example.com")],
            )],
        }
    }

    #[test]
    fn test_decode_plain() {
        let bytes = sample().encode_to_vec();
        assert_eq!(load_from_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_decode_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&sample().encode_to_vec()).unwrap();
        let compressed = encoder.finish().unwrap();

        assert!(is_gzip(&compressed));
        assert_eq!(load_from_bytes(&compressed).unwrap(), sample());
    }

    #[test]
    fn test_truncated_gzip_is_decode_error() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&sample().encode_to_vec()).unwrap();
        let compressed = encoder.finish().unwrap();
        let truncated = &compressed[..compressed.len() / 2];

        let result = load_from_bytes(truncated);
        assert!(matches!(result, Err(Error::Decode(DecodeError::Gzip(_)))));
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode(&[]).unwrap().entry.is_empty());
    }

    #[test]
    fn test_decode_malformed() {
        // Field 1, length-delimited, claims 100 bytes but has none.
        let result = decode(&[0x0a, 0x64]);
        assert!(matches!(result, Err(Error::Decode(DecodeError::Protobuf(_)))));
    }
}
