//! I/O helpers for grayscale rasters and JSON.
//!
//! - `read_pgm` / `decode_pgm`: parse a binary `P5` raster into an owned buffer.
//! - `write_pgm` / `encode_pgm`: emit `P5\n<cols> <rows>\n255\n` plus samples.
//! - `save_grayscale_png`: write an 8-bit raster as PNG through `image`.
//! - `save_raster`: dispatch on [`RasterFormat`].
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, ImageView};
use crate::error::{Result, TransformError};
use image::{GrayImage, ImageBuffer, Luma};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const PGM_MAGIC: &[u8; 2] = b"P5";
const PGM_MAX_VALUE: usize = 255;

/// Output encoding for exported rasters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    #[default]
    Pgm,
    Png,
}

impl RasterFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Pgm => "pgm",
            RasterFormat::Png => "png",
        }
    }
}

/// Read a binary PGM (`P5`) file.
pub fn read_pgm(path: &Path) -> Result<GrayImageU8> {
    let bytes = fs::read(path).map_err(|e| TransformError::io(path, e))?;
    decode_pgm(&bytes, path)
}

/// Parse an in-memory `P5` raster; `path` only labels errors.
pub fn decode_pgm(bytes: &[u8], path: &Path) -> Result<GrayImageU8> {
    if bytes.len() < 2 || &bytes[..2] != PGM_MAGIC {
        let found = String::from_utf8_lossy(&bytes[..bytes.len().min(2)]).into_owned();
        return Err(TransformError::format(path, "magic P5", quoted(&found)));
    }

    let mut header = HeaderCursor {
        bytes,
        pos: 2,
        path,
    };
    let cols = header.next_number("image width")?;
    let rows = header.next_number("image height")?;
    let max_value = header.next_number("max value")?;
    if max_value == 0 || max_value > PGM_MAX_VALUE {
        return Err(TransformError::format(
            path,
            "max value in 1..=255",
            max_value.to_string(),
        ));
    }
    // Exactly one whitespace byte separates the header from the samples.
    match bytes.get(header.pos) {
        Some(b) if b.is_ascii_whitespace() => header.pos += 1,
        other => {
            return Err(TransformError::format(
                path,
                "whitespace after header",
                other.map_or("end of file".to_string(), |b| format!("byte {b:#04x}")),
            ))
        }
    }

    let expected = rows
        .checked_mul(cols)
        .ok_or_else(|| TransformError::format(path, "addressable raster size", format!("{cols}x{rows}")))?;
    let payload = &bytes[header.pos..];
    if payload.len() < expected {
        return Err(TransformError::format(
            path,
            format!("{expected} pixel bytes"),
            format!("{} bytes", payload.len()),
        ));
    }
    Ok(GrayImageU8::new(cols, rows, payload[..expected].to_vec()))
}

struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    path: &'a Path,
}

impl HeaderCursor<'_> {
    fn skip_separators(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(&c) = self.bytes.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_number(&mut self, what: &str) -> Result<usize> {
        self.skip_separators();
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        let token = String::from_utf8_lossy(&self.bytes[start..self.pos]);
        if token.is_empty() {
            return Err(TransformError::format(self.path, what, "end of file"));
        }
        token
            .parse::<usize>()
            .map_err(|_| TransformError::format(self.path, what, quoted(&token)))
    }
}

fn quoted(token: &str) -> String {
    format!("{token:?}")
}

/// Encode any 8-bit view as a binary PGM byte stream.
pub fn encode_pgm<I: ImageView<Pixel = u8>>(image: &I) -> Vec<u8> {
    let header = format!("P5\n{} {}\n{}\n", image.width(), image.height(), PGM_MAX_VALUE);
    let mut out = Vec::with_capacity(header.len() + image.pixel_count());
    out.extend_from_slice(header.as_bytes());
    match image.as_slice() {
        Some(packed) => out.extend_from_slice(packed),
        None => {
            for row in image.rows() {
                out.extend_from_slice(row);
            }
        }
    }
    out
}

/// Write an 8-bit view as binary PGM, creating parent directories.
pub fn write_pgm<I: ImageView<Pixel = u8>>(image: &I, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = fs::File::create(path).map_err(|e| TransformError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&encode_pgm(image))
        .and_then(|_| writer.flush())
        .map_err(|e| TransformError::io(path, e))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_png(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image: GrayImage = ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| {
        TransformError::format(
            path,
            format!("{} bytes", buffer.width() * buffer.height()),
            format!("{} bytes", buffer.data().len()),
        )
    })?;
    image.save(path).map_err(|e| TransformError::Image {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `buffer` to `path` in the requested encoding.
pub fn save_raster(buffer: &GrayImageU8, path: &Path, format: RasterFormat) -> Result<()> {
    match format {
        RasterFormat::Pgm => write_pgm(buffer, path),
        RasterFormat::Png => save_grayscale_png(buffer, path),
    }
}

/// `<base><suffix>.<ext>`, e.g. `accumulators_w_h.pgm` or `accumulators_12.png`.
pub fn suffixed_path(base: &Path, suffix: &str, format: RasterFormat) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(suffix);
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| TransformError::Report {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| TransformError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TransformError::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Result<GrayImageU8> {
        decode_pgm(bytes, Path::new("mem.pgm"))
    }

    #[test]
    fn encode_then_decode_preserves_pixels() {
        let img = GrayImageU8::new(3, 2, vec![0, 17, 255, 128, 1, 64]);
        let bytes = encode_pgm(&img);
        assert!(bytes.starts_with(b"P5\n3 2\n255\n"));
        assert_eq!(decode(&bytes).unwrap(), img);
    }

    #[test]
    fn strided_view_encodes_without_padding() {
        let data = [1u8, 2, 99, 3, 4, 99];
        let view = crate::image::ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let bytes = encode_pgm(&view);
        assert_eq!(&bytes[..], b"P5\n2 2\n255\n\x01\x02\x03\x04");
        let packed = GrayImageU8::new(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(encode_pgm(&packed), bytes);
    }

    #[test]
    fn header_comments_are_skipped() {
        let mut bytes = b"P5\n# made by hand\n2 1\n255\n".to_vec();
        bytes.extend_from_slice(&[10, 20]);
        let img = decode(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.data(), &[10, 20]);
    }

    #[test]
    fn wrong_magic_is_format_error() {
        let err = decode(b"P2\n1 1\n255\n0").unwrap_err();
        match err {
            TransformError::Format {
                expected, found, ..
            } => {
                assert_eq!(expected, "magic P5");
                assert_eq!(found, "\"P2\"");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn truncated_payload_is_format_error() {
        let err = decode(b"P5\n4 4\n255\n\x01\x02").unwrap_err();
        assert!(matches!(err, TransformError::Format { .. }), "{err:?}");
    }

    #[test]
    fn sixteen_bit_max_value_is_rejected() {
        let err = decode(b"P5\n1 1\n65535\n\x00\x00").unwrap_err();
        assert!(err.to_string().contains("max value"), "{err}");
    }

    #[test]
    fn suffixed_path_appends_suffix_and_extension() {
        let path = suffixed_path(Path::new("out/accumulators"), "_w_h", RasterFormat::Pgm);
        assert_eq!(path, PathBuf::from("out/accumulators_w_h.pgm"));
        let path = suffixed_path(Path::new("acc"), "_12", RasterFormat::Png);
        assert_eq!(path, PathBuf::from("acc_12.png"));
    }
}
