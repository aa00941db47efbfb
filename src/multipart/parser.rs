use super::{CRLF, find, rfind};

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";
const FILENAME_MARKER: &[u8] = b"filename=";

pub fn is_multipart(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("multipart/form-data")
}

/// Boundary parameter of a multipart content type, without surrounding quotes.
pub fn boundary_from_content_type(content_type: &str) -> Option<&str> {
    let (_, rest) = content_type.split_once("boundary=")?;
    let value = rest.split(';').next().unwrap_or_default().trim();
    let value = value.trim_matches('"');

    (!value.is_empty()).then_some(value)
}

/// Bytes of the first file part in `body`.
///
/// The body is split on `--{boundary}`. A segment qualifies when its header
/// block carries `filename=`; its data runs from just past the first blank
/// line to the last CRLF before the next delimiter. Segments with no data are
/// skipped.
pub fn extract_file<'a>(body: &'a [u8], boundary: &str) -> Option<&'a [u8]> {
    let delimiter = [b"--", boundary.as_bytes()].concat();

    segments(body, &delimiter).find_map(|segment| {
        let header_end = find(segment, HEADER_TERMINATOR)?;
        find(&segment[..header_end], FILENAME_MARKER)?;

        let data_start = header_end + HEADER_TERMINATOR.len();
        let data_end = rfind(segment, CRLF)?;

        (data_end > data_start).then(|| &segment[data_start..data_end])
    })
}

fn segments<'a>(body: &'a [u8], delimiter: &[u8]) -> impl Iterator<Item = &'a [u8]> {
    let mut rest = Some(body);

    std::iter::from_fn(move || {
        let current = rest?;
        match find(current, delimiter) {
            Some(pos) => {
                rest = Some(&current[pos + delimiter.len()..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
