use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter};
use std::io;

/// Compact JSON formatter that escapes every non-ASCII character as `\uXXXX`
/// (UTF-16 code units, lowercase hex).
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            CompactFormatter.write_string_fragment(writer, &fragment[start..i])?;

            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        CompactFormatter.write_string_fragment(writer, &fragment[start..])
    }
}

/// Serialize `value` with non-ASCII characters escaped
pub fn to_ascii_json<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiFormatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_json(value: &str) -> String {
        String::from_utf8(to_ascii_json(value).unwrap()).unwrap()
    }

    #[test]
    fn test_ascii_json_plain() {
        assert_eq!(
            ascii_json("https://rigas32.s3.amazonaws.com/a.com_b_c.png"),
            r#""https://rigas32.s3.amazonaws.com/a.com_b_c.png""#
        );
        assert_eq!(ascii_json("a\"b\\c\n"), r#""a\"b\\c\n""#);
    }

    #[test]
    fn test_ascii_json_escapes_non_ascii() {
        assert_eq!(ascii_json("caf\u{e9}.com"), r#""caf\u00e9.com""#);
        assert_eq!(ascii_json("\u{ff45}x"), r#""\uff45x""#);
        // astral characters become a surrogate pair
        assert_eq!(ascii_json("a\u{1f600}b"), r#""a\ud83d\ude00b""#);
    }

    #[test]
    fn test_ascii_json_decodes_back() {
        let original = "https://b.s3.amazonaws.com/\u{5b57}\u{1f600}.png";
        let bytes = to_ascii_json(original).unwrap();
        assert!(bytes.is_ascii());

        let decoded: String = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
