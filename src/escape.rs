//! Contextual HTML escaping
//!
//! Two escapers are provided:
//! - [`escape_html`] for text content placed between tags
//! - [`escape_attr`] for values placed inside double-quoted attributes
//!
//! Both validate their input against the document [`Charset`] and fail with
//! [`EscapeError`] when a character cannot be represented in it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Character encoding of the document the fragment is embedded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8, every scalar value is representable
    #[default]
    Utf8,
    /// ISO-8859-1 (Latin-1), code points up to U+00FF
    Latin1,
    /// US-ASCII, code points up to U+007F
    Ascii,
}

impl Charset {
    /// Canonical name of the charset
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        }
    }

    /// Check whether a character can be encoded in this charset
    pub fn can_encode(&self, ch: char) -> bool {
        match self {
            Self::Utf8 => true,
            Self::Latin1 => u32::from(ch) <= 0xFF,
            Self::Ascii => ch.is_ascii(),
        }
    }

    /// Validate a whole string against this charset
    pub fn validate(&self, s: &str) -> Result<(), EscapeError> {
        match s.chars().find(|&ch| !self.can_encode(ch)) {
            Some(ch) => Err(EscapeError::Unrepresentable { ch, charset: *self }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Charset {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            "us-ascii" | "ascii" => Ok(Self::Ascii),
            _ => Err(EscapeError::UnsupportedCharset {
                name: s.to_string(),
            }),
        }
    }
}

/// Escaping failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("character '{ch}' (U+{:04X}) is not valid for charset {charset}", code_point(.ch))]
    Unrepresentable { ch: char, charset: Charset },

    #[error("unsupported charset: {name}")]
    UnsupportedCharset { name: String },
}

fn code_point(ch: &char) -> u32 {
    u32::from(*ch)
}

/// Escape text content
///
/// Replaces `&`, `<`, `>`, `"`, `'` and `/` with entities. Everything else,
/// including non-ASCII characters, is copied as is.
pub fn escape_html(s: &str, charset: Charset) -> Result<String, EscapeError> {
    charset.validate(s)?;

    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '/' => out.push_str("&#47;"),
            _ => out.push(ch),
        }
    }
    Ok(out)
}

/// Escape an attribute value
///
/// ASCII alphanumerics and `,.-_` pass through. `"`, `&`, `<` and `>` use
/// named entities, control characters become U+FFFD and everything else a
/// hexadecimal character reference.
pub fn escape_attr(s: &str, charset: Charset) -> Result<String, EscapeError> {
    charset.validate(s)?;

    let mut out = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, ',' | '.' | '-' | '_') {
            out.push(ch);
            continue;
        }

        let code = u32::from(ch);
        match ch {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ if is_undefined_control(ch) => out.push_str("&#xFFFD;"),
            _ if code > 0xFF => out.push_str(&format!("&#x{code:04X};")),
            _ => out.push_str(&format!("&#x{code:02X};")),
        }
    }
    Ok(out)
}

/// Control characters that have no valid representation in HTML
fn is_undefined_control(ch: char) -> bool {
    let code = u32::from(ch);
    (code <= 0x1F && !matches!(ch, '\t' | '\n' | '\r')) || (0x7F..=0x9F).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1", "1" ; "digits")]
    #[test_case("#", "&#x23;" ; "sentinel")]
    #[test_case("Page 1", "Page&#x20;1" ; "space")]
    #[test_case("https://example.com/", "https&#x3A;&#x2F;&#x2F;example.com&#x2F;" ; "url")]
    #[test_case("aria-前", "aria-&#x524D;" ; "cjk")]
    #[test_case("頁 -> 1", "&#x9801;&#x20;-&gt;&#x20;1" ; "arrow")]
    #[test_case("\"<a>&\"", "&quot;&lt;a&gt;&amp;&quot;" ; "named entities")]
    #[test_case("a,b.c_d", "a,b.c_d" ; "safe punctuation")]
    #[test_case("\u{1}\t", "&#xFFFD;&#x09;" ; "control characters")]
    #[test_case("😀", "&#x1F600;" ; "astral plane")]
    fn test_escape_attr(input: &str, expected: &str) {
        assert_eq!(escape_attr(input, Charset::Utf8).unwrap(), expected);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(1);</script>", Charset::Utf8).unwrap(),
            "&lt;script&gt;alert(1);&lt;&#47;script&gt;"
        );
        assert_eq!(escape_html("Tom & 'Jerry'", Charset::Utf8).unwrap(), "Tom &amp; &#039;Jerry&#039;");
        assert_eq!(escape_html("前 …", Charset::Utf8).unwrap(), "前 …");
    }

    #[test]
    fn test_charset_rejects_unrepresentable() {
        let err = escape_html("前", Charset::Latin1).unwrap_err();
        assert_eq!(
            err,
            EscapeError::Unrepresentable {
                ch: '前',
                charset: Charset::Latin1
            }
        );
        assert!(escape_attr("é", Charset::Ascii).is_err());
        assert_eq!(escape_attr("é", Charset::Latin1).unwrap(), "&#xE9;");
    }

    #[test]
    fn test_charset_from_str() {
        assert_eq!("UTF-8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("utf8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("ISO-8859-1".parse::<Charset>().unwrap(), Charset::Latin1);
        assert_eq!(" us-ascii ".parse::<Charset>().unwrap(), Charset::Ascii);
        assert!(matches!(
            "koi8-r".parse::<Charset>(),
            Err(EscapeError::UnsupportedCharset { .. })
        ));
    }
}
