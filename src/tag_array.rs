//! Encoding and decoding of expense tags through a scalar SQL column.
//!
//! SQLite has no array column type, so the ordered list of tags is stored in
//! a TEXT column as a Postgres-style array literal, e.g. `{food,"night
//! market"}`. The store's SQL code only ever calls [encode_tag_array] and
//! [decode_tag_array], so it never sees the literal syntax itself.

use crate::Error;

/// Encode an ordered list of tags as an array literal.
///
/// Element order and content are preserved exactly. An element is quoted and
/// backslash-escaped whenever leaving it bare would be ambiguous: empty
/// strings, the word NULL (in any case), and elements containing braces,
/// commas, quotes, backslashes, or whitespace.
pub fn encode_tag_array(tags: &[String]) -> String {
    let mut literal = String::from("{");

    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            literal.push(',');
        }

        if needs_quoting(tag) {
            literal.push('"');

            for character in tag.chars() {
                if character == '"' || character == '\\' {
                    literal.push('\\');
                }

                literal.push(character);
            }

            literal.push('"');
        } else {
            literal.push_str(tag);
        }
    }

    literal.push('}');

    literal
}

fn needs_quoting(tag: &str) -> bool {
    tag.is_empty()
        || tag.eq_ignore_ascii_case("null")
        || tag.chars().any(|character| {
            matches!(character, '{' | '}' | ',' | '"' | '\\') || character.is_whitespace()
        })
}

/// Decode an array literal back into an ordered list of tags.
///
/// The exact inverse of [encode_tag_array]: `{}` decodes to an empty list,
/// never to an absence.
///
/// # Errors
/// Returns an [Error::MalformedTagArray] if the literal is not wrapped in
/// braces, contains an empty bare element, or ends inside a quoted element or
/// escape sequence.
pub fn decode_tag_array(literal: &str) -> Result<Vec<String>, Error> {
    let malformed = || Error::MalformedTagArray(literal.to_owned());

    let inner = literal
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(malformed)?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let mut tags = Vec::new();
    let mut characters = inner.chars();

    loop {
        match characters.next() {
            Some('"') => {
                let mut tag = String::new();

                loop {
                    match characters.next() {
                        Some('\\') => match characters.next() {
                            Some(escaped) => tag.push(escaped),
                            None => return Err(malformed()),
                        },
                        Some('"') => break,
                        Some(character) => tag.push(character),
                        None => return Err(malformed()),
                    }
                }

                tags.push(tag);

                match characters.next() {
                    Some(',') => {}
                    None => return Ok(tags),
                    Some(_) => return Err(malformed()),
                }
            }
            Some(first) => {
                // A bare element runs until the next comma. Bare elements are
                // never empty and never contain quotes or escapes.
                if first == ',' {
                    return Err(malformed());
                }

                let mut tag = String::from(first);

                loop {
                    match characters.next() {
                        Some(',') => {
                            tags.push(tag);
                            break;
                        }
                        Some('"') | Some('\\') => return Err(malformed()),
                        Some(character) => tag.push(character),
                        None => {
                            tags.push(tag);
                            return Ok(tags);
                        }
                    }
                }
            }
            // A comma was consumed but no element follows, e.g. "{a,}".
            None => return Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tag_array_tests {
    use crate::Error;

    use super::{decode_tag_array, encode_tag_array};

    fn tags(elements: &[&str]) -> Vec<String> {
        elements.iter().map(|tag| tag.to_string()).collect()
    }

    fn assert_round_trip(elements: &[&str]) {
        let want = tags(elements);

        let literal = encode_tag_array(&want);
        let got = decode_tag_array(&literal)
            .unwrap_or_else(|error| panic!("could not decode {literal:?}: {error}"));

        assert_eq!(got, want, "round trip through {literal:?}");
    }

    #[test]
    fn encodes_plain_tags_bare() {
        let literal = encode_tag_array(&tags(&["food", "beverage"]));

        assert_eq!(literal, "{food,beverage}");
    }

    #[test]
    fn encodes_empty_list_as_empty_braces() {
        assert_eq!(encode_tag_array(&[]), "{}");
    }

    #[test]
    fn empty_braces_decode_to_empty_list() {
        assert_eq!(decode_tag_array("{}"), Ok(Vec::new()));
    }

    #[test]
    fn quotes_elements_that_would_be_ambiguous() {
        assert_eq!(encode_tag_array(&tags(&[""])), "{\"\"}");
        assert_eq!(
            encode_tag_array(&tags(&["night market"])),
            "{\"night market\"}"
        );
        assert_eq!(encode_tag_array(&tags(&["a,b"])), "{\"a,b\"}");
        assert_eq!(encode_tag_array(&tags(&["NULL"])), "{\"NULL\"}");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let literal = encode_tag_array(&tags(&["say \"hi\"", "back\\slash"]));

        assert_eq!(literal, "{\"say \\\"hi\\\"\",\"back\\\\slash\"}");
    }

    #[test]
    fn round_trips_plain_tags() {
        assert_round_trip(&["food", "beverage"]);
    }

    #[test]
    fn round_trips_empty_strings() {
        assert_round_trip(&["", "food", ""]);
    }

    #[test]
    fn round_trips_whitespace_and_delimiters() {
        assert_round_trip(&["night market", "a,b", "{brace}", "tab\tseparated"]);
    }

    #[test]
    fn round_trips_quotes_and_backslashes() {
        assert_round_trip(&["say \"hi\"", "back\\slash", "\\", "\""]);
    }

    #[test]
    fn round_trips_unicode() {
        assert_round_trip(&["กาแฟ", "smoothie 🍓"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        assert_round_trip(&["b", "a", "b"]);
    }

    #[test]
    fn rejects_literal_without_braces() {
        assert_eq!(
            decode_tag_array("food,beverage"),
            Err(Error::MalformedTagArray("food,beverage".to_owned()))
        );
        assert_eq!(
            decode_tag_array(""),
            Err(Error::MalformedTagArray("".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_bare_element() {
        assert_eq!(
            decode_tag_array("{a,}"),
            Err(Error::MalformedTagArray("{a,}".to_owned()))
        );
        assert_eq!(
            decode_tag_array("{,a}"),
            Err(Error::MalformedTagArray("{,a}".to_owned()))
        );
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert_eq!(
            decode_tag_array("{\"a}"),
            Err(Error::MalformedTagArray("{\"a}".to_owned()))
        );
    }

    #[test]
    fn rejects_trailing_characters_after_quote() {
        assert_eq!(
            decode_tag_array("{\"a\"b}"),
            Err(Error::MalformedTagArray("{\"a\"b}".to_owned()))
        );
    }
}
