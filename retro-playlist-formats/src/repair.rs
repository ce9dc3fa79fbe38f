//! Text repairs applied to icon XML before structural parsing.
//!
//! Device-side tools write these files by hand-rolled string formatting, so
//! real files show up with byte-order marks, odd declarations and unquoted
//! attribute values. Each rule is a standalone function; [`repair_markup`]
//! runs all of them in order.

use std::borrow::Cow;

const CANONICAL_DECLARATION: &str = "<?xml version=\"1.0\"?>";

/// Run every repair rule in order.
pub fn repair_markup(text: &str) -> String {
    let text = strip_bom(text);
    let text = normalize_declaration(text);
    quote_attributes(&text)
}

/// Drop a leading U+FEFF byte-order mark.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Replace a leading `<?xml ... ?>` declaration with `<?xml version="1.0"?>`.
///
/// Declarations often name encodings the file does not actually use; the
/// content is always read as UTF-8.
pub fn normalize_declaration(text: &str) -> Cow<'_, str> {
    let Some(rest) = text.strip_prefix("<?xml") else {
        return Cow::Borrowed(text);
    };
    match rest.find('?') {
        Some(q) if rest[q..].starts_with("?>") => {
            Cow::Owned(format!("{CANONICAL_DECLARATION}{}", &rest[q + 2..]))
        }
        _ => Cow::Borrowed(text),
    }
}

/// Wrap bare attribute values in double quotes.
///
/// `<icon0_para name=Mario game_path=mario.zip />` becomes
/// `<icon0_para name="Mario" game_path="mario.zip" />`. Only markup inside
/// element tags is touched; quoted values, text content, comments and
/// processing instructions pass through unchanged.
pub fn quote_attributes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '<' {
            out.push(c);
            i += 1;
            continue;
        }

        // Comments, declarations and processing instructions are copied verbatim.
        if starts_with(&chars, i, "<!--") {
            i = copy_until(&chars, i, "-->", &mut out);
            continue;
        }
        if starts_with(&chars, i, "<?") || starts_with(&chars, i, "<!") {
            i = copy_until(&chars, i, ">", &mut out);
            continue;
        }

        i = repair_tag(&chars, i, &mut out);
    }

    out
}

/// Copy one element tag starting at `start` (the `<`), quoting bare values.
/// Returns the index just past the tag.
fn repair_tag(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('<');
    let mut i = start + 1;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '>' => {
                out.push(c);
                return i + 1;
            }
            '"' | '\'' => {
                let end = chars[i + 1..]
                    .iter()
                    .position(|&q| q == c)
                    .map(|p| i + 1 + p + 1)
                    .unwrap_or(chars.len());
                out.extend(&chars[i..end]);
                i = end;
            }
            '=' => {
                out.push(c);
                i += 1;
                if i < chars.len() && !ends_bare_value(chars, i) {
                    let end = bare_value_end(chars, i);
                    out.push('"');
                    out.extend(&chars[i..end]);
                    out.push('"');
                    i = end;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    i
}

/// End index (exclusive) of an unquoted value starting at `start`.
fn bare_value_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    while i < chars.len() && !ends_bare_value(chars, i) {
        i += 1;
    }
    i
}

/// True when the character at `i` cannot be part of an unquoted value.
fn ends_bare_value(chars: &[char], i: usize) -> bool {
    match chars[i] {
        c if c.is_whitespace() => true,
        '"' | '\'' | '<' | '>' | '=' => true,
        // `/` is only a terminator when it closes an empty element.
        '/' => chars.get(i + 1) == Some(&'>'),
        _ => false,
    }
}

fn starts_with(chars: &[char], at: usize, pattern: &str) -> bool {
    let mut idx = at;
    for p in pattern.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    true
}

/// Copy from `start` through the end of `terminator` (or to the end of input).
fn copy_until(chars: &[char], start: usize, terminator: &str, out: &mut String) -> usize {
    let term_len = terminator.chars().count();
    let mut i = start;
    while i < chars.len() {
        if starts_with(chars, i, terminator) {
            out.extend(&chars[i..i + term_len]);
            return i + term_len;
        }
        out.push(chars[i]);
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{FEFF}<a/>"), "<a/>");
        assert_eq!(strip_bom("<a/>"), "<a/>");
    }

    #[test]
    fn test_normalize_declaration() {
        assert_eq!(
            normalize_declaration("<?xml version='1.0' encoding='EUC-KR'?>\n<a/>"),
            "<?xml version=\"1.0\"?>\n<a/>"
        );
        assert_eq!(normalize_declaration("<a/>"), "<a/>");
        // Only a leading declaration is touched.
        assert_eq!(
            normalize_declaration(" <?xml version='1.0'?>"),
            " <?xml version='1.0'?>"
        );
    }

    #[test]
    fn quotes_bare_values() {
        assert_eq!(
            quote_attributes("<icon0_para name=Mario game_path=mario.zip />"),
            "<icon0_para name=\"Mario\" game_path=\"mario.zip\" />"
        );
    }

    #[test]
    fn bare_value_touching_self_close() {
        assert_eq!(
            quote_attributes("<a name=Mario/>"),
            "<a name=\"Mario\"/>"
        );
        assert_eq!(
            quote_attributes("<a game_path=sub/mario.zip/>"),
            "<a game_path=\"sub/mario.zip\"/>"
        );
    }

    #[test]
    fn quoted_values_are_untouched() {
        let input = "<a name=\"x=y\" game_path='a b.zip' />";
        assert_eq!(quote_attributes(input), input);
    }

    #[test]
    fn text_comments_and_declarations_are_untouched() {
        let input = "<?xml version=\"1.0\"?><!-- a=b --><r>x=y</r>";
        assert_eq!(quote_attributes(input), input);
    }

    #[test]
    fn repair_markup_runs_all_rules() {
        let input = "\u{FEFF}<?xml version=\"1.0\" encoding=\"UTF-8\"?><r a=1/>";
        assert_eq!(repair_markup(input), "<?xml version=\"1.0\"?><r a=\"1\"/>");
    }
}
