use crate::domain::common::Entity;
use crate::shared::resolver::RelatedCollections;

/// Char-by-char lowercase, without the context rules of `str::to_lowercase`,
/// so the filter and [`match_ranges`] see the same text.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Search term as both the filter and the highlighter use it:
/// surrounding whitespace dropped, lowercase.
fn normalize_term(term: &str) -> String {
    fold_case(term.trim())
}

/// Case-insensitive substring match against any of `texts`.
/// A blank term matches everything.
pub fn matches_search(texts: &[String], term: &str) -> bool {
    let term = normalize_term(term);
    if term.is_empty() {
        return true;
    }
    texts.iter().any(|text| fold_case(text).contains(&term))
}

/// Byte ranges of `text` matching `term` case-insensitively.
///
/// Offsets always refer to `text` itself and sit on char boundaries, even when
/// lowercasing changes the byte length of some characters. A match that
/// starts or ends inside the expansion of one character covers that whole
/// character.
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term = normalize_term(term);
    if term.is_empty() {
        return Vec::new();
    }

    // lowered text plus, for each of its bytes, the source char span in `text`
    let mut lowered = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.resize(lowered.len(), (start, end));
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&term) {
        let lo = from + pos;
        let hi = lo + term.len();
        let start = origin[lo].0;
        let end = origin[hi - 1].1;
        match ranges.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => ranges.push((start, end)),
        }
        from = hi;
    }
    ranges
}

/// Filtered view of `items`, order preserved
pub fn filter_items<'a, E: Entity>(
    items: &'a [E],
    related: &RelatedCollections,
    term: &str,
) -> Vec<&'a E> {
    items
        .iter()
        .filter(|item| matches_search(&item.search_texts(related), term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::aggregate::Client;

    fn client(id: i64, name: &str, address: &str) -> Client {
        Client {
            client_id: id,
            name: name.into(),
            address: address.into(),
            contact_details: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn test_matches_search_is_case_insensitive_substring() {
        let texts = vec!["Acme Corporation".to_string()];
        assert!(matches_search(&texts, "acme"));
        assert!(matches_search(&texts, "CORP"));
        assert!(matches_search(&texts, "me Co"));
        assert!(!matches_search(&texts, "globex"));
        assert!(matches_search(&texts, ""));
    }

    #[test]
    fn test_blank_term_matches_everything() {
        let texts = vec!["Acme".to_string()];
        assert!(matches_search(&texts, "   "));
        assert!(match_ranges("Acme", "   ").is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored_by_filter_and_highlight() {
        let texts = vec!["Acme Corporation".to_string()];
        assert!(matches_search(&texts, "  corp "));
        assert_eq!(match_ranges("Acme Corporation", "  corp "), vec![(5, 9)]);
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Acme Academy", "ac"), vec![(0, 2), (5, 7)]);
        assert_eq!(match_ranges("Globex", "BEX"), vec![(3, 6)]);
        assert!(match_ranges("Globex", "acme").is_empty());
    }

    #[test]
    fn test_match_ranges_follow_original_offsets() {
        // U+0130 grows when lowercased, U+2126 shrinks; the total length is unchanged
        let text = "\u{130}\u{2126} Media";
        let ranges = match_ranges(text, "\u{3c9}");
        assert_eq!(ranges, vec![(2, 5)]);
        for (start, end) in ranges {
            assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
            assert_eq!(&text[start..end], "\u{2126}");
        }
        assert_eq!(match_ranges(text, "media"), vec![(6, 11)]);
    }

    #[test]
    fn test_match_ranges_inside_expanded_char_cover_the_char() {
        // "İ" lowercases to "i" + U+0307
        let text = "\u{130}stanbul";
        assert_eq!(match_ranges(text, "i"), vec![(0, 2)]);
        assert_eq!(match_ranges(text, "stan"), vec![(2, 6)]);
    }

    #[test]
    fn test_filter_items_checks_every_search_field() {
        let items = vec![
            client(1, "Acme", "1 Main Street"),
            client(2, "Globex", "Springfield"),
        ];
        let related = RelatedCollections::new();

        let by_address: Vec<i64> = filter_items(&items, &related, "spring")
            .iter()
            .map(|c| c.client_id)
            .collect();
        assert_eq!(by_address, vec![2]);

        let by_contact: Vec<i64> = filter_items(&items, &related, "ACME@")
            .iter()
            .map(|c| c.client_id)
            .collect();
        assert_eq!(by_contact, vec![1]);

        assert_eq!(filter_items(&items, &related, "").len(), 2);
        assert!(filter_items(&items, &related, "nothing").is_empty());
    }
}
