//*** START FILE: src/parsing/chapter_parser.rs ***//
use crate::types::audit_data::Chapter;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    // "Chapter 12", "CH12", "Ch. 12", "Ch12". Leftmost alternative wins.
    static ref CHAPTER_HEADING: Regex =
        Regex::new(r"(?i)\b(?:chapter\s+([0-9]+)|ch([0-9]+)|ch\.?\s*([0-9]+))")
            .expect("chapter heading pattern compiles");
}

/// Splits a manuscript into chapters at each heading marker.
///
/// A chapter's content is the trimmed text after its heading up to the next
/// heading (or end of text). Text before the first heading belongs to no
/// chapter. With no headings at all the whole trimmed text is chapter 1.
/// Declared numbers are kept as written, so repeats and gaps survive.
pub fn split_into_chapters(text: &str) -> Vec<Chapter> {
    let mut chapters: Vec<Chapter> = Vec::new();
    // (declared number, byte offset where its content starts)
    let mut open_chapter: Option<(u32, usize)> = None;

    for caps in CHAPTER_HEADING.captures_iter(text) {
        let Some(heading) = caps.get(0) else { continue };
        let Some(digits) = (1..=3).find_map(|i| caps.get(i)) else {
            continue;
        };
        let number = parse_chapter_number(digits.as_str());

        if let Some((previous, start)) = open_chapter.take() {
            push_chapter(&mut chapters, previous, &text[start..heading.start()]);
        }
        open_chapter = Some((number, heading.end()));
    }

    match open_chapter {
        Some((number, start)) => push_chapter(&mut chapters, number, &text[start..]),
        None => push_chapter(&mut chapters, 1, text),
    }

    debug!("Segmented manuscript into {} chapter(s)", chapters.len());
    chapters
}

/// Declared chapter number from an ASCII digit run. Numbers past `u32::MAX`
/// saturate, so an oversized heading still opens a chapter.
pub fn parse_chapter_number(digits: &str) -> u32 {
    digits.parse::<u32>().unwrap_or_else(|_| {
        debug!("Chapter number {} saturates to {}", digits, u32::MAX);
        u32::MAX
    })
}

fn push_chapter(chapters: &mut Vec<Chapter>, number: u32, raw_content: &str) {
    chapters.push(Chapter {
        position: chapters.len(),
        number,
        content: raw_content.trim().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(chapters: &[Chapter]) -> Vec<(u32, &str)> {
        chapters.iter().map(|c| (c.number, c.content.as_str())).collect()
    }

    #[test]
    fn test_two_chapters() {
        let chapters = split_into_chapters("Chapter 1\nfoo\nChapter 2\nbar");
        assert_eq!(pairs(&chapters), vec![(1, "foo"), (2, "bar")]);
        assert_eq!(chapters[0].position, 0);
        assert_eq!(chapters[1].position, 1);
    }

    #[test]
    fn test_no_headings_is_single_chapter() {
        let chapters = split_into_chapters("  Just some prose.\nMore prose.  \n");
        assert_eq!(pairs(&chapters), vec![(1, "Just some prose.\nMore prose.")]);
    }

    #[test]
    fn test_empty_text() {
        let chapters = split_into_chapters("");
        assert_eq!(pairs(&chapters), vec![(1, "")]);
    }

    #[test]
    fn test_heading_variants() {
        let text = "CHAPTER 3 alpha CH4 beta Ch. 5 gamma ch6 delta Ch 7 epsilon";
        let chapters = split_into_chapters(text);
        assert_eq!(
            pairs(&chapters),
            vec![(3, "alpha"), (4, "beta"), (5, "gamma"), (6, "delta"), (7, "epsilon")]
        );
    }

    #[test]
    fn test_duplicate_and_out_of_order_numbers_kept() {
        let text = "Chapter 2\nb\nChapter 1\na\nChapter 2\nagain";
        let chapters = split_into_chapters(text);
        assert_eq!(pairs(&chapters), vec![(2, "b"), (1, "a"), (2, "again")]);
        let positions: Vec<usize> = chapters.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_prelude_before_first_heading_is_dropped() {
        let chapters = split_into_chapters("Title page\n\nChapter 1\nStart.");
        assert_eq!(pairs(&chapters), vec![(1, "Start.")]);
    }

    #[test]
    fn test_heading_with_no_body() {
        let chapters = split_into_chapters("Chapter 1\nChapter 2\ntext");
        assert_eq!(pairs(&chapters), vec![(1, ""), (2, "text")]);
    }

    #[test]
    fn test_mid_word_ch_is_not_a_heading() {
        let chapters = split_into_chapters("Chapter 1\nThey walked each 3 miles, much2 far.");
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].content, "They walked each 3 miles, much2 far.");
    }

    #[test]
    fn test_chapter_without_number_is_not_a_heading() {
        let chapters = split_into_chapters("The chapter ended. Chapter one began.");
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].number, 1);
    }

    #[test]
    fn test_oversized_number_still_starts_a_chapter() {
        let chapters = split_into_chapters("Chapter 1\nfoo\nChapter 99999999999\nbar");
        assert_eq!(pairs(&chapters), vec![(1, "foo"), (u32::MAX, "bar")]);
    }

    #[test]
    fn test_parse_chapter_number() {
        assert_eq!(parse_chapter_number("007"), 7);
        assert_eq!(parse_chapter_number("4294967295"), u32::MAX);
        assert_eq!(parse_chapter_number("4294967296"), u32::MAX);
    }
}
//*** END FILE: src/parsing/chapter_parser.rs ***//
