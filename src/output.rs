use std::io::{self, Write};

use crate::models::{MostViewedQuestion, RecentQuestion, TagInfo};

/// Prints the ranked most-viewed list, one numbered block per question.
pub fn print_most_viewed<W: Write>(
    out: &mut W,
    questions: &[MostViewedQuestion],
) -> io::Result<()> {
    for (i, question) in questions.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, question.title)?;
        writeln!(out, "   Views: {}", question.view_count)?;
        writeln!(out, "   Link: {}", question.link)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints title and link for every question, empty fields included when
/// extraction came up short.
pub fn print_unanswered<W: Write>(out: &mut W, questions: &[RecentQuestion]) -> io::Result<()> {
    if questions.is_empty() {
        writeln!(out, "No questions found.")?;
        return Ok(());
    }
    for question in questions {
        let (title, link) = question.title_and_link();
        writeln!(out, "Title: {title}")?;
        writeln!(out, "Link: {link}")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints the popular tags, one per line with question count and info link.
pub fn print_popular_tags<W: Write>(out: &mut W, tags: &[TagInfo]) -> io::Result<()> {
    writeln!(out, "Most Popular Tags:")?;
    for tag in tags {
        writeln!(out, "{} ({} questions): {}", tag.name, tag.count, tag.link)?;
    }
    Ok(())
}

/// Writes the tags as pretty-printed JSON, the shape saved to disk.
pub fn write_tags_json<W: Write>(out: &mut W, tags: &[TagInfo]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tags)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(print: F) -> String {
        let mut buf = Vec::new();
        print(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn most_viewed_blocks_are_numbered_and_separated() {
        let questions = vec![
            MostViewedQuestion {
                title: "Why is processing a sorted array faster?".to_string(),
                link: "https://stackoverflow.com/q/11227809".to_string(),
                view_count: 200,
            },
            MostViewedQuestion {
                title: "How do I undo the most recent local commits?".to_string(),
                link: "https://stackoverflow.com/q/927358".to_string(),
                view_count: 50,
            },
        ];

        let text = rendered(|out| print_most_viewed(out, &questions));
        assert_eq!(
            text,
            "1. Why is processing a sorted array faster?\n\
             \x20  Views: 200\n\
             \x20  Link: https://stackoverflow.com/q/11227809\n\
             \n\
             2. How do I undo the most recent local commits?\n\
             \x20  Views: 50\n\
             \x20  Link: https://stackoverflow.com/q/927358\n\
             \n"
        );
    }

    #[test]
    fn empty_unanswered_list_reports_no_questions() {
        let text = rendered(|out| print_unanswered(out, &[]));
        assert_eq!(text, "No questions found.\n");
    }

    #[test]
    fn unanswered_prints_title_and_link() {
        let questions = vec![RecentQuestion {
            title: Some("Borrow checker fight".to_string()),
            link: Some("https://stackoverflow.com/q/1".to_string()),
            answer_count: Some(0),
        }];

        let text = rendered(|out| print_unanswered(out, &questions));
        assert_eq!(
            text,
            "Title: Borrow checker fight\nLink: https://stackoverflow.com/q/1\n\n"
        );
    }

    fn tags() -> Vec<TagInfo> {
        vec![
            TagInfo {
                name: "rust".to_string(),
                count: 12,
                link: "https://stackoverflow.com/tags/rust/info".to_string(),
            },
            TagInfo {
                name: "c#".to_string(),
                count: 9,
                link: "https://stackoverflow.com/tags/c%23/info".to_string(),
            },
        ]
    }

    #[test]
    fn popular_tags_print_name_count_and_link() {
        let text = rendered(|out| print_popular_tags(out, &tags()));
        assert_eq!(
            text,
            "Most Popular Tags:\n\
             rust (12 questions): https://stackoverflow.com/tags/rust/info\n\
             c# (9 questions): https://stackoverflow.com/tags/c%23/info\n"
        );
    }

    #[test]
    fn tags_json_round_trips_through_serde() {
        let mut buf = Vec::new();
        write_tags_json(&mut buf, &tags()).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "rust");
        assert_eq!(parsed[0]["count"], 12);
        assert_eq!(parsed[1]["link"], "https://stackoverflow.com/tags/c%23/info");
    }

    #[test]
    fn extraction_failure_still_prints_empty_fields() {
        let questions = vec![RecentQuestion {
            title: Some("orphaned title".to_string()),
            link: None,
            answer_count: Some(0),
        }];

        let text = rendered(|out| print_unanswered(out, &questions));
        assert_eq!(text, "Title: \nLink: \n\n");
    }
}
