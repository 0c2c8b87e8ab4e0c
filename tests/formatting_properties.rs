//! Property tests for the narrative formatter

use moonmark::moonmark::ast::Block;
use moonmark::moonmark::testing::{classes_of, reading_tables, strip_tags};
use moonmark::NarrativeFormatter;
use once_cell::sync::Lazy;
use proptest::prelude::*;

static FORMATTER: Lazy<NarrativeFormatter> =
    Lazy::new(|| NarrativeFormatter::new(&reading_tables()).expect("reading tables to compile"));

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("vũ trụ".to_string()),
        Just("quan trọng".to_string()),
        Just("tình yêu".to_string()),
        Just("du lịch".to_string()),
        Just("năng lượng".to_string()),
    ]
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..6).prop_map(|words| words.join(" "))
}

fn bullet() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["-", "•", "*", "▪", "▬", "◆", "○", "◦", "◯"])
}

proptest! {
    #[test]
    fn never_fails_on_arbitrary_text(raw in any::<String>()) {
        prop_assert!(FORMATTER.format(&raw).is_ok());
    }

    #[test]
    fn never_fails_on_marker_heavy_text(raw in "[-*•“”\" 0-9.a-z\n]{0,60}") {
        prop_assert!(FORMATTER.format(&raw).is_ok());
    }

    #[test]
    fn bullet_lines_form_one_list_keeping_their_text(
        items in prop::collection::vec((bullet(), sentence()), 1..8)
    ) {
        let raw: String = items
            .iter()
            .map(|(glyph, text)| format!("{} {}", glyph, text))
            .collect::<Vec<_>>()
            .join("\n");
        let markup = FORMATTER.format(&raw).unwrap();

        prop_assert!(markup.starts_with("<ul>"));
        prop_assert_eq!(markup.matches("<ul>").count(), 1);
        prop_assert_eq!(classes_of(&markup).len(), items.len());

        let expected: String = items.iter().map(|(_, text)| text.as_str()).collect();
        prop_assert_eq!(strip_tags(&markup), expected);
    }

    #[test]
    fn classification_does_not_depend_on_neighbours(
        first in sentence(),
        second in sentence(),
    ) {
        let alone = classes_of(&FORMATTER.format(&format!("- {}", second)).unwrap());
        let together =
            classes_of(&FORMATTER.format(&format!("- {}\n- {}", first, second)).unwrap());
        prop_assert_eq!(&together[1..], &alone[..]);
    }

    #[test]
    fn reclassifying_item_text_keeps_classes(
        items in prop::collection::vec((bullet(), sentence()), 1..6)
    ) {
        let raw: String = items
            .iter()
            .map(|(glyph, text)| format!("{} {}", glyph, text))
            .collect::<Vec<_>>()
            .join("\n");
        let first = FORMATTER.blocks(&raw).unwrap();
        let Some(Block::List(list)) = first.first() else {
            return Err(TestCaseError::fail("expected a list block"));
        };

        let tags: Vec<_> = list.items.iter().map(|item| item.class_tag).collect();
        let again: String = list
            .items
            .iter()
            .map(|item| format!("- {}", item.text.plain_text()))
            .collect::<Vec<_>>()
            .join("\n");
        let retagged: Vec<_> = match FORMATTER.blocks(&again).unwrap().first() {
            Some(Block::List(list)) => list.items.iter().map(|item| item.class_tag).collect(),
            other => {
                return Err(TestCaseError::fail(format!("expected a list, got {:?}", other)))
            }
        };
        prop_assert_eq!(retagged, tags.clone());

        let expected: Vec<_> = tags
            .iter()
            .map(|tag| tag.map(|t| t.css_class().to_string()))
            .collect();
        prop_assert_eq!(classes_of(&FORMATTER.format(&raw).unwrap()), expected);
    }

    #[test]
    fn paragraph_text_survives(text in sentence()) {
        let markup = FORMATTER.format(&text).unwrap();
        prop_assert!(markup.starts_with("<p>"));
        prop_assert_eq!(strip_tags(&markup), text);
    }
}
