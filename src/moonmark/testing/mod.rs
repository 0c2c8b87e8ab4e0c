//! Testing utilities
//!
//! Tests should not invent narratives inline when a sample will do. The reading samples in
//! `samples/` are written the way the generation service actually phrases readings
//! (Vietnamese prose, numbered sections, mixed bullet glyphs), and [`Samples`] loads them
//! by name. Block structure is checked with [`assert_blocks`]; rendered markup with
//! [`classes_of`] and [`strip_tags`].
//!
//! [`reading_tables`] mirrors the tables shipped in `moonmark-config`'s defaults, so
//! engine tests run against the same vocabulary as production.

mod assertions;
mod matchers;
mod samples;

pub use assertions::{assert_blocks, BlockAssertion, BlocksAssertion, ListAssertion};
pub use matchers::TextMatch;
pub use samples::{SampleError, Samples};

use crate::moonmark::tables::{
    ClassificationTables, FormatterTables, HighlightVocabulary, IconTable, DEFAULT_ICON,
};
use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<li(?: class="([^"]*)")?>"#).expect("list item pattern"));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// The reading site's tables: icons, highlight words and classification keywords.
pub fn reading_tables() -> FormatterTables {
    let icons = [
        ("tổng quan", "🔮"),
        ("thông điệp", "💫"),
        ("lời khuyên", "💡"),
        ("lưu ý", "⚠️"),
        ("kết luận", "✨"),
        ("định hướng", "🧭"),
        ("cảnh báo", "🚨"),
        ("cơ hội", "🎯"),
        ("thách thức", "⚡"),
        ("giải pháp", "🔧"),
        ("tương lai", "🔮"),
        ("hiện tại", "🌙"),
        ("quá khứ", "📜"),
        ("tình cảm", "💕"),
        ("sự nghiệp", "💼"),
        ("sức khỏe", "🏥"),
        ("tài chính", "💰"),
        ("gia đình", "👨‍👩‍👧‍👦"),
        ("bạn bè", "👥"),
        ("học tập", "📚"),
        ("du lịch", "✈️"),
        ("mục tiêu", "🎯"),
        ("ước mơ", "⭐"),
        ("hy vọng", "🌈"),
    ]
    .into_iter()
    .fold(IconTable::new(DEFAULT_ICON), |table, (keyword, icon)| {
        table.with_entry(keyword, icon)
    });

    FormatterTables {
        icons,
        highlight: HighlightVocabulary {
            words: strings(&["vũ trụ", "mặt trăng", "năng lượng"]),
        },
        classification: ClassificationTables {
            importance: strings(&["quan trọng", "lưu ý", "cảnh báo", "chú ý", "đặc biệt"]),
            caution: strings(&["cẩn thận", "nguy hiểm", "tránh", "không nên"]),
            success: strings(&["tốt", "tích cực", "may mắn", "thuận lợi", "thành công"]),
            romance: strings(&["tình cảm", "tình yêu", "tình duyên", "hôn nhân", "mối quan hệ"]),
            career: strings(&["sự nghiệp", "công việc", "nghề nghiệp", "kinh doanh", "thăng tiến"]),
            finance: strings(&["tài chính", "tiền bạc", "đầu tư", "kinh tế", "thu nhập"]),
            health: strings(&["sức khỏe", "bệnh tật", "thể chất", "tinh thần", "dinh dưỡng"]),
            family: strings(&["gia đình", "con cái", "cha mẹ", "anh chị em", "họ hàng"]),
            travel: strings(&["du lịch", "di chuyển", "đi xa", "nước ngoài", "khám phá"]),
        },
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Class attribute of every `<li>` in document order; `None` for untagged items.
pub fn classes_of(markup: &str) -> Vec<Option<String>> {
    LIST_ITEM_OPEN
        .captures_iter(markup)
        .map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Markup with every tag removed.
pub fn strip_tags(markup: &str) -> String {
    TAG.replace_all(markup, "").into_owned()
}
