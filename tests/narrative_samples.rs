//! End-to-end formatting of the bundled reading samples
//!
//! Every test loads its narrative through `Samples` and checks either the typed blocks
//! (via `assert_blocks`) or the rendered markup.

use moonmark::moonmark::ast::ClassificationTag;
use moonmark::moonmark::testing::{assert_blocks, classes_of, reading_tables, Samples};
use moonmark::NarrativeFormatter;
use rstest::rstest;

fn formatter() -> NarrativeFormatter {
    NarrativeFormatter::new(&reading_tables()).expect("reading tables to compile")
}

#[test]
fn full_reading_markup() {
    let markup = formatter().format(&Samples::load("full-reading")).unwrap();
    insta::assert_snapshot!(markup, @r#"<div class="section-header"><span class="section-number">1.</span> <span class="section-icon">💫</span> Thông điệp từ <span class="highlight">vũ trụ</span></div><p>Hôm nay <strong><span class="highlight">vũ trụ</span> đang chờ đợi</strong> bạn mở lòng.</p><div class="section-header"><span class="section-number">2.</span> <span class="section-icon">💡</span> Lời khuyên cho tình cảm</div><h4><span class="subsection-number">2.1</span> Trong mối quan hệ</h4><ul><li class="important">Đây là điều quan trọng cần lưu ý trong tình yêu</li><li class="warning">Hãy <em>cẩn thận</em> với lời nói</li><li class="success">Một khởi đầu may mắn</li><li class="travel">Chuyến du lịch sắp tới</li></ul><blockquote>Hãy tin vào trực giác của bạn</blockquote><div class="section-header"><span class="section-number">3.</span> <span class="section-icon">🌟</span> Ghi chú chung</div><p><span class="highlight">Năng lượng</span> của <span class="highlight">mặt trăng</span> sẽ dẫn lối.</p>"#);
}

#[test]
fn full_reading_blocks() {
    let blocks = formatter().blocks(&Samples::load("full-reading")).unwrap();

    assert_blocks(&blocks)
        .count(8)
        .block(0, |b| {
            b.section()
                .number("1")
                .icon("💫")
                .title("Thông điệp từ vũ trụ");
        })
        .block(1, |b| b.paragraph("Hôm nay vũ trụ đang chờ đợi bạn mở lòng."))
        .block(2, |b| {
            b.section().number("2").icon("💡");
        })
        .block(3, |b| {
            b.subsection().number("2.1").title("Trong mối quan hệ");
        })
        .block(4, |b| {
            b.list()
                .item_count(4)
                .item(1, |item| {
                    item.text("Hãy cẩn thận với lời nói");
                })
                .classes(&[
                    Some(ClassificationTag::Importance),
                    Some(ClassificationTag::Caution),
                    Some(ClassificationTag::Success),
                    Some(ClassificationTag::Travel),
                ]);
        })
        .block(5, |b| b.quote("Hãy tin vào trực giác của bạn"))
        .block(6, |b| {
            b.section().number("3").icon("🌟").title("Ghi chú chung");
        })
        .block(7, |b| {
            b.paragraph("Năng lượng của mặt trăng sẽ dẫn lối.")
        });
}

#[test]
fn mixed_bullets_merge_until_blank_line() {
    let blocks = formatter().blocks(&Samples::load("mixed-bullets")).unwrap();

    assert_blocks(&blocks)
        .count(3)
        .block(0, |b| b.paragraph("Những điều cần nhớ:"))
        .block(1, |b| {
            b.list()
                .item_count(8)
                .item(0, |item| {
                    item.text("Gạch ngang");
                })
                .item(2, |item| {
                    item.text("Dấu sao");
                })
                .item(7, |item| {
                    item.text("Chấm rỗng");
                });
        })
        .block(2, |b| {
            b.list().item_count(1).item(0, |item| {
                item.text("Sau dòng trống là danh sách mới");
            });
        });
}

#[test]
fn classification_follows_group_priority() {
    let blocks = formatter()
        .blocks(&Samples::load("classification-priority"))
        .unwrap();

    use ClassificationTag::*;
    assert_blocks(&blocks).count(1).block(0, |b| {
        b.list()
            .item_count(8)
            .item(4, |item| {
                item.text_contains("kinh doanh").class(Some(Career));
            })
            .item(5, |item| {
                item.text_contains("sức khỏe").class(Some(Health));
            })
            .classes(&[
                Some(Importance),
                Some(Importance),
                Some(Caution),
                Some(Success),
                Some(Career),
                Some(Health),
                Some(Travel),
                None,
            ]);
    });
}

#[test]
fn malformed_input_degrades_to_paragraphs() {
    let markup = formatter().format(&Samples::load("malformed")).unwrap();
    assert_eq!(
        markup,
        concat!(
            "<p>**Chưa đóng đậm</p>",
            "<p>Một dấu *lẻ loi</p>",
            "<p>-</p>",
            "<p>•   </p>",
            "<p>“Lệch dấu\"</p>",
            "<p>1.</p>",
            "<p>1. </p>",
            "<p>**</p>",
            "<p>5 * 3 = 15</p>",
        )
    );
}

#[test]
fn windows_line_endings() {
    let markup = formatter()
        .format(&Samples::load("windows-newlines"))
        .unwrap();
    assert_eq!(
        markup,
        concat!(
            "<div class=\"section-header\"><span class=\"section-number\">1.</span> ",
            "<span class=\"section-icon\">🔮</span> Tổng quan</div>",
            "<ul><li class=\"success\"><span class=\"highlight\">Năng lượng</span> tích cực</li></ul>",
            "<p>Kết thúc</p>",
        )
    );
}

#[test]
fn every_sample_formats() {
    let formatter = formatter();
    let names = Samples::names();
    assert!(names.len() >= 5);
    for name in names {
        let source = Samples::load(&name);
        let markup = formatter
            .format(&source)
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(!markup.is_empty(), "{} produced no markup", name);
    }
}

#[rstest]
#[case("1. Thông điệp từ vũ trụ", "💫")]
#[case("3. Ghi chú chung", "🌟")]
#[case("2. TỔNG QUAN về lá bài", "🔮")]
#[case("4. Hiện tại và tương lai", "🔮")]
#[case("5. Hiện tại của bạn", "🌙")]
#[case("6. Gia đình", "👨‍👩‍👧‍👦")]
#[case("7. Kết luận", "✨")]
fn section_icons(#[case] line: &str, #[case] icon: &str) {
    let blocks = formatter().blocks(line).unwrap();
    assert_blocks(&blocks).count(1).block(0, |b| {
        b.section().icon(icon);
    });
}

#[rstest]
#[case("- Đây là điều quan trọng cần lưu ý", Some("important"))]
#[case("- Đây là điều quan trọng trong tình yêu", Some("important"))]
#[case("- Không nên vội vàng", Some("warning"))]
#[case("- Mọi việc đều tốt", Some("success"))]
#[case("- Hôn nhân bền chặt", Some("love"))]
#[case("- Thăng tiến nhanh", Some("career"))]
#[case("- Tiền bạc dồi dào", Some("money"))]
#[case("- Dinh dưỡng hợp lý", Some("health"))]
#[case("- Cha mẹ luôn bên bạn", Some("family"))]
#[case("- Khám phá vùng đất mới", Some("travel"))]
#[case("- Một ngày yên bình", None)]
fn list_item_classes(#[case] line: &str, #[case] class: Option<&str>) {
    let markup = formatter().format(line).unwrap();
    assert_eq!(classes_of(&markup), vec![class.map(str::to_string)]);
}

#[rstest]
#[case("- a\n• b\n* c")]
#[case("▪ a\n▫ b\n▯ c")]
#[case("◆ a\n● b\n◦ c")]
#[case("- a\n▮ b\n◯ c")]
fn three_bullets_one_list(#[case] source: &str) {
    let markup = formatter().format(source).unwrap();
    assert_eq!(markup, "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn quoted_line_is_a_quote_block() {
    let markup = formatter()
        .format("“Hãy tin vào trực giác của bạn”")
        .unwrap();
    assert_eq!(markup, "<blockquote>Hãy tin vào trực giác của bạn</blockquote>");
}

#[test]
fn highlight_nests_inside_bold() {
    let markup = formatter().format("**vũ trụ đang chờ đợi**").unwrap();
    assert_eq!(
        markup,
        "<p><strong><span class=\"highlight\">vũ trụ</span> đang chờ đợi</strong></p>"
    );
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(formatter().format("").unwrap(), "");
}
