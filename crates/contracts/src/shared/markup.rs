use once_cell::sync::Lazy;
use regex::Regex;

/// Открывающий тег абзаца (с атрибутами или самозакрытый) или закрывающий тег.
/// `<pre>`, `<param>` и прочие теги на `p` не совпадают.
static PARAGRAPH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<p(?:[\s/][^>]*)?>|</p\s*>").expect("valid paragraph regex"));

/// Убрать обёртку `<p>...</p>` из заголовка, сохранив остальной текст
///
/// Удаление тега может склеить соседний текст в новый тег (`<<p>p>`),
/// поэтому проходы повторяются, пока тегов не останется.
pub fn strip_paragraph_tags(html: &str) -> String {
    let mut text = html.to_string();
    while PARAGRAPH_TAG.is_match(&text) {
        text = PARAGRAPH_TAG.replace_all(&text, "").into_owned();
    }
    text
}
