use scraper::{ElementRef, Html};

/// Elements whose subtrees carry no article text: code, presentation, and
/// site chrome. Dropped wholesale before text collection.
const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer"];

/// Reduce an HTML document to its visible plain text.
///
/// Text nodes are joined with single spaces and whitespace runs are
/// collapsed, so the result splits cleanly on whitespace for word counting.
pub fn clean_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    collect_text(document.root_element(), &mut text);
    normalize_whitespace(&text)
}

fn collect_text(element: ElementRef, out: &mut String) {
    if EXCLUDED_ELEMENTS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        if let Some(fragment) = child.value().as_text() {
            out.push_str(fragment);
            out.push(' ');
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text(child_element, out);
        }
    }
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
