//! HTML serialisation helpers

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

pub fn open_tag(buf: &mut String, tag: &str, id: Option<&str>) {
    buf.push('<');
    buf.push_str(tag);
    if let Some(id) = id {
        buf.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    buf.push('>');
}

pub fn close_tag(buf: &mut String, tag: &str) {
    buf.push_str(&format!("</{}>", tag));
}
