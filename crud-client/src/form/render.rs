//! Rendering of raw JSON responses as output markup

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crud_protocol::errors::{ProtocolError, Result};

/// Indent unit: the HTML entity for a tab, so nesting survives markup whitespace collapsing
pub const INDENT: &[u8] = b"&#009;";
/// Markup substituted for every newline of the pretty printed JSON
pub const LINE_BREAK: &str = "<br>";

/// Pretty print `value` and turn every line break into `<br>`
pub fn to_html(value: &serde_json::Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    let pretty = String::from_utf8(buf)
        .map_err(|_| ProtocolError::new("Pretty printed JSON is not valid UTF-8"))?;
    Ok(pretty.replace('\n', LINE_BREAK))
}

#[cfg(test)]
mod tests {
    use super::to_html;
    use serde_json::json;

    #[test]
    fn renders_list_response() {
        let value = json!({"data": {"list": [{"id": 1, "name": "Widget", "price": 9.99}]}});
        let expected = concat!(
            "{<br>",
            "&#009;\"data\": {<br>",
            "&#009;&#009;\"list\": [<br>",
            "&#009;&#009;&#009;{<br>",
            "&#009;&#009;&#009;&#009;\"id\": 1,<br>",
            "&#009;&#009;&#009;&#009;\"name\": \"Widget\",<br>",
            "&#009;&#009;&#009;&#009;\"price\": 9.99<br>",
            "&#009;&#009;&#009;}<br>",
            "&#009;&#009;]<br>",
            "&#009;}<br>",
            "}"
        );
        assert_eq!(to_html(&value).unwrap(), expected);
    }

    #[test]
    fn keeps_server_key_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"data":{"product":{"name":"Pisco","id":3}}}"#).unwrap();
        let html = to_html(&value).unwrap();
        assert!(html.find("\"name\"").unwrap() < html.find("\"id\"").unwrap());
    }

    #[test]
    fn escaped_newlines_in_strings_are_not_line_breaks() {
        let html = to_html(&json!({"info": "a\nb"})).unwrap();
        assert_eq!(html, "{<br>&#009;\"info\": \"a\\nb\"<br>}");
    }

    #[test]
    fn empty_containers_stay_inline() {
        assert_eq!(to_html(&json!({"list": []})).unwrap(), "{<br>&#009;\"list\": []<br>}");
        assert_eq!(to_html(&json!({})).unwrap(), "{}");
    }
}
