use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

const PATH_PREFIX: &str = "/api/v1";

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Substitutes `{name}` placeholders of a path template with percent-encoded values.
///
/// Placeholders without a matching parameter are left as they are.
pub fn expand<V: AsRef<str>>(template: &str, params: &[(&str, V)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in params {
        let placeholder = format!("{{{}}}", name);
        let encoded = utf8_percent_encode(value.as_ref(), SEGMENT).to_string();
        path = path.replace(&placeholder, &encoded);
    }

    path
}

/// Whether `value` is a `.` or `..` segment, which url resolution removes.
///
/// Other values are safe because `expand` escapes `%` and `/`.
pub(crate) fn is_dot_segment(value: &str) -> bool {
    value == "." || value == ".."
}

/// Joins a path relative to the API root onto the instance base url.
pub(crate) fn api_url(base_url: &Url, path: &str) -> Result<Url, url::ParseError> {
    let path = path.trim_start_matches('/');

    base_url.join(&format!("{}/{}", PATH_PREFIX, path))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand() {
        let p = expand(
            "courses/{course_id}/assignments/{id}",
            &[("course_id", "12"), ("id", "7")],
        );
        assert_eq!(p, "courses/12/assignments/7");
    }

    #[test]
    fn test_expand_encodes_segment() {
        let p = expand("courses/{id}", &[("id", "sis_course_id:A/B 1")]);
        assert_eq!(p, "courses/sis_course_id:A%2FB%201");
    }

    #[test]
    fn test_expand_keeps_unknown_placeholder() {
        let p = expand("courses/{course_id}/pages/{url}", &[("course_id", "1")]);
        assert_eq!(p, "courses/1/pages/{url}");
    }

    #[test]
    fn test_api_url() {
        let base = Url::parse("https://canvas.example.edu").unwrap();
        let url = api_url(&base, "courses/1").unwrap();
        assert_eq!(url.as_str(), "https://canvas.example.edu/api/v1/courses/1");

        let url = api_url(&base, "/users/self").unwrap();
        assert_eq!(url.as_str(), "https://canvas.example.edu/api/v1/users/self");
    }
}
