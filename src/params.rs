//! Rails-style parameter lists used for query strings and form bodies.
use std::fmt::Display;

/// An ordered list of key/value pairs.
///
/// Canvas reads arrays as repeated `key[]` pairs and nested resources
/// as `resource[field]` keys, e.g. `course[name]=Biology`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: Display>(&mut self, key: &str, value: V) -> &mut Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    /// Appends the pair only when `value` is set.
    pub fn push_opt<V: Display>(&mut self, key: &str, value: &Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Appends one `key[]` pair per element.
    pub fn push_list<V: Display>(&mut self, key: &str, values: &[V]) -> &mut Self {
        let key = if key.ends_with("[]") {
            key.to_owned()
        } else {
            format!("{}[]", key)
        };
        for v in values {
            self.pairs.push((key.clone(), v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Values recorded for `key`, in insertion order.
    pub fn get_all<'a: 'k, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + 'k {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    /// `application/x-www-form-urlencoded` rendition of the list.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl std::fmt::Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode() {
        let mut p = Params::new();
        p.push("course[name]", "Intro to Biology")
            .push("offer", true)
            .push_opt::<String>("search_term", &None)
            .push_list("include", &["term", "teachers"]);

        assert_eq!(
            p.encode(),
            "course%5Bname%5D=Intro+to+Biology&offer=true&include%5B%5D=term&include%5B%5D=teachers"
        );
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn test_push_list_does_not_double_suffix() {
        let mut p = Params::new();
        p.push_list("recipients[]", &[1, 2]);

        assert_eq!(p.get_all("recipients[]").collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn test_empty() {
        let p = Params::new();
        assert!(p.is_empty());
        assert_eq!(p.encode(), "");
    }
}
