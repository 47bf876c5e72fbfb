//! Link-header pagination.
use std::{collections::VecDeque, pin::Pin};

use futures::{Stream, StreamExt};
use reqwest::{header::LINK, header::HeaderMap, Method, Request as HttpRequest};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    client::{parse_body, status_unwrap},
    request::Request,
    Client, Error,
};

/// Pagination links of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagedResource {
    pub current: Option<Url>,
    pub next: Option<Url>,
    pub prev: Option<Url>,
    pub first: Option<Url>,
    pub last: Option<Url>,
}

impl PagedResource {
    /// Parses a `Link` header value such as
    /// `<https://host/api/v1/courses?page=2>; rel="next", <...>; rel="last"`.
    ///
    /// Entries that cannot be parsed are skipped.
    pub fn parse(link: &str) -> Self {
        let mut links = PagedResource::default();

        for entry in link.split(',') {
            let mut parts = entry.split(';');
            let target = match parts.next() {
                Some(t) => t.trim(),
                None => continue,
            };
            let url = match target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .and_then(|t| Url::parse(t).ok())
            {
                Some(u) => u,
                None => continue,
            };
            let rel = parts.find_map(|p| {
                p.trim()
                    .strip_prefix("rel=")
                    .map(|r| r.trim_matches('"').to_owned())
            });

            match rel.as_deref() {
                Some("current") => links.current = Some(url),
                Some("next") => links.next = Some(url),
                Some("prev") => links.prev = Some(url),
                Some("first") => links.first = Some(url),
                Some("last") => links.last = Some(url),
                _ => {}
            }
        }

        links
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }
}

/// Response data together with its pagination links.
#[derive(Debug)]
pub struct Paged<T> {
    pub data: T,
    pub links: PagedResource,
}

enum NextPage {
    First(HttpRequest),
    Url(Url),
    Done,
}

struct PageState<T> {
    client: Client,
    next: NextPage,
    buffer: VecDeque<T>,
}

async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    req: HttpRequest,
) -> Result<(Vec<T>, PagedResource), Error> {
    let resp = client.request(req).await?;
    let ok_resp = status_unwrap(resp).await?;
    let links = PagedResource::from_headers(ok_resp.headers());
    let items = parse_body(ok_resp).await?;

    Ok((items, links))
}

fn page_stream<T>(client: Client, first: HttpRequest) -> impl Stream<Item = Result<T, Error>> + Send
where
    T: DeserializeOwned + Send + 'static,
{
    let init_state = PageState {
        client,
        next: NextPage::First(first),
        buffer: VecDeque::new(),
    };
    futures::stream::unfold(init_state, |mut state| async move {
        loop {
            if let Some(item) = state.buffer.pop_front() {
                return Some((Ok(item), state));
            }

            let req = match std::mem::replace(&mut state.next, NextPage::Done) {
                NextPage::First(req) => req,
                NextPage::Url(url) => {
                    if url.origin() != state.client.base_url().origin() {
                        log::debug!("Not following next page outside base url: {}", url);
                        return Some((Err(Error::ForeignPageLink(url)), state));
                    }
                    log::debug!("Following next page: {}", url);
                    match state.client.new_request(Method::GET, url) {
                        Ok(r) => r,
                        Err(e) => return Some((Err(e), state)),
                    }
                }
                NextPage::Done => return None,
            };

            match fetch_page::<T>(&state.client, req).await {
                Ok((items, links)) => {
                    state.buffer.extend(items);
                    if let Some(url) = links.next {
                        state.next = NextPage::Url(url);
                    }
                }
                Err(e) => {
                    log::debug!("Request error: {}", e);
                    return Some((Err(e), state));
                }
            }
        }
    })
}

impl Client {
    /// Returns a stream over every item of a list endpoint,
    /// following `rel="next"` links until the last page.
    ///
    /// The first error is yielded and ends the stream. A `next` link on a
    /// different origin than the base url is not followed and yields
    /// [`Error::ForeignPageLink`].
    pub fn paginate<R, T>(&self, req: &R) -> Pin<Box<dyn Stream<Item = Result<T, Error>> + Send>>
    where
        R: Request<Output = Vec<T>> + ?Sized,
        T: DeserializeOwned + Send + 'static,
    {
        let first = req.has_errors().and_then(|_| self.build_request(req));

        match first {
            Ok(first) => page_stream(self.clone(), first).boxed(),
            Err(e) => futures::stream::once(async move { Err(e) }).boxed(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_link_header() {
        let header = r#"<https://canvas.example.edu/api/v1/courses?page=1&per_page=10>; rel="current",<https://canvas.example.edu/api/v1/courses?page=2&per_page=10>; rel="next",<https://canvas.example.edu/api/v1/courses?page=1&per_page=10>; rel="first",<https://canvas.example.edu/api/v1/courses?page=5&per_page=10>; rel="last""#;
        let links = PagedResource::parse(header);

        assert_eq!(
            links.next.unwrap().as_str(),
            "https://canvas.example.edu/api/v1/courses?page=2&per_page=10"
        );
        assert_eq!(
            links.last.unwrap().query(),
            Some("page=5&per_page=10")
        );
        assert!(links.current.is_some());
        assert!(links.first.is_some());
        assert!(links.prev.is_none());
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let links = PagedResource::parse(r#"garbage; rel="next", <not a url>; rel="prev""#);
        assert_eq!(links, PagedResource::default());
    }
}
