use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));
static H1_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("h1 selector should be valid"));
static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6").expect("heading selector should be valid")
});
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("p selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("a[href] selector should be valid"));
static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("time, [datetime], .date, .published")
        .expect("date marker selector should be valid")
});
static CANONICAL_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("link[rel='canonical']").expect("canonical selector should be valid")
});
static OPEN_GRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property^='og:']").expect("open graph selector should be valid")
});
static JSON_LD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script[type='application/ld+json']")
        .expect("json-ld selector should be valid")
});
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static META_KEYWORDS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='keywords']").expect("meta keywords selector should be valid")
});
static META_VIEWPORT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='viewport']").expect("meta viewport selector should be valid")
});
static META_ROBOTS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='robots']").expect("meta robots selector should be valid")
});

/// Elements whose text never renders as page content
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Read-only view over a parsed document and the URL it was served from
#[derive(Clone, Copy)]
pub struct Page<'a> {
    document: &'a Html,
    url: &'a Url,
}

impl<'a> Page<'a> {
    pub fn new(document: &'a Html, url: &'a Url) -> Self {
        Self { document, url }
    }

    pub fn url(&self) -> &'a Url {
        self.url
    }

    pub fn hostname(&self) -> &'a str {
        self.url.host_str().unwrap_or_default()
    }

    /// Raw text of the first `<title>` element, untrimmed
    pub fn title_text(&self) -> Option<String> {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    pub fn meta_description(&self) -> Option<&'a str> {
        self.first_attr(&META_DESC_SELECTOR, "content")
    }

    pub fn meta_keywords(&self) -> Option<&'a str> {
        self.first_attr(&META_KEYWORDS_SELECTOR, "content")
    }

    pub fn viewport(&self) -> Option<&'a str> {
        self.first_attr(&META_VIEWPORT_SELECTOR, "content")
    }

    pub fn robots(&self) -> Option<&'a str> {
        self.first_attr(&META_ROBOTS_SELECTOR, "content")
    }

    pub fn canonical_href(&self) -> Option<&'a str> {
        self.first_attr(&CANONICAL_SELECTOR, "href")
    }

    pub fn h1_count(&self) -> usize {
        self.document.select(&H1_SELECTOR).count()
    }

    /// Raw text of the first `<h1>` element, untrimmed
    pub fn first_h1_text(&self) -> Option<String> {
        self.document
            .select(&H1_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    pub fn heading_count(&self) -> usize {
        self.document.select(&HEADING_SELECTOR).count()
    }

    pub fn paragraph_count(&self) -> usize {
        self.document.select(&PARAGRAPH_SELECTOR).count()
    }

    /// Returns `(images with a non-empty alt attribute, total images)`
    pub fn image_alt_counts(&self) -> (usize, usize) {
        self.document
            .select(&IMG_SELECTOR)
            .fold((0, 0), |(with_alt, total), img| {
                let has_alt = img.value().attr("alt").is_some_and(|alt| !alt.is_empty());
                (with_alt + usize::from(has_alt), total + 1)
            })
    }

    pub fn anchor_hrefs(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|el| el.value().attr("href"))
    }

    pub fn has_date_marker(&self) -> bool {
        self.document.select(&DATE_SELECTOR).next().is_some()
    }

    pub fn open_graph_count(&self) -> usize {
        self.document.select(&OPEN_GRAPH_SELECTOR).count()
    }

    pub fn json_ld_count(&self) -> usize {
        self.document.select(&JSON_LD_SELECTOR).count()
    }

    /// Concatenated text of `<body>`, skipping script-like elements
    pub fn visible_body_text(&self) -> String {
        let Some(body) = self.document.select(&BODY_SELECTOR).next() else {
            return String::new();
        };

        let mut text = String::new();
        for node in body.descendants() {
            let Some(fragment) = node.value().as_text() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
            });
            if !hidden {
                text.push_str(fragment);
            }
        }
        text
    }

    fn first_attr(&self, selector: &Selector, attr: &str) -> Option<&'a str> {
        self.document
            .select(selector)
            .next()
            .and_then(|el: ElementRef<'a>| el.value().attr(attr))
    }
}
