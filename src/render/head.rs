//! Head metadata collected during a render pass.
//!
//! Views contribute `HeadDecl`s as they render. The `HeadAccumulator` folds
//! them in tree order (outer before inner) into a single resolved `Head`:
//! - the last declared title wins, formatted by the last declared template
//! - with no title, the last declared default title is used as-is
//! - meta and link tags concatenate in declaration order

use crate::render::escape::{escape_into, write_attrs};

/// Placeholder substituted with the page title inside a title template.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// A `<meta>` tag as an ordered attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    attrs: Vec<(String, String)>,
}

impl MetaTag {
    /// `<meta name=".." content="..">`
    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attrs: vec![
                ("name".to_string(), name.into()),
                ("content".to_string(), content.into()),
            ],
        }
    }

    /// `<meta property=".." content="..">`, used by Open Graph.
    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attrs: vec![
                ("property".to_string(), property.into()),
                ("content".to_string(), content.into()),
            ],
        }
    }

    /// `<meta http-equiv=".." content="..">`
    pub fn http_equiv(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            attrs: vec![
                ("http-equiv".to_string(), header.into()),
                ("content".to_string(), content.into()),
            ],
        }
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("<meta");
        write_attrs(out, &self.attrs);
        out.push('>');
    }
}

/// A `<link>` tag. `rel` and `href` come first, extra attributes follow in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTag {
    attrs: Vec<(String, String)>,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            attrs: vec![
                ("rel".to_string(), rel.into()),
                ("href".to_string(), href.into()),
            ],
        }
    }

    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::new("stylesheet", href)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn rel(&self) -> &str {
        &self.attrs[0].1
    }

    pub fn href(&self) -> &str {
        &self.attrs[1].1
    }

    pub fn render_into(&self, out: &mut String) {
        out.push_str("<link");
        write_attrs(out, &self.attrs);
        out.push('>');
    }
}

/// Head contributions of a single view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadDecl {
    pub title: Option<String>,
    pub title_template: Option<String>,
    pub default_title: Option<String>,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

impl HeadDecl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Template applied to titles declared by this view or nested views, e.g. `"app | %s"`.
    pub fn title_template(mut self, template: impl Into<String>) -> Self {
        self.title_template = Some(template.into());
        self
    }

    /// Title used when no view declares one.
    pub fn default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = Some(title.into());
        self
    }

    pub fn meta(mut self, tag: MetaTag) -> Self {
        self.meta.push(tag);
        self
    }

    pub fn link(mut self, tag: LinkTag) -> Self {
        self.links.push(tag);
        self
    }
}

/// Resolved head metadata for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    pub title: Option<String>,
    pub meta: Vec<MetaTag>,
    pub links: Vec<LinkTag>,
}

impl Head {
    /// Render title, meta and link tags, in that order.
    pub fn render_into(&self, out: &mut String) {
        if let Some(ref title) = self.title {
            out.push_str("<title>");
            escape_into(out, title);
            out.push_str("</title>");
        }
        for tag in &self.meta {
            tag.render_into(out);
        }
        for tag in &self.links {
            tag.render_into(out);
        }
    }
}

/// Mutable accumulator threaded through one render pass.
#[derive(Debug, Default)]
pub struct HeadAccumulator {
    title: Option<String>,
    title_template: Option<String>,
    default_title: Option<String>,
    meta: Vec<MetaTag>,
    links: Vec<LinkTag>,
}

impl HeadAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, decl: &HeadDecl) {
        if decl.title.is_some() {
            self.title = decl.title.clone();
        }
        if decl.title_template.is_some() {
            self.title_template = decl.title_template.clone();
        }
        if decl.default_title.is_some() {
            self.default_title = decl.default_title.clone();
        }
        self.meta.extend(decl.meta.iter().cloned());
        self.links.extend(decl.links.iter().cloned());
    }

    pub fn finish(self) -> Head {
        let title = match (self.title, self.title_template) {
            (Some(title), Some(template)) => Some(template.replace(TITLE_PLACEHOLDER, &title)),
            (Some(title), None) => Some(title),
            (None, _) => self.default_title,
        };
        Head {
            title,
            meta: self.meta,
            links: self.links,
        }
    }
}
