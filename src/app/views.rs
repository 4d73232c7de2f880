//! Page views and the application layout.

use crate::render::{el, HeadDecl, LinkTag, MetaTag, View, ViewError};
use crate::routing::Params;

pub const APP_NAME: &str = "appname";
pub const TITLE_TEMPLATE: &str = "appname | %s";

/// Application chrome: default head metadata around every page.
pub fn layout(page: View) -> View {
    View::fragment([
        View::Head(
            HeadDecl::new()
                .default_title(APP_NAME)
                .title_template(TITLE_TEMPLATE)
                .meta(MetaTag::name("viewport", "width=device-width, initial-scale=1"))
                .link(LinkTag::new("icon", "/favicon.ico")),
        ),
        page,
    ])
}

/// `/`
pub fn hello(_params: &Params) -> Result<View, ViewError> {
    Ok(el("div").child(el("h1").child("Hello world!")).into())
}

/// `/:name`
pub fn hello_name(params: &Params) -> Result<View, ViewError> {
    let name = params
        .get("name")
        .ok_or_else(|| ViewError::new("missing route parameter 'name'"))?;
    let greeting = format!("Hello {}!", name);

    Ok(el("div")
        .child(HeadDecl::new().title(greeting.as_str()))
        .child(el("h1").child(greeting))
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_name_requires_param() {
        assert!(hello_name(&Params::new()).is_err());
    }

    #[test]
    fn test_hello_name_declares_title() {
        let mut params = Params::new();
        params.insert("name".to_string(), "foo".to_string());
        match hello_name(&params).unwrap() {
            View::Element(div) => {
                assert_eq!(div.tag, "div");
                assert!(matches!(
                    &div.children[0],
                    View::Head(decl) if decl.title.as_deref() == Some("Hello foo!")
                ));
            }
            other => panic!("expected element, got {:?}", other),
        }
    }
}
