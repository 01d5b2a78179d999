//! HTML templates, embedded at compile time.

use tera::{Context, Tera};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("maps.html", include_str!("../templates/maps.html")),
    ("map_detail.html", include_str!("../templates/map_detail.html")),
    ("brawlers.html", include_str!("../templates/brawlers.html")),
    (
        "brawler_detail.html",
        include_str!("../templates/brawler_detail.html"),
    ),
    ("error.html", include_str!("../templates/error.html")),
];

/// The site's template set.
pub struct Pages {
    tera: Tera,
}

impl Pages {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, ctx: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_parse() {
        let pages = Pages::new().unwrap();
        let html = pages.render("index.html", &Context::new()).unwrap();
        assert!(html.contains("<html"));
    }

    #[test]
    fn output_is_escaped() {
        let pages = Pages::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("status", &404);
        ctx.insert("title", "Not Found");
        ctx.insert("message", "<script>alert(1)</script>");
        let html = pages.render("error.html", &ctx).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
