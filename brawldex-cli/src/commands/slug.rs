use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Print the slug for each name, one per line.
pub(crate) fn run_slug(names: &[String]) {
    for name in names {
        let slug = brawldex_core::slugify(name);
        if slug.is_empty() {
            log::warn!(
                "{} {:?} has no valid slug",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                name,
            );
        } else {
            log::info!("{slug}");
        }
    }
}
