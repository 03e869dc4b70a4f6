/// URL-safe identifier for a display name.
///
/// Lower-cases, transliterates to ASCII and collapses everything else into
/// single hyphens. Collisions between distinct names are not detected.
pub fn slugify(name: &str) -> String {
    ::slug::slugify(name)
}

pub fn presenter_permalink(slug: &str) -> String {
    format!("/presenters/{slug}/")
}
