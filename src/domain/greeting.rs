/// Language → greeting template. `{name}` is substituted at render time.
const TEMPLATES: &[(&str, &str)] = &[
    ("English", "Hello, my name is {name}."),
    ("Italian", "Ciao, mi chiamo {name}."),
];

pub fn template_for(language: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, template)| *template)
}

pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(lang, _)| *lang)
}

pub fn render(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lookup() {
        assert_eq!(template_for("English"), Some("Hello, my name is {name}."));
        assert_eq!(template_for("Italian"), Some("Ciao, mi chiamo {name}."));
        assert_eq!(template_for("Klingon"), None);
        // Lookup is case-sensitive
        assert_eq!(template_for("english"), None);
    }

    #[test]
    fn test_supported_languages() {
        let languages: Vec<_> = supported_languages().collect();
        assert_eq!(languages, vec!["English", "Italian"]);
    }

    #[test]
    fn test_render_substitutes_name() {
        assert_eq!(
            render("Hello, my name is {name}.", "Bob"),
            "Hello, my name is Bob."
        );
    }
}
