use std::collections::HashMap;

pub const FALLBACK_LANGUAGE: &str = "en";

/// Message catalogue with `{{ param }}` interpolation.
///
/// Lookups fall back to English, then to the key itself.
#[derive(Debug, Clone)]
pub struct Translator {
    app_name: String,
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl Translator {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            catalogs: HashMap::new(),
        }
    }

    /// Catalogue preloaded with the Point messages in English and French.
    pub fn with_defaults(app_name: &str) -> Self {
        let entity = |suffix: &str| format!("{app_name}.point.{suffix}");

        Self::new(app_name)
            .with_message("en", &entity("created"), "A new Point is created with identifier {{ param }}")
            .with_message("en", &entity("updated"), "A Point is updated with identifier {{ param }}")
            .with_message("en", &entity("deleted"), "A Point is deleted with identifier {{ param }}")
            .with_message("en", "error.http.400", "Bad request")
            .with_message("en", "error.http.404", "The page does not exist.")
            .with_message("en", "error.http.500", "Internal server error")
            .with_message("en", "error.unexpected", "An unexpected error occurred")
            .with_message("fr", &entity("created"), "Un nouveau Point a été créé avec l'identifiant {{ param }}")
            .with_message("fr", &entity("updated"), "Un Point a été mis à jour avec l'identifiant {{ param }}")
            .with_message("fr", &entity("deleted"), "Un Point a été supprimé avec l'identifiant {{ param }}")
            .with_message("fr", "error.unexpected", "Une erreur inattendue est survenue")
    }

    pub fn with_message(mut self, language: &str, key: &str, template: &str) -> Self {
        self.catalogs
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), template.to_string());
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// `<app>.point.<suffix>` key.
    pub fn point_key(&self, suffix: &str) -> String {
        format!("{}.point.{}", self.app_name, suffix)
    }

    pub fn translate(&self, language: &str, key: &str, param: Option<&str>) -> String {
        let template = [language, FALLBACK_LANGUAGE]
            .iter()
            .find_map(|lang| self.catalogs.get(*lang).and_then(|c| c.get(key)));

        match template {
            Some(t) => interpolate(t, param.unwrap_or_default()),
            None => key.to_string(),
        }
    }
}

fn interpolate(template: &str, param: &str) -> String {
    template
        .replace("{{ param }}", param)
        .replace("{{param}}", param)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_in_requested_language() {
        let t = Translator::with_defaults("jhipsterVueApp");
        assert_eq!(
            t.translate("en", "jhipsterVueApp.point.created", Some("12")),
            "A new Point is created with identifier 12"
        );
        assert_eq!(
            t.translate("fr", "jhipsterVueApp.point.updated", Some("3")),
            "Un Point a été mis à jour avec l'identifiant 3"
        );
    }

    #[test]
    fn falls_back_to_english_then_key() {
        let t = Translator::with_defaults("jhipsterVueApp");
        assert_eq!(t.translate("de", "error.http.400", None), "Bad request");
        assert_eq!(t.translate("en", "no.such.key", None), "no.such.key");
    }

    #[test]
    fn point_key_is_namespaced() {
        assert_eq!(Translator::new("app").point_key("deleted"), "app.point.deleted");
    }
}
