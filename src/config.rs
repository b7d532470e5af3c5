/// URLs the client talks to.
///
/// The defaults point at the production service; tests and proxies can
/// inject their own.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Definition lookup, takes a `term` query parameter.
    pub define: String,
    /// Random definition, no parameters.
    pub random: String,
    /// Homepage; its `<title>` carries the word of the day.
    pub homepage: String,
    /// Random-word page; carries the trending-terms list.
    pub random_page: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            define: "https://api.urbandictionary.com/v0/define".to_string(),
            random: "https://api.urbandictionary.com/v0/random".to_string(),
            homepage: "https://www.urbandictionary.com".to_string(),
            random_page: "https://www.urbandictionary.com/random.php".to_string(),
        }
    }
}
