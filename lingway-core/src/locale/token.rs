/// A syntactically valid locale token, borrowed from the request.
///
/// A token is a language subtag of 2-3 ASCII letters, optionally followed by
/// `-` and a region subtag of 2-3 ASCII letters. The whole input must match;
/// `de`, `en-us` and `DEU-che` are tokens, `d`, `en_US`, `de-` and
/// `en-US-x` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleToken<'a> {
    pub language: &'a str,
    pub region: Option<&'a str>,
}

impl<'a> LocaleToken<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (language, region) = match raw.split_once('-') {
            Some((language, region)) => (language, Some(region)),
            None => (raw, None),
        };

        if !is_subtag(language) {
            return None;
        }

        if let Some(region) = region
            && !is_subtag(region)
        {
            return None;
        }

        Some(Self { language, region })
    }

    /// Canonical key: lowercase language, uppercase region.
    pub fn canonical(&self) -> String {
        let mut key = self.language.to_ascii_lowercase();
        if let Some(region) = self.region {
            key.push('-');
            key.push_str(&region.to_ascii_uppercase());
        }
        key
    }
}

fn is_subtag(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}
