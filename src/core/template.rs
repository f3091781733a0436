/// Phrase templates — parsing and placeholder substitution.

/// A substitutable slot inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{mood}` — the mood label.
    Mood,
    /// `{food}` — the food label.
    Food,
}

impl Placeholder {
    pub const ALL: [Placeholder; 2] = [Placeholder::Mood, Placeholder::Food];

    /// The literal token as written in a template.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Mood => "{mood}",
            Self::Food => "{food}",
        }
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A placeholder replaced at fill time.
    Slot(Placeholder),
}

/// Values substituted into templates.
#[derive(Debug, Clone, Copy)]
pub struct Vars<'a> {
    pub mood: &'a str,
    pub food: &'a str,
}

impl<'a> Vars<'a> {
    pub fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::Mood => self.mood,
            Placeholder::Food => self.food,
        }
    }
}

/// A parsed template — a sequence of segments plus its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into segments.
    ///
    /// Only `{mood}` and `{food}` are recognised. Any other brace text,
    /// unknown names and stray braces included, stays literal.
    pub fn parse(input: &str) -> Template {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let mut rest = input;

        while let Some(pos) = rest.find('{') {
            literal_buf.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            match Placeholder::ALL.iter().find(|p| tail.starts_with(p.token())) {
                Some(p) => {
                    if !literal_buf.is_empty() {
                        segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    segments.push(TemplateSegment::Slot(*p));
                    rest = &tail[p.token().len()..];
                }
                None => {
                    literal_buf.push('{');
                    rest = &tail[1..];
                }
            }
        }
        literal_buf.push_str(rest);

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Template {
            source: input.to_string(),
            segments,
        }
    }

    /// The template as originally written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute every placeholder occurrence.
    pub fn fill(&self, vars: &Vars<'_>) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Slot(p) => out.push_str(vars.get(*p)),
            }
        }
        out
    }

    /// `{word}` sequences that look like placeholders but are not known.
    pub fn unknown_placeholders(&self) -> Vec<String> {
        let mut found = Vec::new();
        let mut rest = self.source.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let name_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_len];
            if !name.is_empty()
                && after[name_len..].starts_with('}')
                && !Placeholder::ALL.iter().any(|p| &p.token()[1..p.token().len() - 1] == name)
            {
                found.push(name.to_string());
            }
            rest = after;
        }

        found
    }
}

/// Parse and fill in one step.
pub fn fill_vars(template: &str, vars: &Vars<'_>) -> String {
    Template::parse(template).fill(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: Vars<'static> = Vars {
        mood: "Tired",
        food: "Sushi",
    };

    #[test]
    fn parse_literal_only() {
        let t = Template::parse("Slow is a speed, too.");
        assert_eq!(
            t.segments,
            vec![TemplateSegment::Literal("Slow is a speed, too.".to_string())]
        );
    }

    #[test]
    fn parse_mixed_segments() {
        let t = Template::parse("Dear {mood}, have some {food}.");
        assert_eq!(
            t.segments,
            vec![
                TemplateSegment::Literal("Dear ".to_string()),
                TemplateSegment::Slot(Placeholder::Mood),
                TemplateSegment::Literal(", have some ".to_string()),
                TemplateSegment::Slot(Placeholder::Food),
                TemplateSegment::Literal(".".to_string()),
            ]
        );
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(fill_vars("{mood}, oh {mood}", &VARS), "Tired, oh Tired");
        assert_eq!(fill_vars("{food}{food}{mood}", &VARS), "SushiSushiTired");
    }

    #[test]
    fn unknown_and_stray_braces_stay_literal() {
        assert_eq!(fill_vars("{name} and {mood}", &VARS), "{name} and Tired");
        assert_eq!(fill_vars("{{mood}}", &VARS), "{Tired}");
        assert_eq!(fill_vars("open { close }", &VARS), "open { close }");
        assert_eq!(fill_vars("trailing {", &VARS), "trailing {");
    }

    #[test]
    fn placeholder_names_are_case_sensitive() {
        assert_eq!(fill_vars("{Mood}", &VARS), "{Mood}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let vars = Vars {
            mood: "{food}",
            food: "x",
        };
        assert_eq!(fill_vars("{mood}", &vars), "{food}");
    }

    #[test]
    fn unknown_placeholders_listed() {
        let t = Template::parse("{mood} meets {friend} at {place}. {not a name}");
        assert_eq!(t.unknown_placeholders(), vec!["friend", "place"]);
        assert!(Template::parse("{mood} {food}").unknown_placeholders().is_empty());
    }

    #[test]
    fn source_preserved() {
        let t = Template::parse("Hi {mood}");
        assert_eq!(t.source(), "Hi {mood}");
    }
}
