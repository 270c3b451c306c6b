//! Classification rules
//!
//! This module defines the ordered rule list that assigns a category
//! to each raw token. Rules are evaluated in order and the first match
//! wins; a token no rule claims is `Default`.

use regex::Regex;

use super::splitter::RawToken;
use super::tokens::Category;

/// Reserved words, matched exactly and case-sensitively
pub static KEYWORDS: &[&str] = &[
    "class", "function", "const", "let", "var", "if", "else", "for", "while", "return",
    "import", "from", "async", "await", "try", "catch", "throw", "new", "this", "super",
];

/// Boolean literals
pub static BOOLEANS: &[&str] = &["true", "false"];

const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];
const BRACKET_CHARS: &[char] = &['{', '}', '(', ')', '[', ']'];
const PUNCTUATION_CHARS: &[char] = &['.', ',', ';'];

/// A token together with the line it came from
///
/// The line is needed for look-ahead: whether an identifier is a call
/// depends on the character after it, which is not part of the token.
#[derive(Debug, Clone, Copy)]
pub struct TokenContext<'a> {
    pub token: RawToken<'a>,
    pub line: &'a str,
}

impl<'a> TokenContext<'a> {
    pub fn new(token: RawToken<'a>, line: &'a str) -> Self {
        Self { token, line }
    }

    /// Token text
    pub fn text(&self) -> &'a str {
        self.token.text
    }

    /// Character immediately after the token in the line
    pub fn next_char(&self) -> Option<char> {
        self.line.get(self.token.end()..)?.chars().next()
    }
}

/// What a rule checks
pub enum Matcher {
    /// Token is entirely whitespace
    Whitespace,
    /// Trimmed token equals one of the words
    Word(&'static [&'static str]),
    /// Token matches the regex
    Pattern(Regex),
    /// Token matches the regex and is not one of the excluded words
    Identifier { pattern: Regex, exclude: &'static [&'static str] },
    /// Identifier immediately followed by the given character in the line
    FollowedBy { pattern: Regex, exclude: &'static [&'static str], next: char },
    /// Token contains any of the characters
    ContainsAny(&'static [char]),
    /// Token starts and ends with the same quote character
    Quoted,
    /// Token starts with the prefix
    Prefix(&'static str),
}

impl Matcher {
    /// Test a token against this matcher
    pub fn matches(&self, ctx: &TokenContext<'_>) -> bool {
        let text = ctx.text();
        match self {
            Matcher::Whitespace => text.chars().all(char::is_whitespace),
            Matcher::Word(words) => words.contains(&text.trim()),
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Identifier { pattern, exclude } => {
                pattern.is_match(text) && !exclude.contains(&text)
            }
            Matcher::FollowedBy { pattern, exclude, next } => {
                pattern.is_match(text) && !exclude.contains(&text) && ctx.next_char() == Some(*next)
            }
            Matcher::ContainsAny(chars) => text.contains(*chars),
            Matcher::Quoted => is_quoted(text),
            Matcher::Prefix(prefix) => text.starts_with(prefix),
        }
    }
}

/// `'...'` or `"..."`: at least two characters, same quote at both ends
fn is_quoted(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => (first == '"' || first == '\'') && first == last,
        _ => false,
    }
}

/// A single classification rule
pub struct Rule {
    /// Name for debugging
    pub name: &'static str,
    /// What the token must satisfy
    pub matcher: Matcher,
    /// Category assigned on match
    pub category: Category,
}

impl Rule {
    pub fn new(name: &'static str, matcher: Matcher, category: Category) -> Self {
        Self { name, matcher, category }
    }

    /// Create a rule from a regex pattern
    pub fn pattern(name: &'static str, pattern: &str, category: Category) -> Option<Self> {
        Regex::new(pattern)
            .ok()
            .map(|re| Self::new(name, Matcher::Pattern(re), category))
    }

    pub fn matches(&self, ctx: &TokenContext<'_>) -> bool {
        self.matcher.matches(ctx)
    }
}

/// Ordered list of rules, first match wins
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set (everything classifies as `Default`)
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard rule list
    ///
    /// `import`/`from` are keywords, so there is no separate import rule
    /// after the keyword rule; it could never fire.
    pub fn standard() -> Self {
        let mut set = Self::empty();
        let ident = r"^[a-z][a-zA-Z0-9]*$";

        set.push(Rule::new("space", Matcher::Whitespace, Category::Space));
        set.push(Rule::new("keyword", Matcher::Word(KEYWORDS), Category::Keyword));
        if let Some(rule) = Rule::pattern("class", r"^[A-Z][a-zA-Z0-9]*$", Category::Class) {
            set.push(rule);
        }
        if let Ok(pattern) = Regex::new(ident) {
            let matcher = Matcher::FollowedBy { pattern, exclude: BOOLEANS, next: '(' };
            set.push(Rule::new("function", matcher, Category::Function));
        }
        if let Ok(pattern) = Regex::new(ident) {
            let matcher = Matcher::Identifier { pattern, exclude: BOOLEANS };
            set.push(Rule::new("variable", matcher, Category::Variable));
        }
        set.push(Rule::new("operator", Matcher::ContainsAny(OPERATOR_CHARS), Category::Operator));
        set.push(Rule::new("string", Matcher::Quoted, Category::String));
        if let Some(rule) = Rule::pattern("number", r"^[0-9]+$", Category::Number) {
            set.push(rule);
        }
        set.push(Rule::new("boolean", Matcher::Word(BOOLEANS), Category::Boolean));
        set.push(Rule::new("comment", Matcher::Prefix("//"), Category::Comment));
        set.push(Rule::new("decorator", Matcher::Prefix("@"), Category::Decorator));
        set.push(Rule::new("bracket", Matcher::ContainsAny(BRACKET_CHARS), Category::Bracket));
        set.push(Rule::new(
            "punctuation",
            Matcher::ContainsAny(PUNCTUATION_CHARS),
            Category::Punctuation,
        ));

        set
    }

    /// Append a rule at the lowest precedence
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching the token, if any
    pub fn find(&self, ctx: &TokenContext<'_>) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(ctx))
    }

    /// Category for a token
    ///
    /// A trailing comment carved off by the splitter is a comment no
    /// matter what characters it contains.
    pub fn classify(&self, ctx: &TokenContext<'_>) -> Category {
        if ctx.token.is_comment {
            return Category::Comment;
        }
        let category = self.find(ctx).map_or(Category::Default, |rule| rule.category);
        log::trace!("{:?} -> {}", ctx.text(), category);
        category
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::splitter::split_line;
    use proptest::prelude::*;

    /// Classify every token of a line
    fn classify_line(line: &str) -> Vec<(&str, Category)> {
        let rules = RuleSet::standard();
        split_line(line)
            .into_iter()
            .map(|t| (t.text, rules.classify(&TokenContext::new(t, line))))
            .collect()
    }

    /// Classify a token standing alone on its line
    fn classify(token: &str) -> Category {
        let raw = RawToken { text: token, offset: 0, is_comment: false };
        RuleSet::standard().classify(&TokenContext::new(raw, token))
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RuleSet::standard().rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "space", "keyword", "class", "function", "variable", "operator", "string",
                "number", "boolean", "comment", "decorator", "bracket", "punctuation",
            ]
        );
    }

    #[test]
    fn test_space() {
        assert_eq!(classify(" "), Category::Space);
        assert_eq!(classify("\t  "), Category::Space);
    }

    #[test]
    fn test_keyword_precedes_class_and_variable() {
        assert_eq!(classify("class"), Category::Keyword);
        assert_eq!(classify("return"), Category::Keyword);
        assert_eq!(classify("this"), Category::Keyword);
        // Case-sensitive
        assert_eq!(classify("Class"), Category::Class);
    }

    #[test]
    fn test_import_is_keyword() {
        assert_eq!(classify("import"), Category::Keyword);
        assert_eq!(classify("from"), Category::Keyword);
    }

    #[test]
    fn test_class() {
        assert_eq!(classify("Foo"), Category::Class);
        assert_eq!(classify("HTTP2"), Category::Class);
        assert_eq!(classify("Foo_Bar"), Category::Default);
    }

    #[test]
    fn test_function_vs_variable() {
        let classes = classify_line("foo(bar)");
        assert_eq!(classes[0], ("foo", Category::Function));
        assert_eq!(classes[2], ("bar", Category::Variable));
    }

    #[test]
    fn test_function_needs_adjacent_paren() {
        let classes = classify_line("foo (bar)");
        assert_eq!(classes[0], ("foo", Category::Variable));
    }

    #[test]
    fn test_boolean_vs_variable() {
        assert_eq!(classify("true"), Category::Boolean);
        assert_eq!(classify("false"), Category::Boolean);
        assert_eq!(classify("truthy"), Category::Variable);
        assert_eq!(classify_line("true()")[0], ("true", Category::Boolean));
    }

    #[test]
    fn test_operator() {
        assert_eq!(classify("="), Category::Operator);
        assert_eq!(classify("=>"), Category::Operator);
        assert_eq!(classify("a-b"), Category::Operator);
        // Operator characters win over quotes
        assert_eq!(classify("\"a+b\""), Category::Operator);
    }

    #[test]
    fn test_string() {
        assert_eq!(classify("\"hello\""), Category::String);
        assert_eq!(classify("'x'"), Category::String);
        assert_eq!(classify("''"), Category::String);
        assert_eq!(classify("\"hello"), Category::Default);
        assert_eq!(classify("\"hello'"), Category::Default);
        assert_eq!(classify("\""), Category::Default);
    }

    #[test]
    fn test_number() {
        assert_eq!(classify("42"), Category::Number);
        assert_eq!(classify("0"), Category::Number);
        assert_eq!(classify("4e2"), Category::Default);
        assert_eq!(classify("٣"), Category::Default);
    }

    #[test]
    fn test_comment_token() {
        let classes = classify_line("x // a + b");
        assert_eq!(classes.last(), Some(&("// a + b", Category::Comment)));
    }

    #[test]
    fn test_decorator() {
        assert_eq!(classify("@Component"), Category::Decorator);
        assert_eq!(classify("@override"), Category::Decorator);
    }

    #[test]
    fn test_bracket_and_punctuation() {
        assert_eq!(classify("("), Category::Bracket);
        assert_eq!(classify("]"), Category::Bracket);
        assert_eq!(classify("."), Category::Punctuation);
        assert_eq!(classify(";"), Category::Punctuation);
    }

    #[test]
    fn test_default() {
        assert_eq!(classify("_private"), Category::Default);
        assert_eq!(classify("$el"), Category::Default);
        assert_eq!(classify("#"), Category::Default);
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = RuleSet::empty();
        let raw = RawToken { text: "const", offset: 0, is_comment: false };
        assert_eq!(rules.classify(&TokenContext::new(raw, "const")), Category::Default);
    }

    #[test]
    fn test_next_char() {
        let line = "f(x)";
        let tokens = split_line(line);
        assert_eq!(TokenContext::new(tokens[0], line).next_char(), Some('('));
        assert_eq!(TokenContext::new(tokens[3], line).next_char(), None);
    }

    proptest! {
        #[test]
        fn test_classification_is_total(token in "\\PC{1,20}") {
            let category = classify(&token);
            prop_assert!(Category::ALL.contains(&category));
        }
    }
}
