//! Token categories for the timeline
//!
//! This module defines the closed set of semantic categories a
//! segment can be assigned, and their names for config and legend.

/// Semantic category of a classified segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Reserved words (class, const, return, ...)
    Keyword,
    /// Capitalised identifiers (Foo, HttpClient)
    Class,
    /// Lowercase identifiers used as a call (foo in foo(x))
    Function,
    /// Lowercase identifiers
    Variable,
    /// Tokens containing operator characters (=, +=, =>)
    Operator,
    /// Quoted string literals
    String,
    /// Decimal integer literals
    Number,
    /// true / false
    Boolean,
    /// Line comments (// ...)
    Comment,
    /// Import statements
    Import,
    /// Decorators and annotations (@Component)
    Decorator,
    /// . , ;
    Punctuation,
    /// { } ( ) [ ]
    Bracket,
    /// Object properties
    Property,
    /// Whitespace runs
    Space,
    /// Anything else
    Default,
}

impl Category {
    /// Every category, in legend order
    pub const ALL: [Category; 16] = [
        Category::Keyword,
        Category::Class,
        Category::Function,
        Category::Variable,
        Category::Operator,
        Category::String,
        Category::Number,
        Category::Boolean,
        Category::Comment,
        Category::Import,
        Category::Decorator,
        Category::Punctuation,
        Category::Bracket,
        Category::Property,
        Category::Space,
        Category::Default,
    ];

    /// Config key for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Class => "class",
            Category::Function => "function",
            Category::Variable => "variable",
            Category::Operator => "operator",
            Category::String => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::Comment => "comment",
            Category::Import => "import",
            Category::Decorator => "decorator",
            Category::Punctuation => "punctuation",
            Category::Bracket => "bracket",
            Category::Property => "property",
            Category::Space => "space",
            Category::Default => "default",
        }
    }

    /// Parse a category from its config key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Capitalised name for display ("Keyword", "Punctuation")
    pub fn label(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether this category gets a legend entry
    ///
    /// Space and default carry no meaning worth a swatch.
    pub fn in_legend(&self) -> bool {
        !matches!(self, Category::Space | Category::Default)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
