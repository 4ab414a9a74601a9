//! Query construction for the AniList GraphQL API.
//!
//! Documents are never assembled from caller text. Each [`ResourceKind`] and
//! [`SearchKind`] maps to a fixed template in the [`registry`], and every
//! caller-supplied value travels in the variables map. The [`builder`]
//! functions pick the template variant from an [`Identifier`] and produce a
//! [`QueryRequest`] whose declared variables, placeholders and bindings are
//! checked against each other before anything is sent.
//!
//! # Example
//!
//! ```
//! use anilist::query::{self, Identifier, ResourceKind};
//!
//! let request = query::lookup(ResourceKind::Anime, &Identifier::ById(21)).unwrap();
//! assert!(request.document().starts_with("query ($id: Int) { Media (id: $id, type: ANIME)"));
//! assert_eq!(request.variables()["id"], 21);
//! assert_eq!(request.root(), "Media");
//!
//! let request = query::lookup(ResourceKind::Studio, &"Madhouse".into()).unwrap();
//! assert!(request.document().starts_with("query ($search: String)"));
//! assert_eq!(request.variables()["search"], "Madhouse");
//! ```

pub mod builder;
pub mod registry;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub use builder::{lookup, search, viewer};

/// Page used when a search does not name one.
pub const DEFAULT_PAGE: u32 = 1;

/// Results per page used when a search does not name an amount.
///
/// AniList caps the page size at 25 on its side.
pub const DEFAULT_PER_PAGE: u32 = 5;

/// The catalog entities that can be fetched by id or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// An anime entry (`Media` with `type: ANIME`).
    Anime,
    /// A manga entry (`Media` with `type: MANGA`).
    Manga,
    /// A character.
    Character,
    /// A staff member.
    Staff,
    /// An animation studio.
    Studio,
    /// A user profile.
    User,
    /// A user's anime and manga statistics.
    UserStats,
    /// A user's anime list.
    AnimeList,
    /// A user's manga list.
    MangaList,
}

impl ResourceKind {
    /// Every recognized kind.
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Anime,
        ResourceKind::Manga,
        ResourceKind::Character,
        ResourceKind::Staff,
        ResourceKind::Studio,
        ResourceKind::User,
        ResourceKind::UserStats,
        ResourceKind::AnimeList,
        ResourceKind::MangaList,
    ];

    /// The name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Anime => "anime",
            ResourceKind::Manga => "manga",
            ResourceKind::Character => "character",
            ResourceKind::Staff => "staff",
            ResourceKind::Studio => "studio",
            ResourceKind::User => "user",
            ResourceKind::UserStats => "user-stats",
            ResourceKind::AnimeList => "anime-list",
            ResourceKind::MangaList => "manga-list",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::invalid(format!("unknown resource kind '{s}'")))
    }
}

/// The entity types the search entry point can page through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Anime titles.
    Anime,
    /// Manga titles.
    Manga,
    /// Characters.
    Character,
    /// Staff members.
    Staff,
    /// Studios.
    Studio,
}

impl SearchKind {
    /// Every recognized kind.
    pub const ALL: [SearchKind; 5] = [
        SearchKind::Anime,
        SearchKind::Manga,
        SearchKind::Character,
        SearchKind::Staff,
        SearchKind::Studio,
    ];

    /// The name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::Anime => "anime",
            SearchKind::Manga => "manga",
            SearchKind::Character => "character",
            SearchKind::Staff => "staff",
            SearchKind::Studio => "studio",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = Error;

    /// Case-insensitive; `char` is accepted for `character`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anime" => Ok(SearchKind::Anime),
            "manga" => Ok(SearchKind::Manga),
            "character" | "char" => Ok(SearchKind::Character),
            "staff" => Ok(SearchKind::Staff),
            "studio" => Ok(SearchKind::Studio),
            _ => Err(Error::invalid(format!("unsupported search type '{s}'"))),
        }
    }
}

/// How an entity is looked up.
///
/// A numeric id always binds an `Int` variable and selects the id-based
/// template; a name always binds a `String` variable and selects the
/// name-based one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Look up by AniList id.
    ById(i32),
    /// Look up by name or search text.
    ByName(String),
}

impl Identifier {
    /// Classify free text: all ASCII digits is an id, anything else a name.
    ///
    /// ```
    /// use anilist::query::Identifier;
    ///
    /// assert_eq!(Identifier::parse("21"), Identifier::ById(21));
    /// assert_eq!(Identifier::parse("One Piece"), Identifier::ByName("One Piece".into()));
    /// ```
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse() {
                return Identifier::ById(id);
            }
        }
        Identifier::ByName(text.to_string())
    }

    /// The GraphQL type this identifier binds to.
    pub fn graphql_type(&self) -> GraphqlType {
        match self {
            Identifier::ById(_) => GraphqlType::Int,
            Identifier::ByName(_) => GraphqlType::String,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Identifier::ById(id) if *id <= 0 => {
                Err(Error::invalid(format!("id must be positive, got {id}")))
            }
            Identifier::ByName(name) if name.trim().is_empty() => {
                Err(Error::invalid("name must not be empty"))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            Identifier::ById(id) => Value::from(*id),
            Identifier::ByName(name) => Value::from(name.as_str()),
        }
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::ById(id)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::ByName(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::ByName(name)
    }
}

/// Page selection for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u32,
    /// Results per page.
    pub per_page: u32,
}

impl Pagination {
    /// Fill in [`DEFAULT_PAGE`] and [`DEFAULT_PER_PAGE`] where omitted.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::invalid("page must be at least 1"));
        }
        if self.per_page == 0 {
            return Err(Error::invalid("amount must be at least 1"));
        }
        Ok(())
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// The built-in GraphQL scalars.
///
/// Templates only declare `Int` and `String`; the rest are recognized so
/// values bound to hand-written documents can be checked as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphqlType {
    /// `Int`, a signed 32-bit integer.
    Int,
    /// `Float`
    Float,
    /// `Boolean`
    Boolean,
    /// `String`
    String,
    /// `ID`, sent as a string or an integer.
    Id,
}

impl GraphqlType {
    /// The type name as written in a document.
    pub fn as_str(self) -> &'static str {
        match self {
            GraphqlType::Int => "Int",
            GraphqlType::Float => "Float",
            GraphqlType::Boolean => "Boolean",
            GraphqlType::String => "String",
            GraphqlType::Id => "ID",
        }
    }

    /// Look up a built-in scalar by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(GraphqlType::Int),
            "Float" => Some(GraphqlType::Float),
            "Boolean" => Some(GraphqlType::Boolean),
            "String" => Some(GraphqlType::String),
            "ID" => Some(GraphqlType::Id),
            _ => None,
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            GraphqlType::Int => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
            GraphqlType::Float => value.is_number(),
            GraphqlType::Boolean => value.is_boolean(),
            GraphqlType::String => value.is_string(),
            GraphqlType::Id => value.is_string() || value.is_i64() || value.is_u64(),
        }
    }
}

impl fmt::Display for GraphqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphqlType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_end_matches('!');
        Self::from_name(name)
            .ok_or_else(|| Error::invalid(format!("'{name}' is not a built-in scalar")))
    }
}

/// A declared variable type: a named type, a list, or either made non-null.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeRef<'a> {
    Named(&'a str),
    List(Box<TypeRef<'a>>),
    NonNull(Box<TypeRef<'a>>),
}

impl<'a> TypeRef<'a> {
    fn parse(text: &'a str) -> Result<Self> {
        let text = text.trim();
        let malformed = || Error::invalid(format!("malformed variable type '{text}'"));

        if let Some(inner) = text.strip_suffix('!') {
            let inner = TypeRef::parse(inner)?;
            if matches!(inner, TypeRef::NonNull(_)) {
                return Err(malformed());
            }
            return Ok(TypeRef::NonNull(Box::new(inner)));
        }
        if let Some(inner) = text.strip_prefix('[') {
            let inner = inner.strip_suffix(']').ok_or_else(malformed)?;
            return Ok(TypeRef::List(Box::new(TypeRef::parse(inner)?)));
        }
        if is_name(text) {
            Ok(TypeRef::Named(text))
        } else {
            Err(malformed())
        }
    }

    /// Whether `value` can be sent for a variable of this type.
    ///
    /// Only built-in scalars are checked; enums and input objects are left to
    /// the server.
    fn accepts(&self, value: &Value) -> bool {
        match self {
            TypeRef::NonNull(inner) => !value.is_null() && inner.accepts(value),
            _ if value.is_null() => true,
            // A single item is coerced to a one-element list.
            TypeRef::List(inner) => match value {
                Value::Array(items) => items.iter().all(|item| inner.accepts(item)),
                other => inner.accepts(other),
            },
            TypeRef::Named(name) => GraphqlType::from_name(name).is_none_or(|ty| ty.accepts(value)),
        }
    }
}

fn is_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A declared variable: `$name: Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableSpec {
    /// Name without the `$`.
    pub name: &'static str,
    /// Declared type.
    pub ty: GraphqlType,
}

impl VariableSpec {
    /// Shorthand constructor.
    pub const fn new(name: &'static str, ty: GraphqlType) -> Self {
        Self { name, ty }
    }
}

/// A GraphQL document plus its variable bindings.
///
/// Immutable once built. Construction checks that the variables declared in
/// the document header, the `$placeholders` used in its body, and the keys of
/// the variables map are the same set, and that every bound value fits its
/// declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    document: String,
    variables: Map<String, Value>,
    root: String,
}

impl QueryRequest {
    /// Build a request from a hand-written document.
    ///
    /// `root` is the field of `data` the caller wants back, e.g. `Media`.
    ///
    /// ```
    /// use anilist::query::QueryRequest;
    /// use serde_json::{json, Map};
    ///
    /// let mut vars = Map::new();
    /// vars.insert("id".into(), json!(1));
    /// let request = QueryRequest::new("query ($id: Int) { Media (id: $id) { id } }", vars, "Media");
    /// assert!(request.is_ok());
    ///
    /// // Declared but never bound.
    /// let request = QueryRequest::new("query ($id: Int) { Media (id: $id) { id } }", Map::new(), "Media");
    /// assert!(request.is_err());
    /// ```
    pub fn new(
        document: impl Into<String>,
        variables: Map<String, Value>,
        root: impl Into<String>,
    ) -> Result<Self> {
        let document = document.into();
        let root = root.into();
        if root.trim().is_empty() {
            return Err(Error::invalid("root key must not be empty"));
        }
        check_bindings(&document, &variables)?;
        Ok(Self {
            document,
            variables,
            root,
        })
    }

    /// The document text.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// The variable bindings.
    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// The `data` field the response is unwrapped to.
    pub fn root(&self) -> &str {
        &self.root
    }
}

/// A `$name: Type [= default]` entry from the operation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Declaration<'a> {
    ty: &'a str,
    has_default: bool,
}

/// Byte offset just past the string literal opening at `start`.
fn skip_string(bytes: &[u8], start: usize) -> Result<usize> {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut i = start + 3;
        while i < bytes.len() {
            if bytes[i..].starts_with(b"\\\"\"\"") {
                i += 4;
            } else if bytes[i..].starts_with(b"\"\"\"") {
                return Ok(i + 3);
            } else {
                i += 1;
            }
        }
    } else {
        let mut i = start + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'"' => return Ok(i + 1),
                b'\n' => break,
                _ => i += 1,
            }
        }
    }
    Err(Error::invalid("unterminated string literal in document"))
}

/// Byte offset of the end of a declaration starting at `start`: the next
/// top-level `,`, `)` or `$`.
fn declaration_end(bytes: &[u8], start: usize) -> Result<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i)?;
                continue;
            }
            b'[' | b'{' => depth += 1,
            b']' | b'}' => depth = depth.saturating_sub(1),
            b',' | b')' | b'$' if depth == 0 => return Ok(i),
            _ => {}
        }
        i += 1;
    }
    Ok(bytes.len())
}

/// Scan a document for `$name: Type` declarations and `$name` uses.
///
/// String literals and `#` comments are skipped.
fn scan_placeholders(document: &str) -> Result<(BTreeMap<&str, Declaration<'_>>, Vec<&str>)> {
    let mut declared = BTreeMap::new();
    let mut used = Vec::new();
    let bytes = document.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = skip_string(bytes, i)?;
                continue;
            }
            b'#' => {
                i = document[i..].find('\n').map_or(bytes.len(), |n| i + n);
                continue;
            }
            b'$' => {}
            _ => {
                i += 1;
                continue;
            }
        }

        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
            end += 1;
        }
        if end == start {
            return Err(Error::invalid("empty variable name in document"));
        }
        let name = &document[start..end];

        let after = document[end..].trim_start();
        if after.starts_with(':') {
            let decl_start = document.len() - after.len() + 1;
            let decl_end = declaration_end(bytes, decl_start)?;
            let decl = &document[decl_start..decl_end];
            let (ty, has_default) = match decl.split_once('=') {
                Some((ty, _)) => (ty.trim(), true),
                None => (decl.trim(), false),
            };
            if declared.insert(name, Declaration { ty, has_default }).is_some() {
                return Err(Error::invalid(format!("variable ${name} declared twice")));
            }
            i = decl_end;
        } else {
            used.push(name);
            i = end;
        }
    }

    Ok((declared, used))
}

fn check_bindings(document: &str, variables: &Map<String, Value>) -> Result<()> {
    let (declared, used) = scan_placeholders(document)?;

    for name in &used {
        if !declared.contains_key(name) {
            return Err(Error::invalid(format!("placeholder ${name} is not declared")));
        }
    }
    for (name, decl) in &declared {
        if !used.contains(name) {
            return Err(Error::invalid(format!("variable ${name} is declared but unused")));
        }
        let ty = TypeRef::parse(decl.ty)?;
        match variables.get(*name) {
            Some(value) if ty.accepts(value) => {}
            Some(value) => {
                return Err(Error::invalid(format!(
                    "variable ${name} expects {}, got {value}",
                    decl.ty
                )));
            }
            None if decl.has_default => {}
            None => return Err(Error::invalid(format!("variable ${name} is not bound"))),
        }
    }
    if let Some(extra) = variables.keys().find(|k| !declared.contains_key(k.as_str())) {
        return Err(Error::invalid(format!(
            "binding '{extra}' has no matching variable in the document"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!("anime".parse::<ResourceKind>().unwrap(), ResourceKind::Anime);
        assert_eq!("Studio".parse::<ResourceKind>().unwrap(), ResourceKind::Studio);
        assert_eq!(
            "anime_list".parse::<ResourceKind>().unwrap(),
            ResourceKind::AnimeList
        );
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_resource_kind_unknown() {
        let err = "bogus".parse::<ResourceKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref m) if m.contains("bogus")));
    }

    #[test]
    fn test_search_kind_parse() {
        assert_eq!("ANIME".parse::<SearchKind>().unwrap(), SearchKind::Anime);
        assert_eq!("char".parse::<SearchKind>().unwrap(), SearchKind::Character);
        assert_eq!(
            "character".parse::<SearchKind>().unwrap(),
            SearchKind::Character
        );
        assert!(matches!(
            "user".parse::<SearchKind>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_identifier_parse() {
        assert_eq!(Identifier::parse("5"), Identifier::ById(5));
        assert_eq!(Identifier::parse(" 42 "), Identifier::ById(42));
        assert_eq!(
            Identifier::parse("Naruto"),
            Identifier::ByName("Naruto".into())
        );
        assert_eq!(Identifier::parse("-5"), Identifier::ByName("-5".into()));
        assert_eq!(Identifier::parse("86"), Identifier::ById(86));
        assert_eq!(
            Identifier::parse("99999999999"),
            Identifier::ByName("99999999999".into())
        );
    }

    #[test]
    fn test_identifier_validation() {
        assert!(Identifier::ById(1).validate().is_ok());
        assert!(Identifier::ById(0).validate().is_err());
        assert!(Identifier::ById(-3).validate().is_err());
        assert!(Identifier::from("x").validate().is_ok());
        assert!(Identifier::from("").validate().is_err());
        assert!(Identifier::from("  ").validate().is_err());
    }

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 5);

        let p = Pagination::new(Some(3), None);
        assert_eq!(p, Pagination { page: 3, per_page: 5 });

        assert!(Pagination::new(Some(0), None).validate().is_err());
        assert!(Pagination::new(None, Some(0)).validate().is_err());
        // Oversized pages are left for the server to clamp.
        assert!(Pagination::new(None, Some(100)).validate().is_ok());
    }

    #[test]
    fn test_query_request_accepts_matching_bindings() {
        let request = QueryRequest::new(
            "query ($page: Int, $search: String) { Page (page: $page) { media (search: $search) { id } } }",
            vars(&[("page", json!(1)), ("search", json!("Bebop"))]),
            "Page",
        )
        .unwrap();
        assert_eq!(request.root(), "Page");
        assert_eq!(request.variables().len(), 2);
    }

    #[test]
    fn test_query_request_without_variables() {
        assert!(QueryRequest::new("query { Viewer { id } }", Map::new(), "Viewer").is_ok());
    }

    #[test]
    fn test_query_request_rejects_missing_binding() {
        let err = QueryRequest::new(
            "query ($id: Int) { Media (id: $id) { id } }",
            Map::new(),
            "Media",
        )
        .unwrap_err();
        assert!(err.to_string().contains("not bound"));
    }

    #[test]
    fn test_query_request_rejects_extra_binding() {
        let err = QueryRequest::new(
            "query ($id: Int) { Media (id: $id) { id } }",
            vars(&[("id", json!(1)), ("page", json!(2))]),
            "Media",
        )
        .unwrap_err();
        assert!(err.to_string().contains("page"));
    }

    #[test]
    fn test_query_request_rejects_undeclared_placeholder() {
        let err = QueryRequest::new(
            "query ($id: Int) { Media (id: $id, search: $search) { id } }",
            vars(&[("id", json!(1))]),
            "Media",
        )
        .unwrap_err();
        assert!(err.to_string().contains("$search"));
    }

    #[test]
    fn test_query_request_rejects_unused_declaration() {
        let err = QueryRequest::new(
            "query ($id: Int, $page: Int) { Media (id: $id) { id } }",
            vars(&[("id", json!(1)), ("page", json!(1))]),
            "Media",
        )
        .unwrap_err();
        assert!(err.to_string().contains("unused"));
    }

    #[test]
    fn test_query_request_rejects_type_mismatch() {
        let err = QueryRequest::new(
            "query ($id: Int) { Media (id: $id) { id } }",
            vars(&[("id", json!("21"))]),
            "Media",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let err = QueryRequest::new(
            "query ($search: String) { Media (search: $search) { id } }",
            vars(&[("search", json!(21))]),
            "Media",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_query_request_rejects_empty_root() {
        assert!(QueryRequest::new("query { Viewer { id } }", Map::new(), " ").is_err());
    }

    #[test]
    fn test_non_null_declaration_is_accepted() {
        assert!(
            QueryRequest::new(
                "query ($id: Int!) { Media (id: $id) { id } }",
                vars(&[("id", json!(1))]),
                "Media",
            )
            .is_ok()
        );
    }

    #[test]
    fn test_builtin_scalar_declarations() {
        let request = QueryRequest::new(
            "query ($adult: Boolean, $score: Float, $id: ID!) { \
             Page { media (isAdult: $adult, averageScore_greater: $score, id: $id) { id } } }",
            vars(&[
                ("adult", json!(false)),
                ("score", json!(7.5)),
                ("id", json!("21")),
            ]),
            "Page",
        );
        assert!(request.is_ok());

        let err = QueryRequest::new(
            "query ($adult: Boolean) { Page { media (isAdult: $adult) { id } } }",
            vars(&[("adult", json!("no"))]),
            "Page",
        )
        .unwrap_err();
        assert!(err.to_string().contains("Boolean"));
    }

    #[test]
    fn test_named_types_are_left_to_the_server() {
        assert!(
            QueryRequest::new(
                "query ($type: MediaType, $sort: [MediaSort]) { \
                 Page { media (type: $type, sort: $sort) { id } } }",
                vars(&[
                    ("type", json!("ANIME")),
                    ("sort", json!(["POPULARITY_DESC", "SCORE_DESC"])),
                ]),
                "Page",
            )
            .is_ok()
        );
    }

    #[test]
    fn test_list_declarations() {
        let doc = "query ($ids: [Int!]!) { Page { media (id_in: $ids) { id } } }";
        assert!(QueryRequest::new(doc, vars(&[("ids", json!([1, 20]))]), "Page").is_ok());
        assert!(QueryRequest::new(doc, vars(&[("ids", json!(1))]), "Page").is_ok());
        assert!(QueryRequest::new(doc, vars(&[("ids", json!([1, null]))]), "Page").is_err());
        assert!(QueryRequest::new(doc, vars(&[("ids", json!(["1"]))]), "Page").is_err());
        assert!(QueryRequest::new(doc, vars(&[("ids", Value::Null)]), "Page").is_err());
    }

    #[test]
    fn test_nullable_declaration_accepts_null() {
        assert!(
            QueryRequest::new(
                "query ($search: String) { Media (search: $search) { id } }",
                vars(&[("search", Value::Null)]),
                "Media",
            )
            .is_ok()
        );
    }

    #[test]
    fn test_default_values() {
        let doc = "query ($page: Int = 1, $sort: [MediaSort] = [POPULARITY_DESC, SCORE_DESC]) { \
                   Page (page: $page) { media (sort: $sort) { id } } }";
        let request = QueryRequest::new(doc, Map::new(), "Page").unwrap();
        assert!(request.variables().is_empty());

        let err = QueryRequest::new(doc, vars(&[("page", json!("two"))]), "Page").unwrap_err();
        assert!(err.to_string().contains("$page"));
    }

    #[test]
    fn test_declarations_without_commas() {
        assert!(
            QueryRequest::new(
                "query ($id: Int $type: MediaType) { Media (id: $id, type: $type) { id } }",
                vars(&[("id", json!(1)), ("type", json!("MANGA"))]),
                "Media",
            )
            .is_ok()
        );
    }

    #[test]
    fn test_string_literals_and_comments_are_skipped() {
        assert!(
            QueryRequest::new(
                "query { Page { media (search: \"$100\") { id } } }",
                Map::new(),
                "Page",
            )
            .is_ok()
        );
        assert!(
            QueryRequest::new(
                "query { Page { media (search: \"say \\\"$hi\\\"\") { id } } }",
                Map::new(),
                "Page",
            )
            .is_ok()
        );
        assert!(
            QueryRequest::new(
                "query ($id: Int) {\n  # fetch $nothing here\n  Media (id: $id) { description(asHtml: false) }\n}",
                vars(&[("id", json!(1))]),
                "Media",
            )
            .is_ok()
        );
        assert!(
            QueryRequest::new(
                "query { Page { media (search: \"\"\"$block \"quoted\" text\"\"\") { id } } }",
                Map::new(),
                "Page",
            )
            .is_ok()
        );
    }

    #[test]
    fn test_unterminated_string_is_rejected() {
        assert!(matches!(
            QueryRequest::new("query { Media (search: \"open) { id } }", Map::new(), "Media"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_declared_type() {
        for ty in ["[Int", "Int!!", "", "1Int"] {
            let doc = format!("query ($id: {ty}) {{ Media (id: $id) {{ id }} }}");
            let err = QueryRequest::new(doc, vars(&[("id", json!(1))]), "Media").unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "type {ty:?}");
        }
    }

    #[test]
    fn test_graphql_type_from_str() {
        assert_eq!("Int!".parse::<GraphqlType>().unwrap(), GraphqlType::Int);
        assert_eq!("ID".parse::<GraphqlType>().unwrap(), GraphqlType::Id);
        assert!("MediaType".parse::<GraphqlType>().is_err());
    }
}
