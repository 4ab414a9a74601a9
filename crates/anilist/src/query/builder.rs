//! Turns kinds, identifiers and pages into [`QueryRequest`]s.
//!
//! Builders are pure: they validate their inputs, render a document from a
//! [`registry`](super::registry) template, and bind the caller's values as
//! variables. Nothing here touches the network.

use serde_json::{Map, Value};

use super::registry::{self, PAGE_INFO, VIEWER_ROOT};
use super::{GraphqlType, Identifier, Pagination, QueryRequest, ResourceKind, SearchKind, VariableSpec};
use crate::error::{Error, Result};

const PAGE_ROOT: &str = "Page";

/// Build the query fetching a single entity.
///
/// [`Identifier::ById`] selects the `Int` id variant of the template and
/// [`Identifier::ByName`] the `String` name variant.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a non-positive id or a blank name.
///
/// # Example
///
/// ```
/// use anilist::query::{self, Identifier, ResourceKind};
///
/// let request = query::lookup(ResourceKind::AnimeList, &Identifier::ByName("Josh".into())).unwrap();
/// assert!(request.document().starts_with(
///     "query ($userName: String) { MediaListCollection (userName: $userName, type: ANIME)"
/// ));
/// ```
pub fn lookup(kind: ResourceKind, ident: &Identifier) -> Result<QueryRequest> {
    ident.validate()?;

    let template = registry::lookup_template(kind);
    let variable = template.variable_for(ident);

    let mut arguments = vec![format!("{name}: ${name}", name = variable.name)];
    arguments.extend(template.filter.map(str::to_string));

    let document = format!(
        "{} {{ {} ({}) {{ {} }} }}",
        header(&[variable]),
        template.root,
        arguments.join(", "),
        template.selection,
    );

    let mut variables = Map::new();
    variables.insert(variable.name.to_string(), ident.to_value());

    QueryRequest::new(document, variables, template.root)
}

/// Build a paged search.
///
/// The result is a `Page` carrying `pageInfo` and the matching connection.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a blank term or a zero page/amount.
///
/// # Example
///
/// ```
/// use anilist::query::{self, Pagination, SearchKind};
/// use serde_json::json;
///
/// let request = query::search(SearchKind::Anime, "Naruto", Pagination::new(Some(2), Some(10))).unwrap();
/// assert_eq!(request.root(), "Page");
/// assert_eq!(request.variables()["perPage"], json!(10));
/// assert!(request.document().contains("pageInfo { total currentPage lastPage hasNextPage perPage }"));
/// ```
pub fn search(kind: SearchKind, term: &str, pagination: Pagination) -> Result<QueryRequest> {
    if term.trim().is_empty() {
        return Err(Error::invalid("search term must not be empty"));
    }
    pagination.validate()?;

    let template = registry::search_template(kind);
    let specs = [
        VariableSpec::new("page", GraphqlType::Int),
        VariableSpec::new("perPage", GraphqlType::Int),
        VariableSpec::new("search", GraphqlType::String),
    ];

    let mut arguments: Vec<String> = template.filter.map(str::to_string).into_iter().collect();
    arguments.push("search: $search".to_string());

    let document = format!(
        "{} {{ {PAGE_ROOT} (page: $page, perPage: $perPage) {{ {PAGE_INFO} {} ({}) {{ {} }} }} }}",
        header(&specs),
        template.field,
        arguments.join(", "),
        template.selection,
    );

    let mut variables = Map::new();
    variables.insert("page".to_string(), Value::from(pagination.page));
    variables.insert("perPage".to_string(), Value::from(pagination.per_page));
    variables.insert("search".to_string(), Value::from(term));

    QueryRequest::new(document, variables, PAGE_ROOT)
}

/// Build the query for the user owning the client's token.
pub fn viewer() -> Result<QueryRequest> {
    let document = format!(
        "{} {{ {VIEWER_ROOT} {{ {} }} }}",
        header(&[]),
        registry::viewer_selection()
    );
    QueryRequest::new(document, Map::new(), VIEWER_ROOT)
}

/// `query ($a: Int, $b: String)`, or bare `query` with no variables.
fn header(specs: &[VariableSpec]) -> String {
    if specs.is_empty() {
        return "query".to_string();
    }
    let declarations: Vec<String> = specs
        .iter()
        .map(|spec| format!("${}: {}", spec.name, spec.ty))
        .collect();
    format!("query ({})", declarations.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_kind_by_id_binds_int() {
        for kind in ResourceKind::ALL {
            let request = lookup(kind, &Identifier::ById(42)).unwrap();
            let doc = request.document();
            assert!(doc.contains(": Int)"), "{kind}: {doc}");
            assert!(!doc.contains("String"), "{kind}: {doc}");
            assert_eq!(request.variables().len(), 1);
            let (_, value) = request.variables().iter().next().unwrap();
            assert_eq!(value, &json!(42));
        }
    }

    #[test]
    fn test_every_kind_by_name_binds_string() {
        for kind in ResourceKind::ALL {
            let request = lookup(kind, &"some-name".into()).unwrap();
            let doc = request.document();
            assert!(doc.contains(": String)"), "{kind}: {doc}");
            assert!(!doc.contains(": Int"), "{kind}: {doc}");
            let (_, value) = request.variables().iter().next().unwrap();
            assert_eq!(value, &json!("some-name"));
        }
    }

    #[test]
    fn test_anime_by_id_document() {
        let request = lookup(ResourceKind::Anime, &Identifier::ById(5)).unwrap();
        assert!(
            request
                .document()
                .starts_with("query ($id: Int) { Media (id: $id, type: ANIME) { id idMal ")
        );
        assert!(request.document().ends_with("} } } } } }"));
        assert_eq!(request.variables(), &json!({ "id": 5 }).as_object().cloned().unwrap());
        assert_eq!(request.root(), "Media");
    }

    #[test]
    fn test_user_by_name_uses_name_variable() {
        let request = lookup(ResourceKind::User, &"Josh".into()).unwrap();
        assert!(
            request
                .document()
                .starts_with("query ($name: String) { User (name: $name) {")
        );
        assert_eq!(request.variables()["name"], json!("Josh"));
    }

    #[test]
    fn test_manga_list_by_id() {
        let request = lookup(ResourceKind::MangaList, &Identifier::ById(7)).unwrap();
        assert!(request.document().starts_with(
            "query ($userId: Int) { MediaListCollection (userId: $userId, type: MANGA) {"
        ));
        assert_eq!(request.root(), "MediaListCollection");
    }

    #[test]
    fn test_lookup_rejects_bad_identifiers() {
        assert!(matches!(
            lookup(ResourceKind::Anime, &Identifier::ById(0)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            lookup(ResourceKind::Staff, &"".into()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_name_is_never_interpolated() {
        let request = lookup(ResourceKind::Character, &"\" } } { evil".into()).unwrap();
        assert!(!request.document().contains("evil"));
        assert_eq!(request.variables()["search"], json!("\" } } { evil"));
    }

    #[test]
    fn test_search_variables_and_envelope() {
        let request = search(
            SearchKind::Anime,
            "Naruto",
            Pagination::new(Some(2), Some(10)),
        )
        .unwrap();
        assert_eq!(
            request.variables(),
            json!({ "search": "Naruto", "page": 2, "perPage": 10 }).as_object().unwrap()
        );
        assert_eq!(
            request.document(),
            concat!(
                "query ($page: Int, $perPage: Int, $search: String) { ",
                "Page (page: $page, perPage: $perPage) { ",
                "pageInfo { total currentPage lastPage hasNextPage perPage } ",
                "media (type: ANIME, search: $search) { ",
                "id title { romaji english native userPreferred } coverImage { large medium } status ",
                "startDate { year month day } endDate { year month day } type format } } }",
            )
        );
    }

    #[test]
    fn test_search_defaults() {
        let request = search(SearchKind::Studio, "Bones", Pagination::default()).unwrap();
        assert_eq!(request.variables()["page"], json!(1));
        assert_eq!(request.variables()["perPage"], json!(5));
        assert!(request.document().contains("studios (search: $search) { id name }"));
    }

    #[test]
    fn test_search_every_kind_builds() {
        for kind in SearchKind::ALL {
            let request = search(kind, "x", Pagination::default()).unwrap();
            assert!(request.document().contains(PAGE_INFO));
            assert_eq!(request.root(), "Page");
        }
    }

    #[test]
    fn test_search_rejects_bad_input() {
        assert!(search(SearchKind::Anime, "  ", Pagination::default()).is_err());
        assert!(search(SearchKind::Anime, "x", Pagination::new(Some(0), None)).is_err());
        assert!(search(SearchKind::Anime, "x", Pagination::new(None, Some(0))).is_err());
    }

    #[test]
    fn test_viewer_has_no_variables() {
        let request = viewer().unwrap();
        assert!(request.document().starts_with("query { Viewer { id name "));
        assert!(request.variables().is_empty());
        assert_eq!(request.root(), "Viewer");
    }
}
