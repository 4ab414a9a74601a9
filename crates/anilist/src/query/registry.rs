//! Fixed query templates, one per resource and search kind.

use super::{GraphqlType, Identifier, ResourceKind, SearchKind, VariableSpec};

/// The envelope fields selected on every `Page`.
pub const PAGE_INFO: &str = "pageInfo { total currentPage lastPage hasNextPage perPage }";

/// Root field of the authenticated-user query.
pub const VIEWER_ROOT: &str = "Viewer";

/// Template for fetching one entity by id or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTemplate {
    /// Root field queried and unwrapped from `data`.
    pub root: &'static str,
    /// Static arguments appended after the lookup argument.
    pub filter: Option<&'static str>,
    /// Argument/variable name for id lookups (`Int`).
    pub id_variable: &'static str,
    /// Argument/variable name for name lookups (`String`).
    pub name_variable: &'static str,
    /// Field selection inside the root.
    pub selection: &'static str,
}

impl LookupTemplate {
    /// The variable the identifier binds to.
    pub fn variable_for(&self, ident: &Identifier) -> VariableSpec {
        match ident {
            Identifier::ById(_) => VariableSpec::new(self.id_variable, GraphqlType::Int),
            Identifier::ByName(_) => VariableSpec::new(self.name_variable, GraphqlType::String),
        }
    }
}

/// Template for one connection inside a search `Page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTemplate {
    /// Connection field on `Page`, e.g. `media`.
    pub field: &'static str,
    /// Static arguments placed before `search: $search`.
    pub filter: Option<&'static str>,
    /// Field selection on each result.
    pub selection: &'static str,
}

const ANIME_SELECTION: &str = concat!(
    "id idMal title { romaji english native userPreferred } ",
    "format status episodes description startDate { year month day } endDate { year month day } ",
    "season seasonYear duration countryOfOrigin isLicensed source hashtag trailer { id site } ",
    "updatedAt coverImage { large medium } bannerImage genres synonyms averageScore meanScore favourites ",
    "popularity trending tags { name isMediaSpoiler } ",
    "relations { nodes { id idMal title { english native romaji userPreferred } type format } } ",
    "characters { edges { id node { id name { english: full } image { large } } role voiceActors { name { japanese: full } } } } ",
    "staff { edges { id node { id name { english: full } image { large } } role } } ",
    "studios { nodes { id name isAnimationStudio } } ",
    "isFavourite isAdult nextAiringEpisode { timeUntilAiring airingAt episode } ",
    "airingSchedule { nodes { airingAt timeUntilAiring episode } } ",
    "trends { nodes { date trending popularity inProgress } } externalLinks { url } ",
    "streamingEpisodes { title thumbnail url site } rankings { rank type context year season } ",
    "mediaListEntry { id status } reviews { nodes { id score summary body } } ",
    "siteUrl autoCreateForumThread modNotes ",
    "stats { scoreDistribution { score amount } statusDistribution { status amount } } ",
    "isRecommendationBlocked recommendations { nodes { mediaRecommendation { id title { romaji english native userPreferred } } } }",
);

const MANGA_SELECTION: &str = concat!(
    "id idMal title { romaji english native userPreferred } ",
    "description format status startDate { year month day } endDate { year month day } ",
    "chapters volumes countryOfOrigin isLicensed updatedAt ",
    "coverImage { large medium } bannerImage genres synonyms averageScore meanScore ",
    "siteUrl autoCreateForumThread modNotes popularity trending tags { name isMediaSpoiler } ",
    "relations { nodes { id idMal title { english native romaji userPreferred } type format } } ",
    "characters { edges { id node { id name { english: full } image { large } } role } } ",
    "staff { edges { id node { id name { english: full } image { large } } role } } ",
    "isFavourite isAdult trends { nodes { date trending popularity inProgress } } externalLinks { url } ",
    "rankings { rank type context year season } mediaListEntry { id status } ",
    "reviews { nodes { id score summary body } } ",
    "stats { scoreDistribution { score amount } statusDistribution { status amount } } favourites ",
    "isRecommendationBlocked recommendations { nodes { mediaRecommendation { id title { romaji english native userPreferred } } } }",
);

const CHARACTER_SELECTION: &str = concat!(
    "id name { english: full native alternative } image { large medium } ",
    "description gender dateOfBirth { year month day } age bloodType ",
    "isFavourite isFavouriteBlocked siteUrl favourites modNotes ",
    "media { nodes { id idMal title { romaji english native userPreferred } type format } }",
);

const STAFF_SELECTION: &str = concat!(
    "id name { english: full native alternative } languageV2 image { large medium } ",
    "description primaryOccupations gender dateOfBirth { year month day } dateOfDeath { year month day } ",
    "age yearsActive homeTown bloodType isFavourite isFavouriteBlocked siteUrl favourites modNotes ",
    "staffMedia { nodes { id title { romaji english native userPreferred } type format } } ",
    "characters { nodes { id name { english: full } } }",
);

const STUDIO_SELECTION: &str = concat!(
    "id name isAnimationStudio siteUrl isFavourite favourites ",
    "media { nodes { id title { romaji english native userPreferred } } }",
);

const USER_SELECTION: &str = concat!(
    "id name about avatar { large medium } bannerImage isFollowing isFollower isBlocked ",
    "options { titleLanguage displayAdultContent airingNotifications profileColor } ",
    "mediaListOptions { scoreFormat rowOrder } ",
    "favourites { anime { nodes { id title { romaji english native userPreferred } } } ",
    "manga { nodes { id title { romaji english native userPreferred } } } ",
    "characters { nodes { id name { english: full } } } ",
    "staff { nodes { id name { english: full } } } studios { nodes { id name } } } ",
    "statistics { anime { count meanScore minutesWatched episodesWatched } ",
    "manga { count meanScore chaptersRead volumesRead } } ",
    "unreadNotificationCount siteUrl donatorTier donatorBadge moderatorRoles createdAt updatedAt",
);

const USER_STATS_SELECTION: &str = concat!(
    "id name statistics { ",
    "anime { count meanScore standardDeviation minutesWatched episodesWatched ",
    "genres { genre count meanScore minutesWatched } formats { format count } statuses { status count } } ",
    "manga { count meanScore standardDeviation chaptersRead volumesRead ",
    "genres { genre count meanScore chaptersRead } formats { format count } statuses { status count } } }",
);

const LIST_SELECTION: &str = concat!(
    "user { id name } lists { name isCustomList isSplitCompletedList status ",
    "entries { id mediaId status score progress progressVolumes repeat priority private notes ",
    "hiddenFromStatusLists startedAt { year month day } completedAt { year month day } updatedAt createdAt ",
    "media { id idMal title { romaji english native userPreferred } } } }",
);

const MEDIA_RESULT_SELECTION: &str = concat!(
    "id title { romaji english native userPreferred } coverImage { large medium } status ",
    "startDate { year month day } endDate { year month day } type format",
);

const ANIME: LookupTemplate = LookupTemplate {
    root: "Media",
    filter: Some("type: ANIME"),
    id_variable: "id",
    name_variable: "search",
    selection: ANIME_SELECTION,
};

const MANGA: LookupTemplate = LookupTemplate {
    root: "Media",
    filter: Some("type: MANGA"),
    id_variable: "id",
    name_variable: "search",
    selection: MANGA_SELECTION,
};

const CHARACTER: LookupTemplate = LookupTemplate {
    root: "Character",
    filter: None,
    id_variable: "id",
    name_variable: "search",
    selection: CHARACTER_SELECTION,
};

const STAFF: LookupTemplate = LookupTemplate {
    root: "Staff",
    filter: None,
    id_variable: "id",
    name_variable: "search",
    selection: STAFF_SELECTION,
};

const STUDIO: LookupTemplate = LookupTemplate {
    root: "Studio",
    filter: None,
    id_variable: "id",
    name_variable: "search",
    selection: STUDIO_SELECTION,
};

const USER: LookupTemplate = LookupTemplate {
    root: "User",
    filter: None,
    id_variable: "id",
    name_variable: "name",
    selection: USER_SELECTION,
};

const USER_STATS: LookupTemplate = LookupTemplate {
    root: "User",
    filter: None,
    id_variable: "id",
    name_variable: "name",
    selection: USER_STATS_SELECTION,
};

const ANIME_LIST: LookupTemplate = LookupTemplate {
    root: "MediaListCollection",
    filter: Some("type: ANIME"),
    id_variable: "userId",
    name_variable: "userName",
    selection: LIST_SELECTION,
};

const MANGA_LIST: LookupTemplate = LookupTemplate {
    root: "MediaListCollection",
    filter: Some("type: MANGA"),
    id_variable: "userId",
    name_variable: "userName",
    selection: LIST_SELECTION,
};

/// The lookup template for a resource kind.
pub fn lookup_template(kind: ResourceKind) -> &'static LookupTemplate {
    match kind {
        ResourceKind::Anime => &ANIME,
        ResourceKind::Manga => &MANGA,
        ResourceKind::Character => &CHARACTER,
        ResourceKind::Staff => &STAFF,
        ResourceKind::Studio => &STUDIO,
        ResourceKind::User => &USER,
        ResourceKind::UserStats => &USER_STATS,
        ResourceKind::AnimeList => &ANIME_LIST,
        ResourceKind::MangaList => &MANGA_LIST,
    }
}

const SEARCH_ANIME: SearchTemplate = SearchTemplate {
    field: "media",
    filter: Some("type: ANIME"),
    selection: MEDIA_RESULT_SELECTION,
};

const SEARCH_MANGA: SearchTemplate = SearchTemplate {
    field: "media",
    filter: Some("type: MANGA"),
    selection: MEDIA_RESULT_SELECTION,
};

const SEARCH_CHARACTER: SearchTemplate = SearchTemplate {
    field: "characters",
    filter: None,
    selection: "id name { english: full }",
};

const SEARCH_STAFF: SearchTemplate = SearchTemplate {
    field: "staff",
    filter: None,
    selection: "id name { english: full }",
};

const SEARCH_STUDIO: SearchTemplate = SearchTemplate {
    field: "studios",
    filter: None,
    selection: "id name",
};

/// The search template for a search kind.
pub fn search_template(kind: SearchKind) -> &'static SearchTemplate {
    match kind {
        SearchKind::Anime => &SEARCH_ANIME,
        SearchKind::Manga => &SEARCH_MANGA,
        SearchKind::Character => &SEARCH_CHARACTER,
        SearchKind::Staff => &SEARCH_STAFF,
        SearchKind::Studio => &SEARCH_STUDIO,
    }
}

/// Field selection for the authenticated user, same shape as a profile.
pub fn viewer_selection() -> &'static str {
    USER_SELECTION
}
