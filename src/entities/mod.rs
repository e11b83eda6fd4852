// Static registry of the admin-managed portfolio entities.
//
// Every admin endpoint is path-parameterized by entity slug and resolves
// through this table before touching the store; an unknown slug is a 404
// with no database interaction.

/// Definition of one listable entity.
pub struct EntityDef {
    /// URL path segment.
    pub slug: &'static str,
    /// Backing table.
    pub table: &'static str,
    /// Primary bilingual column pair, used by the translation filter.
    pub english_column: &'static str,
    pub french_column: &'static str,
    /// Columns the free-text search matches against.
    pub search_columns: &'static [&'static str],
    /// Sortable-column allow-list. Requests naming any other column fall
    /// back to `default_sort`.
    pub sort_columns: &'static [&'static str],
    pub default_sort: &'static str,
    /// Columns writable through create/update bodies. Everything else
    /// (id, timestamps) is store-managed.
    pub writable_columns: &'static [&'static str],
    /// Reviewable entities carry a `status` column and accept the
    /// approve/reject bulk actions.
    pub reviewable: bool,
}

pub const ENTITIES: &[EntityDef] = &[
    EntityDef {
        slug: "skills",
        table: "skills",
        english_column: "name_en",
        french_column: "name_fr",
        search_columns: &["name_en", "name_fr", "category"],
        sort_columns: &["order", "name_en", "name_fr", "category", "level", "created_at"],
        default_sort: "order",
        writable_columns: &["name_en", "name_fr", "category", "level", "order"],
        reviewable: false,
    },
    EntityDef {
        slug: "projects",
        table: "projects",
        english_column: "title_en",
        french_column: "title_fr",
        search_columns: &["title_en", "title_fr", "description_en", "description_fr"],
        sort_columns: &["order", "title_en", "title_fr", "featured", "created_at"],
        default_sort: "order",
        writable_columns: &[
            "title_en",
            "title_fr",
            "description_en",
            "description_fr",
            "tech_stack",
            "url",
            "image_url",
            "featured",
            "order",
        ],
        reviewable: false,
    },
    EntityDef {
        slug: "experience",
        table: "experience",
        english_column: "role_en",
        french_column: "role_fr",
        search_columns: &["role_en", "role_fr", "company"],
        sort_columns: &["order", "role_en", "role_fr", "company", "start_date", "created_at"],
        default_sort: "order",
        writable_columns: &[
            "role_en",
            "role_fr",
            "company",
            "description_en",
            "description_fr",
            "start_date",
            "end_date",
            "order",
        ],
        reviewable: false,
    },
    EntityDef {
        slug: "education",
        table: "education",
        english_column: "degree_en",
        french_column: "degree_fr",
        search_columns: &["degree_en", "degree_fr", "institution"],
        sort_columns: &[
            "order",
            "degree_en",
            "degree_fr",
            "institution",
            "start_date",
            "created_at",
        ],
        default_sort: "order",
        writable_columns: &[
            "degree_en",
            "degree_fr",
            "institution",
            "start_date",
            "end_date",
            "order",
        ],
        reviewable: false,
    },
    EntityDef {
        slug: "hobbies",
        table: "hobbies",
        english_column: "name_en",
        french_column: "name_fr",
        search_columns: &["name_en", "name_fr"],
        sort_columns: &["order", "name_en", "name_fr", "created_at"],
        default_sort: "order",
        writable_columns: &["name_en", "name_fr", "icon", "order"],
        reviewable: false,
    },
    EntityDef {
        slug: "testimonials",
        table: "testimonials",
        english_column: "quote_en",
        french_column: "quote_fr",
        search_columns: &["author", "quote_en", "quote_fr"],
        sort_columns: &["order", "author", "status", "created_at"],
        default_sort: "order",
        writable_columns: &["author", "quote_en", "quote_fr", "status", "order"],
        reviewable: true,
    },
    EntityDef {
        slug: "social-links",
        table: "social_links",
        english_column: "label_en",
        french_column: "label_fr",
        search_columns: &["label_en", "label_fr", "url"],
        sort_columns: &["order", "label_en", "label_fr", "created_at"],
        default_sort: "order",
        writable_columns: &["label_en", "label_fr", "url", "icon", "order"],
        reviewable: false,
    },
];

pub fn resolve(slug: &str) -> Option<&'static EntityDef> {
    ENTITIES.iter().find(|def| def.slug == slug)
}

impl EntityDef {
    pub fn is_writable(&self, column: &str) -> bool {
        self.writable_columns.iter().any(|c| *c == column)
    }
}
