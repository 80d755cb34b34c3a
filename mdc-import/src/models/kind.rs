//! Entity kinds handled by the importer

use serde::Serialize;
use std::fmt;

/// The four source entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[value(alias = "locations")]
    Location,
    #[value(alias = "organizations", alias = "orgs")]
    Organization,
    #[value(alias = "services")]
    Service,
    #[value(alias = "taxonomies")]
    Taxonomy,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Location,
        EntityKind::Organization,
        EntityKind::Service,
        EntityKind::Taxonomy,
    ];

    /// Required root element of a source file, also the document `_type`
    pub fn root_element(self) -> &'static str {
        match self {
            EntityKind::Location => "location",
            EntityKind::Organization => "organization",
            EntityKind::Service => "service",
            EntityKind::Taxonomy => "taxonomy",
        }
    }

    /// Prefix of fallback document ids
    pub fn id_prefix(self) -> &'static str {
        match self {
            EntityKind::Location => "loc",
            EntityKind::Organization => "org",
            EntityKind::Service => "ser",
            EntityKind::Taxonomy => "tax",
        }
    }

    /// Source folder name under the input root
    pub fn default_input_dir(self) -> &'static str {
        match self {
            EntityKind::Location => "location-data",
            EntityKind::Organization => "org-data",
            EntityKind::Service => "service-data",
            EntityKind::Taxonomy => "taxonomy-data",
        }
    }

    /// NDJSON output file name
    pub fn default_output_file(self) -> &'static str {
        match self {
            EntityKind::Location => "locations.ndjson",
            EntityKind::Organization => "organizations.ndjson",
            EntityKind::Service => "services.ndjson",
            EntityKind::Taxonomy => "taxonomies.ndjson",
        }
    }

    /// Taxonomy folders are nested one list per subfolder
    pub fn scans_recursively(self) -> bool {
        matches!(self, EntityKind::Taxonomy)
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Location => "locations",
            EntityKind::Organization => "organizations",
            EntityKind::Service => "services",
            EntityKind::Taxonomy => "taxonomies",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_element())
    }
}
